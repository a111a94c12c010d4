pub mod cases;
pub mod filter;
pub mod search;

pub use cases::*;
pub use filter::*;
pub use search::*;
