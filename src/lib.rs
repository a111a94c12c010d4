pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod query_param;
pub mod schema;
pub mod search;
pub mod server;
pub mod session;
pub mod state;
pub mod tools;
pub mod tracing;

pub use catalog::{
    CaseStudy, Catalog, Category, ContentRecord, FunctionCategory, IndustryCategory, RecordKind,
    RecordMeta,
};
pub use config::Config;
pub use search::{EmptyQueryPolicy, SearchOutcome, filter_cases, matches, passes_facets, search};
pub use server::ContentServer;
pub use session::SiteState;
pub use state::FilterState;
