//! Search and filtering over the content catalog.
//!
//! This module provides the free-text matcher, the industry/function facet
//! filter, and the composer that merges matches across record kinds.

// Module declarations
pub(crate) mod compose;
pub(crate) mod facets;
pub(crate) mod matcher;

// Public re-exports (used via lib.rs)
pub use compose::{EmptyQueryPolicy, SearchOutcome, filter_cases, search, search_page};
pub use facets::{FacetCounts, passes_facets};
pub use matcher::{NormalizedQuery, matches};
