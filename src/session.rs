//! Shared state behind the MCP server.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::state::FilterState;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// The read-only catalog plus the session's mutable filter state.
///
/// The catalog is shared freely; the filter state is only touched while its
/// lock is held, so a tool call mutates and re-evaluates as one step.
pub struct SiteState {
    catalog: Arc<Catalog>,
    config: Config,
    filter: Mutex<FilterState>,
}

impl std::fmt::Debug for SiteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteState")
            .field("records", &self.catalog.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SiteState {
    pub fn new(catalog: Arc<Catalog>, config: Config) -> Self {
        Self {
            catalog,
            config,
            filter: Mutex::new(FilterState::default()),
        }
    }

    /// State with a filter seeded from a URL query string.
    pub fn with_query_string(catalog: Arc<Catalog>, config: Config, query_string: &str) -> Self {
        Self {
            catalog,
            config,
            filter: Mutex::new(FilterState::from_query_string(query_string)),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lock the session filter state.
    pub async fn filter(&self) -> MutexGuard<'_, FilterState> {
        self.filter.lock().await
    }
}
