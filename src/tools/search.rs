//! Free-text search across services, case studies, and pages.

use crate::format::render_outcome;
use crate::search::{EmptyQueryPolicy, search_page};
use crate::session::SiteState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Search text; matched case-insensitively against titles, descriptions, and tags
    pub query: String,
    /// Maximum number of results to return (default: the configured search page limit; 0 also means the default)
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct QuickSearchRequest {
    /// Search text
    pub query: String,
}

/// Search page: full result list, blank query handled by the configured policy.
pub async fn handle_search(
    state: &Arc<SiteState>,
    request: SearchRequest,
) -> Result<String, String> {
    let config = state.config();
    let limit = request.limit.filter(|&n| n > 0).or(config.search_page_limit);
    let outcome = search_page(state.catalog(), &request.query, limit, config.empty_query);
    Ok(render_outcome(&outcome))
}

/// Inline quick search: capped results, and a prompt instead of everything.
pub async fn handle_quick_search(
    state: &Arc<SiteState>,
    request: QuickSearchRequest,
) -> Result<String, String> {
    let limit = state.config().quick_search_limit;
    let outcome = search_page(
        state.catalog(),
        &request.query,
        Some(limit),
        EmptyQueryPolicy::Prompt,
    );
    Ok(render_outcome(&outcome))
}
