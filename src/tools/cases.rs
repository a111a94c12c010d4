//! Stateless case-study listing and facet overview.

use crate::catalog::{FunctionCategory, IndustryCategory};
use crate::format::{render_cases, render_categories};
use crate::search::{FacetCounts, filter_cases};
use crate::session::SiteState;
use crate::state::FilterState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListCasesRequest {
    /// Optional search text applied to case titles, descriptions, and tags
    #[serde(default)]
    pub query: Option<String>,
    /// Industries to include (any of); empty means all industries
    #[serde(default)]
    pub industries: Vec<IndustryCategory>,
    /// Business functions to include (any of); empty means all functions
    #[serde(default)]
    pub functions: Vec<FunctionCategory>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListCategoriesRequest {}

impl ListCasesRequest {
    /// Build the equivalent filter state; repeated values select once.
    pub fn to_filter_state(&self) -> FilterState {
        FilterState::with_selection(
            self.query.as_deref().unwrap_or(""),
            &self.industries,
            &self.functions,
        )
    }
}

/// List case studies matching a query and facet selection without touching session state.
pub async fn handle_list_cases(
    state: &Arc<SiteState>,
    request: ListCasesRequest,
) -> Result<String, String> {
    let filter = request.to_filter_state();
    let cases = filter_cases(state.catalog(), &filter);
    Ok(render_cases(&cases, &filter))
}

/// List every industry and function with display metadata and case counts.
pub async fn handle_list_categories(
    state: &Arc<SiteState>,
    _request: ListCategoriesRequest,
) -> Result<String, String> {
    let counts = FacetCounts::from_cases(state.catalog().cases());
    Ok(render_categories(&counts))
}
