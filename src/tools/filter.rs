//! Session filter-state tools.
//!
//! Each handler applies one mutation to the session's [`FilterState`] and
//! renders the resulting case listing while still holding the lock.

use crate::catalog::{FunctionCategory, IndustryCategory};
use crate::format::render_cases;
use crate::search::filter_cases;
use crate::session::SiteState;
use crate::state::FilterState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetQueryRequest {
    /// New search text (replaces the current query)
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleIndustryRequest {
    /// Industry to select, or to deselect if already selected
    pub industry: IndustryCategory,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleFunctionRequest {
    /// Business function to select, or to deselect if already selected
    pub function: FunctionCategory,
}

/// A filter-state mutation requested by a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetQuery(String),
    ToggleIndustry(IndustryCategory),
    ToggleFunction(FunctionCategory),
    ClearSearch,
    ClearAll,
    /// Leave the state unchanged and just report it.
    Show,
}

impl FilterAction {
    pub fn apply(self, state: &mut FilterState) {
        match self {
            Self::SetQuery(query) => state.set_query(query),
            Self::ToggleIndustry(industry) => state.toggle_industry(industry),
            Self::ToggleFunction(function) => state.toggle_function(function),
            Self::ClearSearch => state.clear_search(),
            Self::ClearAll => state.clear_all(),
            Self::Show => {}
        }
    }
}

/// Apply `action` to the session state and render the case listing it yields.
pub async fn handle_filter_action(
    state: &Arc<SiteState>,
    action: FilterAction,
) -> Result<String, String> {
    let mut filter = state.filter().await;
    tracing::debug!("Applying {:?} to session filter", action);
    action.apply(&mut filter);

    let cases = filter_cases(state.catalog(), &filter);
    Ok(render_cases(&cases, &filter))
}
