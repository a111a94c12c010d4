//! MCP server exposing content search and case-study filtering.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::schema::inline_schema_for_type;
use crate::session::SiteState;
use crate::tools::cases::{
    ListCasesRequest, ListCategoriesRequest, handle_list_cases, handle_list_categories,
};
use crate::tools::filter::{
    FilterAction, SetQueryRequest, ToggleFunctionRequest, ToggleIndustryRequest,
    handle_filter_action,
};
use crate::tools::search::{
    QuickSearchRequest, SearchRequest, handle_quick_search, handle_search,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for site content search.
#[derive(Clone)]
pub struct ContentServer {
    /// Shared catalog and session filter state
    state: Arc<SiteState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for ContentServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl ContentServer {
    /// Create a server over `catalog` with an empty session filter.
    pub fn new(catalog: Arc<Catalog>, config: Config) -> Self {
        Self::from_state(Arc::new(SiteState::new(catalog, config)))
    }

    /// Create a server around existing shared state.
    pub fn from_state(state: Arc<SiteState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    /// Get a reference to the shared state.
    pub fn site_state(&self) -> &Arc<SiteState> {
        &self.state
    }

    #[tool(
        description = "Search services, case studies, and pages. Case-insensitive substring match on titles, descriptions, and tags. Results are ordered services first, then case studies, then pages.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request).await
    }

    #[tool(
        description = "Quick search returning only the top few results, as in the site's inline search box.",
        input_schema = inline_schema_for_type::<QuickSearchRequest>()
    )]
    async fn quick_search(
        &self,
        Parameters(request): Parameters<QuickSearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_quick_search(&self.state, request).await
    }

    #[tool(
        description = "List case studies filtered by optional search text, industries, and business functions. Any selected value within a facet matches; both facets must match. Does not change the session filters.",
        input_schema = inline_schema_for_type::<ListCasesRequest>()
    )]
    async fn list_cases(
        &self,
        Parameters(request): Parameters<ListCasesRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_cases(&self.state, request).await
    }

    #[tool(
        description = "List every industry and business function filter with its label and number of case studies.",
        input_schema = inline_schema_for_type::<ListCategoriesRequest>()
    )]
    async fn list_categories(
        &self,
        Parameters(request): Parameters<ListCategoriesRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_categories(&self.state, request).await
    }

    #[tool(
        description = "Replace the session search text and show the filtered case studies.",
        input_schema = inline_schema_for_type::<SetQueryRequest>()
    )]
    async fn set_query(
        &self,
        Parameters(SetQueryRequest { query }): Parameters<SetQueryRequest>,
    ) -> std::result::Result<String, String> {
        handle_filter_action(&self.state, FilterAction::SetQuery(query)).await
    }

    #[tool(
        description = "Select an industry filter, or deselect it if already selected, and show the filtered case studies.",
        input_schema = inline_schema_for_type::<ToggleIndustryRequest>()
    )]
    async fn toggle_industry(
        &self,
        Parameters(ToggleIndustryRequest { industry }): Parameters<ToggleIndustryRequest>,
    ) -> std::result::Result<String, String> {
        handle_filter_action(&self.state, FilterAction::ToggleIndustry(industry)).await
    }

    #[tool(
        description = "Select a business function filter, or deselect it if already selected, and show the filtered case studies.",
        input_schema = inline_schema_for_type::<ToggleFunctionRequest>()
    )]
    async fn toggle_function(
        &self,
        Parameters(ToggleFunctionRequest { function }): Parameters<ToggleFunctionRequest>,
    ) -> std::result::Result<String, String> {
        handle_filter_action(&self.state, FilterAction::ToggleFunction(function)).await
    }

    #[tool(description = "Clear the session search text, keeping industry and function filters.")]
    async fn clear_search(&self) -> std::result::Result<String, String> {
        handle_filter_action(&self.state, FilterAction::ClearSearch).await
    }

    #[tool(description = "Clear the session search text and all industry and function filters.")]
    async fn clear_all(&self) -> std::result::Result<String, String> {
        handle_filter_action(&self.state, FilterAction::ClearAll).await
    }

    #[tool(description = "Show the session filters and the case studies they select.")]
    async fn filter_state(&self) -> std::result::Result<String, String> {
        handle_filter_action(&self.state, FilterAction::Show).await
    }
}

#[tool_handler]
impl ServerHandler for ContentServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "content-search: search the site's services, case studies, and pages. \
                 Use search or quick_search for free text, list_cases to filter case studies \
                 by industry and function, and the set_query/toggle_*/clear_* tools to build \
                 up a filter step by step.",
            )
    }
}
