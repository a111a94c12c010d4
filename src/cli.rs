use crate::catalog::{Catalog, FunctionCategory, IndustryCategory};
use crate::config::Config;
use crate::format::{render_cases, render_categories, render_outcome};
use crate::search::{FacetCounts, filter_cases, search_page};
use crate::state::FilterState;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "content-search")]
#[command(about = "Search a consultancy site's services, case studies, and pages", long_about = None)]
pub struct Cli {
    /// Config file (default: $CONTENT_SEARCH_CONFIG or the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Catalog file or directory, overriding the config
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the MCP tools over stdio (default)
    Serve,
    /// Search services, case studies, and pages
    Search {
        /// Search text; omit to see the empty-query behaviour
        query: Option<String>,
        /// Read the query from a URL query string such as `?q=crm`
        #[arg(long, conflicts_with = "query")]
        from_url: Option<String>,
        #[arg(short = 'n', long, value_parser = parse_limit)]
        limit: Option<usize>,
    },
    /// List case studies, filtered by industry and function
    Cases {
        query: Option<String>,
        #[arg(short, long = "industry")]
        industries: Vec<IndustryCategory>,
        #[arg(short, long = "function")]
        functions: Vec<FunctionCategory>,
    },
    /// List industry and function filters with case counts
    Categories,
}

/// Run a one-shot command and return its rendered output.
///
/// `Serve` is handled by the binary and renders nothing here.
pub fn run_command(command: &Commands, catalog: &Catalog, config: &Config) -> String {
    match command {
        Commands::Serve => String::new(),
        Commands::Search {
            query,
            from_url,
            limit,
        } => {
            let query = match (query, from_url) {
                (Some(query), _) => query.clone(),
                (None, Some(url)) => FilterState::from_query_string(url).query().to_string(),
                (None, None) => String::new(),
            };
            let limit = limit.or(config.search_page_limit);
            render_outcome(&search_page(catalog, &query, limit, config.empty_query))
        }
        Commands::Cases {
            query,
            industries,
            functions,
        } => {
            let state = FilterState::with_selection(
                query.as_deref().unwrap_or(""),
                industries,
                functions,
            );
            render_cases(&filter_cases(catalog, &state), &state)
        }
        Commands::Categories => render_categories(&FacetCounts::from_cases(catalog.cases())),
    }
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("Could not parse --limit value '{}' as a positive integer", raw))?;
    if parsed == 0 {
        return Err("--limit must be greater than zero".to_string());
    }
    Ok(parsed)
}
