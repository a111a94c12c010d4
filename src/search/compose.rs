//! Composing results across record kinds.
//!
//! Results are ordered by kind (services, then cases, then pages) and keep
//! catalog order within a kind. There is no relevance score.

use super::facets::passes_facets;
use super::matcher::NormalizedQuery;
use crate::catalog::{CaseStudy, Catalog, ContentRecord};
use crate::state::FilterState;
use serde::{Deserialize, Serialize};

/// What the search page shows before the user has typed anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyQueryPolicy {
    /// Ask the user what they are looking for.
    #[default]
    Prompt,
    /// List the whole catalog.
    ShowAll,
}

/// Outcome of a search as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// The query was blank and the policy asks for input.
    Prompt,
    /// Nothing matched the query.
    NoResults { query: String },
    Results(Vec<ContentRecord<'a>>),
}

impl<'a> SearchOutcome<'a> {
    pub fn records(&self) -> &[ContentRecord<'a>] {
        match self {
            Self::Results(records) => records,
            Self::Prompt | Self::NoResults { .. } => &[],
        }
    }
}

/// Search every kind of record, in priority order, optionally capped.
///
/// An empty query matches the whole catalog; callers that want a prompt
/// instead should use [`search_page`].
pub fn search<'a>(
    catalog: &'a Catalog,
    query: &str,
    limit: Option<usize>,
) -> Vec<ContentRecord<'a>> {
    let query = NormalizedQuery::new(query);
    let matching = catalog.records().filter(|record| query.matches(record));

    let results: Vec<_> = match limit {
        Some(limit) => matching.take(limit).collect(),
        None => matching.collect(),
    };

    tracing::debug!(
        "Search for '{}' (limit {:?}) returned {} results",
        query.as_str().unwrap_or(""),
        limit,
        results.len()
    );

    results
}

/// Search with the empty-query behaviour of a search page or quick-search box.
pub fn search_page<'a>(
    catalog: &'a Catalog,
    query: &str,
    limit: Option<usize>,
    policy: EmptyQueryPolicy,
) -> SearchOutcome<'a> {
    if NormalizedQuery::new(query).is_empty() && policy == EmptyQueryPolicy::Prompt {
        return SearchOutcome::Prompt;
    }

    let results = search(catalog, query, limit);
    if results.is_empty() {
        SearchOutcome::NoResults {
            query: query.to_string(),
        }
    } else {
        SearchOutcome::Results(results)
    }
}

/// The case-study listing: free-text query AND both facets, in catalog order.
pub fn filter_cases<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a CaseStudy> {
    let query = NormalizedQuery::new(state.query());
    catalog
        .cases()
        .iter()
        .filter(|case| query.matches(*case))
        .filter(|case| {
            passes_facets(
                case,
                state.selected_industries(),
                state.selected_functions(),
            )
        })
        .collect()
}
