//! Query and facet selection state for one search session.

use crate::catalog::{FunctionCategory, IndustryCategory};
use crate::query_param::{parse_query_param, to_query_string};

/// The current query plus selected industries and functions.
///
/// Selections behave as sets but remember the order values were picked in, so
/// they can be displayed that way. Every mutator is total and takes effect
/// immediately; there is nothing to await or retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    selected_industries: Vec<IndustryCategory>,
    selected_functions: Vec<FunctionCategory>,
}

impl FilterState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the query from a URL query string (`?q=...`); facets start empty.
    pub fn from_query_string(query_string: &str) -> Self {
        Self {
            query: parse_query_param(query_string),
            ..Self::default()
        }
    }

    /// Build a state from a query and facet selections; repeated values select once.
    pub fn with_selection(
        query: &str,
        industries: &[IndustryCategory],
        functions: &[FunctionCategory],
    ) -> Self {
        let mut state = Self::new();
        state.set_query(query);
        for industry in industries {
            if !state.selected_industries.contains(industry) {
                state.toggle_industry(*industry);
            }
        }
        for function in functions {
            if !state.selected_functions.contains(function) {
                state.toggle_function(*function);
            }
        }
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Selected industries, in selection order.
    pub fn selected_industries(&self) -> &[IndustryCategory] {
        &self.selected_industries
    }

    /// Selected functions, in selection order.
    pub fn selected_functions(&self) -> &[FunctionCategory] {
        &self.selected_functions
    }

    /// True when no query text and no facet values are set.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.selected_industries.is_empty()
            && self.selected_functions.is_empty()
    }

    /// Replace the query text.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Select `category` if it is not selected, deselect it otherwise.
    pub fn toggle_industry(&mut self, category: IndustryCategory) {
        toggle(&mut self.selected_industries, category);
    }

    /// Select `category` if it is not selected, deselect it otherwise.
    pub fn toggle_function(&mut self, category: FunctionCategory) {
        toggle(&mut self.selected_functions, category);
    }

    /// Reset only the query text.
    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    /// Reset the query and both facet selections.
    pub fn clear_all(&mut self) {
        self.query.clear();
        self.selected_industries.clear();
        self.selected_functions.clear();
    }

    /// Query string for a shareable link to this search.
    pub fn to_query_string(&self) -> String {
        to_query_string(&self.query)
    }
}

fn toggle<T: PartialEq>(selection: &mut Vec<T>, value: T) {
    if let Some(index) = selection.iter().position(|v| *v == value) {
        selection.remove(index);
    } else {
        selection.push(value);
    }
}
