//! Plain-text rendering of search results, case listings, and facet state.
//!
//! Output is Markdown-flavoured text shared by the MCP tools and the CLI.

use crate::catalog::{CaseStudy, Category, ContentRecord, FunctionCategory, IndustryCategory};
use crate::display::{CategoryDisplay, partition_catch_all};
use crate::query_param::to_query_string;
use crate::search::{FacetCounts, SearchOutcome};
use crate::state::FilterState;

/// Prompt shown when the query is blank and the page asks for input.
pub const EMPTY_QUERY_PROMPT: &str = "What are you looking for?";

/// Render a search outcome as a numbered list of records.
pub fn render_outcome(outcome: &SearchOutcome<'_>) -> String {
    match outcome {
        SearchOutcome::Prompt => format!(
            "{}\n\nTry a service, a tool name, or an industry (e.g. 'CRM', 'invoices', 'real estate').\n",
            EMPTY_QUERY_PROMPT
        ),
        SearchOutcome::NoResults { query } => {
            let mut msg = format!("No results found for '{}'.\n\n", query);
            msg.push_str("Search tips:\n");
            msg.push_str("• Try a shorter or more general term\n");
            msg.push_str("• Search matches titles, descriptions, and tags\n");
            msg.push_str("• Browse all case studies with list_cases\n");
            msg
        }
        SearchOutcome::Results(records) => render_records(records),
    }
}

/// Render records as a numbered list grouped only by their kind label.
pub fn render_records(records: &[ContentRecord<'_>]) -> String {
    let mut output = format!("{} result(s):\n\n", records.len());
    for (idx, record) in records.iter().enumerate() {
        let meta = record.meta();
        output.push_str(&format!(
            "{}. [{}] {} → {}\n",
            idx + 1,
            record.kind(),
            meta.title,
            meta.url
        ));
        if let Some(case) = record.as_case() {
            output.push_str(&format!("   {}\n", case_summary(case)));
        }
        if let Some(description) = &meta.description {
            output.push_str(&format!("   {}\n", description));
        }
        output.push('\n');
    }
    output
}

/// Render the case-study listing for the given filter state.
pub fn render_cases(cases: &[&CaseStudy], state: &FilterState) -> String {
    let mut output = render_state(state);
    output.push('\n');

    if cases.is_empty() {
        output.push_str("No case studies match the current filters.\n");
        if !state.is_empty() {
            output.push_str("Try removing a filter or use clear_all to start over.\n");
        }
        return output;
    }

    output.push_str(&format!("{} case stud(ies):\n\n", cases.len()));
    for (idx, case) in cases.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} → {}\n   {}\n",
            idx + 1,
            case.meta.title,
            case.meta.url,
            case_summary(case)
        ));
        if !case.meta.tags.is_empty() {
            output.push_str(&format!("   tags: {}\n", case.meta.tags.join(", ")));
        }
        output.push('\n');
    }
    output
}

/// Render the current query and selections.
pub fn render_state(state: &FilterState) -> String {
    let query = state.query();
    let mut output = String::from("Filters:\n");
    if query.trim().is_empty() {
        output.push_str("  query: (none)\n");
    } else {
        output.push_str(&format!(
            "  query: '{}' (link: {})\n",
            query,
            to_query_string(query)
        ));
    }
    output.push_str(&format!(
        "  industries: {}\n",
        chip_list(state.selected_industries())
    ));
    output.push_str(&format!(
        "  functions: {}\n",
        chip_list(state.selected_functions())
    ));
    output
}

/// Render every facet value with its label, icon, and case count.
///
/// Catch-all values are listed after the regular ones.
pub fn render_categories(counts: &FacetCounts) -> String {
    let mut output = String::from("Industries:\n");
    output.push_str(&category_lines(IndustryCategory::ALL, |c| counts.industry(c)));
    output.push_str("\nFunctions:\n");
    output.push_str(&category_lines(FunctionCategory::ALL, |c| counts.function(c)));
    output
}

fn category_lines<C: CategoryDisplay>(values: &[C], count: impl Fn(C) -> usize) -> String {
    let (regular, custom) = partition_catch_all(values);
    let mut output = String::new();
    for value in regular {
        let meta = value.display();
        output.push_str(&format!(
            "  {} {} ({}) - {}\n",
            meta.icon,
            meta.label,
            value.slug(),
            count(value)
        ));
    }
    for value in custom {
        let meta = value.display();
        output.push_str(&format!(
            "  {} {} ({}) - {} [custom]\n",
            meta.icon,
            meta.label,
            value.slug(),
            count(value)
        ));
    }
    output
}

fn chip_list<C: CategoryDisplay>(values: &[C]) -> String {
    if values.is_empty() {
        return "(all)".to_string();
    }
    values
        .iter()
        .map(|v| {
            let meta = v.display();
            format!("{} {}", meta.icon, meta.label)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn case_summary(case: &CaseStudy) -> String {
    let functions = case
        .function_categories
        .iter()
        .map(|f| f.display().label)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} · {} · {} · {}",
        case.company,
        case.industry_category.display().label,
        functions,
        case.solution_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::search::{EmptyQueryPolicy, filter_cases, search_page};
    use assert2::check;

    #[test]
    fn prompt_outcome_shows_prompt() {
        check!(render_outcome(&SearchOutcome::Prompt).starts_with(EMPTY_QUERY_PROMPT));
    }

    #[test]
    fn no_results_names_the_query() {
        let text = render_outcome(&SearchOutcome::NoResults {
            query: "zzz".to_string(),
        });
        check!(text.contains("No results found for 'zzz'"));
    }

    #[test]
    fn results_include_kind_title_and_url() {
        let catalog = Catalog::builtin().unwrap();
        let outcome = search_page(&catalog, "crm", None, EmptyQueryPolicy::Prompt);
        let text = render_outcome(&outcome);
        check!(text.contains("1. [service] CRM Integration → /services/crm-integration"));
        check!(text.contains("[case]"));
    }

    #[test]
    fn state_lists_selected_chips_in_order() {
        let mut state = FilterState::new();
        state.toggle_industry(IndustryCategory::Logistics);
        state.toggle_industry(IndustryCategory::RealEstate);
        state.set_query("lead routing");
        let text = render_state(&state);
        check!(text.contains("industries: 🚚 Logistics, 🏠 Real Estate"));
        check!(text.contains("functions: (all)"));
        check!(text.contains("?q=lead%20routing"));
    }

    #[test]
    fn empty_case_listing_suggests_clearing() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = FilterState::new();
        state.set_query("zzz-no-match");
        let text = render_cases(&filter_cases(&catalog, &state), &state);
        check!(text.contains("No case studies match"));
        check!(text.contains("clear_all"));
    }

    #[test]
    fn categories_put_catch_all_last() {
        let catalog = Catalog::builtin().unwrap();
        let text = render_categories(&FacetCounts::from_cases(catalog.cases()));
        let industries = text.split("\nFunctions:").next().unwrap();
        let last = industries.lines().last().unwrap();
        check!(last.contains("your-industry"));
        check!(last.ends_with("[custom]"));
    }
}
