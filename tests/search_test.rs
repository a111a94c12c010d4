mod common;

use assert2::check;
use common::{crm_catalog, sample_catalog};
use content_search_mcp::search::{EmptyQueryPolicy, SearchOutcome, search_page};
use content_search_mcp::{
    Catalog, Category, ContentRecord, FilterState, FunctionCategory, IndustryCategory, RecordKind,
    filter_cases, matches, passes_facets, search,
};
use rstest::rstest;

fn ids<'a>(records: &[ContentRecord<'a>]) -> Vec<&'a str> {
    records.iter().map(ContentRecord::id).collect()
}

// --- Matcher properties ---

/// Every record matches the empty query.
#[rstest]
fn empty_query_matches_every_record(sample_catalog: Catalog) {
    check!(sample_catalog.records().all(|r| matches(&r, "")));
    check!(search(&sample_catalog, "", None).len() == sample_catalog.len());
}

/// Any substring of a title, in any case, matches that record.
#[rstest]
fn title_substrings_match(sample_catalog: Catalog) {
    for record in sample_catalog.records() {
        let title = &record.meta().title;
        let chars: Vec<char> = title.chars().collect();
        let middle: String = chars[chars.len() / 4..chars.len() * 3 / 4].iter().collect();

        check!(matches(&record, title), "full title of {}", record.key());
        check!(matches(&record, &title.to_uppercase()), "upper title of {}", record.key());
        if !middle.trim().is_empty() {
            check!(matches(&record, &middle), "'{}' in {}", middle, record.key());
        }
    }
}

/// Tags match case-insensitively.
#[rstest]
fn tags_match_case_insensitively(sample_catalog: Catalog) {
    let results = search(&sample_catalog, "shopify", None);
    check!(ids(&results) == vec!["ecommerce-order-sync"]);
}

#[rstest]
fn unmatched_query_returns_nothing(sample_catalog: Catalog) {
    check!(search(&sample_catalog, "zzz-no-match", None).is_empty());
}

// --- Composer ordering ---

/// Concrete scenario: the service comes before the case even though the
/// case is listed first in the content file.
#[rstest]
fn crm_search_orders_service_before_case(crm_catalog: Catalog) {
    let results = search(&crm_catalog, "CRM", None);
    check!(ids(&results) == vec!["crm-integration", "x", "crm-faq"]);
}

/// Services precede cases precede pages, and catalog order holds within a kind.
#[rstest]
#[case("crm")]
#[case("automation")]
#[case("a")]
#[case("")]
fn results_are_grouped_by_kind(sample_catalog: Catalog, #[case] query: &str) {
    let results = search(&sample_catalog, query, None);
    let kinds: Vec<RecordKind> = results.iter().map(ContentRecord::kind).collect();
    check!(kinds.is_sorted());

    let case_ids: Vec<&str> = results
        .iter()
        .filter_map(ContentRecord::as_case)
        .map(|c| c.meta.id.as_str())
        .collect();
    let catalog_case_ids: Vec<&str> = sample_catalog
        .cases()
        .iter()
        .map(|c| c.meta.id.as_str())
        .filter(|id| case_ids.contains(id))
        .collect();
    check!(case_ids == catalog_case_ids);
}

#[rstest]
fn quick_search_caps_results(sample_catalog: Catalog) {
    let all = search(&sample_catalog, "a", None);
    let capped = search(&sample_catalog, "a", Some(3));
    check!(all.len() > 3);
    check!(capped.as_slice() == &all[..3]);
}

#[rstest]
fn search_page_policies(sample_catalog: Catalog) {
    check!(search_page(&sample_catalog, "", None, EmptyQueryPolicy::Prompt) == SearchOutcome::Prompt);
    check!(
        search_page(&sample_catalog, "", None, EmptyQueryPolicy::ShowAll)
            .records()
            .len()
            == sample_catalog.len()
    );
    check!(let SearchOutcome::NoResults { .. } =
        search_page(&sample_catalog, "zzz-no-match", None, EmptyQueryPolicy::ShowAll));
}

// --- Facets ---

/// `passes_facets` is exactly (I empty or industry in I) and (F empty or F meets functions).
#[rstest]
fn facet_predicate_matches_definition(sample_catalog: Catalog) {
    let industry_sets: Vec<Vec<IndustryCategory>> = vec![
        vec![],
        vec![IndustryCategory::RealEstate],
        vec![IndustryCategory::Logistics, IndustryCategory::Healthcare],
        vec![IndustryCategory::YourIndustry],
    ];
    let function_sets: Vec<Vec<FunctionCategory>> = vec![
        vec![],
        vec![FunctionCategory::Operations],
        vec![FunctionCategory::Sales, FunctionCategory::Marketing],
        vec![FunctionCategory::CustomSolutions],
    ];

    for case in sample_catalog.cases() {
        for industries in &industry_sets {
            for functions in &function_sets {
                let expected = (industries.is_empty()
                    || industries.contains(&case.industry_category))
                    && (functions.is_empty()
                        || case
                            .function_categories
                            .iter()
                            .any(|f| functions.contains(f)));
                check!(
                    passes_facets(case, industries, functions) == expected,
                    "{} with {:?} / {:?}",
                    case.meta.id,
                    industries,
                    functions
                );
            }
        }
    }
}

/// With no industries selected, only the function facet decides.
#[rstest]
fn empty_industry_facet_never_excludes(sample_catalog: Catalog) {
    for case in sample_catalog.cases() {
        for function in FunctionCategory::ALL {
            let functions = [*function];
            check!(
                passes_facets(case, &[], &functions)
                    == case.function_categories.contains(function)
            );
        }
    }
}

/// Concrete scenario: toggling real-estate twice leaves the listing unfiltered.
#[rstest]
fn double_toggle_leaves_listing_unfiltered(sample_catalog: Catalog) {
    let mut state = FilterState::new();
    state.toggle_industry(IndustryCategory::RealEstate);
    let filtered = filter_cases(&sample_catalog, &state);
    check!(filtered.len() == 2);
    check!(filtered.iter().all(|c| c.industry_category == IndustryCategory::RealEstate));

    state.toggle_industry(IndustryCategory::RealEstate);
    check!(state.selected_industries().is_empty());
    check!(filter_cases(&sample_catalog, &state).len() == sample_catalog.cases().len());
}

/// `clear_all` restores the unfiltered listing and the empty-query prompt.
#[rstest]
fn clear_all_reproduces_initial_view(sample_catalog: Catalog) {
    let initial = FilterState::new();
    let initial_cases = filter_cases(&sample_catalog, &initial);
    let initial_outcome =
        search_page(&sample_catalog, initial.query(), None, EmptyQueryPolicy::Prompt);

    let mut state = FilterState::new();
    state.set_query("invoices");
    state.toggle_industry(IndustryCategory::RealEstate);
    state.toggle_function(FunctionCategory::FinanceAccounting);
    check!(filter_cases(&sample_catalog, &state).len() == 1);

    state.clear_all();
    check!(state == initial);
    check!(filter_cases(&sample_catalog, &state) == initial_cases);
    check!(
        search_page(&sample_catalog, state.query(), None, EmptyQueryPolicy::Prompt)
            == initial_outcome
    );
}

/// The catch-all case is selected by its sentinel and excluded by others.
#[rstest]
fn catch_all_case_filters_like_any_other(sample_catalog: Catalog) {
    let state = FilterState::with_selection("", &[IndustryCategory::YourIndustry], &[]);
    let listed: Vec<_> = filter_cases(&sample_catalog, &state)
        .iter()
        .map(|c| c.meta.id.as_str())
        .collect();
    check!(listed == vec!["your-custom-project"]);

    let state = FilterState::with_selection("", &[], &[FunctionCategory::Sales]);
    check!(
        filter_cases(&sample_catalog, &state)
            .iter()
            .all(|c| c.meta.id != "your-custom-project")
    );
}
