//! Industry and function facet filtering for case studies.

use crate::catalog::{CaseStudy, Category, FunctionCategory, IndustryCategory};
use std::collections::BTreeMap;

/// Whether `case` passes both facets.
///
/// An empty selection leaves its facet unconstrained. Within a facet any
/// selected value suffices (OR); across facets both must pass (AND). Catch-all
/// values are compared like every other member.
pub fn passes_facets(
    case: &CaseStudy,
    industries: &[IndustryCategory],
    functions: &[FunctionCategory],
) -> bool {
    passes_industry(case, industries) && passes_function(case, functions)
}

fn passes_industry(case: &CaseStudy, industries: &[IndustryCategory]) -> bool {
    industries.is_empty() || industries.contains(&case.industry_category)
}

fn passes_function(case: &CaseStudy, functions: &[FunctionCategory]) -> bool {
    functions.is_empty()
        || case
            .function_categories
            .iter()
            .any(|f| functions.contains(f))
}

/// Number of case studies carrying each facet value.
///
/// Counts cover the whole case pool and ignore the current selection, so
/// every value listed in [`Category::ALL`] has an entry (possibly zero).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCounts {
    pub industries: BTreeMap<IndustryCategory, usize>,
    pub functions: BTreeMap<FunctionCategory, usize>,
}

impl FacetCounts {
    pub fn from_cases(cases: &[CaseStudy]) -> Self {
        let mut industries: BTreeMap<_, _> =
            IndustryCategory::ALL.iter().map(|c| (*c, 0)).collect();
        let mut functions: BTreeMap<_, _> =
            FunctionCategory::ALL.iter().map(|c| (*c, 0)).collect();

        for case in cases {
            *industries.entry(case.industry_category).or_insert(0) += 1;
            for function in &case.function_categories {
                *functions.entry(*function).or_insert(0) += 1;
            }
        }

        Self {
            industries,
            functions,
        }
    }

    pub fn industry(&self, category: IndustryCategory) -> usize {
        self.industries.get(&category).copied().unwrap_or(0)
    }

    pub fn function(&self, category: FunctionCategory) -> usize {
        self.functions.get(&category).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecordMeta;
    use FunctionCategory::*;
    use IndustryCategory::*;
    use assert2::check;
    use rstest::rstest;

    fn case(industry: IndustryCategory, functions: &[FunctionCategory]) -> CaseStudy {
        CaseStudy {
            meta: RecordMeta {
                id: "case".to_string(),
                title: "Case".to_string(),
                url: "/case".to_string(),
                description: None,
                tags: vec![],
            },
            industry_category: industry,
            function_categories: functions.to_vec(),
            company: "Co".to_string(),
            solution_type: "Automation".to_string(),
        }
    }

    #[rstest]
    #[case(&[], &[], true)]
    #[case(&[RealEstate], &[], true)]
    #[case(&[Healthcare], &[], false)]
    #[case(&[Healthcare, RealEstate], &[], true)]
    #[case(&[], &[Sales], true)]
    #[case(&[], &[Reporting, Operations], true)]
    #[case(&[], &[Marketing], false)]
    #[case(&[RealEstate], &[Operations], true)]
    #[case(&[RealEstate], &[Marketing], false)]
    #[case(&[Finance], &[Sales], false)]
    fn facet_truth_table(
        #[case] industries: &[IndustryCategory],
        #[case] functions: &[FunctionCategory],
        #[case] expected: bool,
    ) {
        let record = case(RealEstate, &[Sales, Operations]);
        check!(passes_facets(&record, industries, functions) == expected);
    }

    #[test]
    fn catch_all_matches_like_any_member() {
        let custom = case(YourIndustry, &[CustomSolutions]);
        check!(passes_facets(&custom, &[YourIndustry], &[]));
        check!(passes_facets(&custom, &[], &[CustomSolutions]));
        check!(!passes_facets(&custom, &[RealEstate], &[]));

        let regular = case(RealEstate, &[Sales]);
        check!(!passes_facets(&regular, &[YourIndustry], &[]));
        check!(!passes_facets(&regular, &[], &[CustomSolutions]));
    }

    #[test]
    fn case_without_functions_fails_any_function_selection() {
        let record = case(Education, &[]);
        check!(passes_facets(&record, &[], &[]));
        check!(!passes_facets(&record, &[], &[Sales]));
    }

    #[test]
    fn counts_cover_every_value() {
        let cases = vec![
            case(RealEstate, &[Sales, Operations]),
            case(RealEstate, &[Sales]),
            case(Logistics, &[Operations]),
        ];
        let counts = FacetCounts::from_cases(&cases);
        check!(counts.industries.len() == IndustryCategory::ALL.len());
        check!(counts.functions.len() == FunctionCategory::ALL.len());
        check!(counts.industry(RealEstate) == 2);
        check!(counts.industry(Logistics) == 1);
        check!(counts.industry(Healthcare) == 0);
        check!(counts.function(Sales) == 2);
        check!(counts.function(Operations) == 2);
        check!(counts.function(CustomSolutions) == 0);
    }
}
