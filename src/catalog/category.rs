//! Closed facet enumerations for case studies.
//!
//! Both enumerations serialize as kebab-case slugs (`real-estate`,
//! `custom-solutions`), which is the form used in content files, URLs, and
//! tool requests. Unknown slugs fail deserialization, so a loaded catalog can
//! never reference a category outside these sets.

use crate::error::CategoryError;
use rapidfuzz::distance::jaro_winkler;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Industry a case study was delivered in.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum IndustryCategory {
    RealEstate,
    ECommerce,
    Healthcare,
    Finance,
    Insurance,
    Logistics,
    Manufacturing,
    ProfessionalServices,
    Education,
    Hospitality,
    MarketingAgencies,
    YourIndustry,
}

/// Business function a case study automated.
///
/// DO NOT add doc comments to individual variants (see [`IndustryCategory`]).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionCategory {
    Sales,
    Marketing,
    Operations,
    FinanceAccounting,
    CustomerService,
    HumanResources,
    ProjectManagement,
    Reporting,
    CustomSolutions,
}

/// Shared behaviour of the two facet enumerations.
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    /// Facet name used in messages ("industry" / "function").
    const FACET: &'static str;
    /// Every member, in display order.
    const ALL: &'static [Self];
    /// The open-ended "custom/other" bucket of this facet.
    const CATCH_ALL: Self;

    /// The kebab-case slug used in content files and URLs.
    fn slug(self) -> &'static str;

    /// Whether this value is the facet's catch-all sentinel.
    ///
    /// Only display code consults this; matching treats the sentinel like
    /// any other member.
    fn is_catch_all(self) -> bool {
        self == Self::CATCH_ALL
    }

    /// Parse a slug, case-insensitively, suggesting the closest member on failure.
    fn parse_slug(input: &str) -> Result<Self, CategoryError> {
        let normalized = input.trim().to_lowercase().replace([' ', '_'], "-");
        if let Some(found) = Self::ALL.iter().copied().find(|c| c.slug() == normalized) {
            return Ok(found);
        }

        let suggestion = Self::ALL
            .iter()
            .map(|c| {
                let score = jaro_winkler::similarity(normalized.chars(), c.slug().chars());
                (c.slug(), score)
            })
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(slug, _)| slug);

        Err(CategoryError::Unknown {
            facet: Self::FACET,
            value: input.to_string(),
            suggestion,
        })
    }
}

impl Category for IndustryCategory {
    const FACET: &'static str = "industry";
    const ALL: &'static [Self] = &[
        Self::RealEstate,
        Self::ECommerce,
        Self::Healthcare,
        Self::Finance,
        Self::Insurance,
        Self::Logistics,
        Self::Manufacturing,
        Self::ProfessionalServices,
        Self::Education,
        Self::Hospitality,
        Self::MarketingAgencies,
        Self::YourIndustry,
    ];
    const CATCH_ALL: Self = Self::YourIndustry;

    fn slug(self) -> &'static str {
        match self {
            Self::RealEstate => "real-estate",
            Self::ECommerce => "e-commerce",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Insurance => "insurance",
            Self::Logistics => "logistics",
            Self::Manufacturing => "manufacturing",
            Self::ProfessionalServices => "professional-services",
            Self::Education => "education",
            Self::Hospitality => "hospitality",
            Self::MarketingAgencies => "marketing-agencies",
            Self::YourIndustry => "your-industry",
        }
    }
}

impl Category for FunctionCategory {
    const FACET: &'static str = "function";
    const ALL: &'static [Self] = &[
        Self::Sales,
        Self::Marketing,
        Self::Operations,
        Self::FinanceAccounting,
        Self::CustomerService,
        Self::HumanResources,
        Self::ProjectManagement,
        Self::Reporting,
        Self::CustomSolutions,
    ];
    const CATCH_ALL: Self = Self::CustomSolutions;

    fn slug(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Marketing => "marketing",
            Self::Operations => "operations",
            Self::FinanceAccounting => "finance-accounting",
            Self::CustomerService => "customer-service",
            Self::HumanResources => "human-resources",
            Self::ProjectManagement => "project-management",
            Self::Reporting => "reporting",
            Self::CustomSolutions => "custom-solutions",
        }
    }
}

impl fmt::Display for IndustryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl fmt::Display for FunctionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for IndustryCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_slug(s)
    }
}

impl FromStr for FunctionCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_slug(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("real-estate", IndustryCategory::RealEstate)]
    #[case("Real Estate", IndustryCategory::RealEstate)]
    #[case("e_commerce", IndustryCategory::ECommerce)]
    #[case("your-industry", IndustryCategory::YourIndustry)]
    fn parses_industry_slugs(#[case] input: &str, #[case] expected: IndustryCategory) {
        check!(input.parse::<IndustryCategory>() == Ok(expected));
    }

    #[test]
    fn unknown_slug_suggests_closest() {
        let err = "real-estat".parse::<IndustryCategory>().unwrap_err();
        check!(
            err == CategoryError::Unknown {
                facet: "industry",
                value: "real-estat".to_string(),
                suggestion: Some("real-estate"),
            }
        );
    }

    #[test]
    fn unrelated_input_has_no_suggestion() {
        let err = "qqqqqqqqqqqq".parse::<FunctionCategory>().unwrap_err();
        let CategoryError::Unknown { suggestion, .. } = err;
        check!(suggestion.is_none());
    }

    #[test]
    fn slugs_match_serde_representation() {
        for industry in IndustryCategory::ALL {
            let json = serde_json::to_string(industry).unwrap();
            check!(json == format!("\"{}\"", industry.slug()));
        }
        for function in FunctionCategory::ALL {
            let json = serde_json::to_string(function).unwrap();
            check!(json == format!("\"{}\"", function.slug()));
        }
    }

    #[test]
    fn catch_all_sentinels() {
        check!(IndustryCategory::YourIndustry.is_catch_all());
        check!(FunctionCategory::CustomSolutions.is_catch_all());
        check!(!IndustryCategory::RealEstate.is_catch_all());
        check!(IndustryCategory::ALL.iter().filter(|c| c.is_catch_all()).count() == 1);
        check!(FunctionCategory::ALL.iter().filter(|c| c.is_catch_all()).count() == 1);
    }
}
