//! Labels and icons for facet values.
//!
//! Each mapping is an exhaustive `match`, so adding a category without display
//! metadata fails to compile.

use crate::catalog::{Category, FunctionCategory, IndustryCategory};

/// How a facet value is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMetadata {
    pub label: &'static str,
    pub icon: &'static str,
    /// Catch-all values are rendered apart from the regular chips.
    pub catch_all: bool,
}

/// Facet values that can be shown as filter chips.
pub trait CategoryDisplay: Category {
    fn display(self) -> DisplayMetadata;
}

impl CategoryDisplay for IndustryCategory {
    fn display(self) -> DisplayMetadata {
        let (label, icon) = match self {
            Self::RealEstate => ("Real Estate", "🏠"),
            Self::ECommerce => ("E-commerce", "🛒"),
            Self::Healthcare => ("Healthcare", "🏥"),
            Self::Finance => ("Finance", "💰"),
            Self::Insurance => ("Insurance", "🛡️"),
            Self::Logistics => ("Logistics", "🚚"),
            Self::Manufacturing => ("Manufacturing", "🏭"),
            Self::ProfessionalServices => ("Professional Services", "💼"),
            Self::Education => ("Education", "🎓"),
            Self::Hospitality => ("Hospitality", "🏨"),
            Self::MarketingAgencies => ("Marketing Agencies", "📣"),
            Self::YourIndustry => ("Your Industry", "✨"),
        };
        DisplayMetadata {
            label,
            icon,
            catch_all: self.is_catch_all(),
        }
    }
}

impl CategoryDisplay for FunctionCategory {
    fn display(self) -> DisplayMetadata {
        let (label, icon) = match self {
            Self::Sales => ("Sales", "📈"),
            Self::Marketing => ("Marketing", "🎯"),
            Self::Operations => ("Operations", "⚙️"),
            Self::FinanceAccounting => ("Finance & Accounting", "🧾"),
            Self::CustomerService => ("Customer Service", "💬"),
            Self::HumanResources => ("Human Resources", "👥"),
            Self::ProjectManagement => ("Project Management", "📋"),
            Self::Reporting => ("Reporting", "📊"),
            Self::CustomSolutions => ("Custom Solutions", "🧩"),
        };
        DisplayMetadata {
            label,
            icon,
            catch_all: self.is_catch_all(),
        }
    }
}

/// Split facet values into regular chips and the catch-all chip, keeping order.
pub fn partition_catch_all<C: CategoryDisplay>(values: &[C]) -> (Vec<C>, Vec<C>) {
    values.iter().partition(|c| !c.is_catch_all())
}
