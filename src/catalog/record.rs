//! Content record types: services, case studies, and pages.

use super::category::{FunctionCategory, IndustryCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields shared by every searchable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeta {
    /// Unique within the record's collection.
    pub id: String,
    pub title: String,
    /// Navigation target, used verbatim.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A case study with its facet values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub industry_category: IndustryCategory,
    /// Treated as a set; duplicates are collapsed when the catalog is built.
    pub function_categories: Vec<FunctionCategory>,
    pub company: String,
    pub solution_type: String,
}

/// Which collection a record belongs to.
///
/// The declaration order is the result priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    Service,
    Case,
    Page,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Case => "case",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed view of one record in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRecord<'a> {
    Service(&'a RecordMeta),
    Case(&'a CaseStudy),
    Page(&'a RecordMeta),
}

impl<'a> ContentRecord<'a> {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Service(_) => RecordKind::Service,
            Self::Case(_) => RecordKind::Case,
            Self::Page(_) => RecordKind::Page,
        }
    }

    pub fn meta(&self) -> &'a RecordMeta {
        match self {
            Self::Service(meta) | Self::Page(meta) => meta,
            Self::Case(case) => &case.meta,
        }
    }

    pub fn id(&self) -> &'a str {
        &self.meta().id
    }

    /// Key that is unique across the whole catalog (`kind:id`).
    pub fn key(&self) -> String {
        format!("{}:{}", self.kind(), self.id())
    }

    pub fn as_case(&self) -> Option<&'a CaseStudy> {
        match self {
            Self::Case(case) => Some(case),
            _ => None,
        }
    }
}

/// Anything that exposes the common searchable fields.
pub trait Searchable {
    fn meta(&self) -> &RecordMeta;
}

impl Searchable for RecordMeta {
    fn meta(&self) -> &RecordMeta {
        self
    }
}

impl Searchable for CaseStudy {
    fn meta(&self) -> &RecordMeta {
        &self.meta
    }
}

impl Searchable for ContentRecord<'_> {
    fn meta(&self) -> &RecordMeta {
        Self::meta(self)
    }
}
