//! Free-text containment matching over record titles, descriptions, and tags.

use crate::catalog::Searchable;

/// A query normalized once and reused across every record in a scan.
///
/// An empty or whitespace-only query is vacuous: it matches every record.
/// Any other query is only lower-cased, so surrounding spaces are part of
/// the needle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedQuery {
    needle: Option<String>,
}

impl NormalizedQuery {
    pub fn new(query: &str) -> Self {
        let needle = (!query.trim().is_empty()).then(|| query.to_lowercase());
        Self { needle }
    }

    /// True when the query constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    /// The lower-cased needle, if any.
    pub fn as_str(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    pub fn matches<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        let meta = record.meta();

        contains(&meta.title, needle)
            || meta
                .description
                .as_deref()
                .is_some_and(|d| contains(d, needle))
            || meta.tags.iter().any(|tag| contains(tag, needle))
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Whether `record` matches the free-text `query`.
///
/// Case-insensitive substring test against the title, the description (when
/// present), and each tag. No tokenization, stemming, or fuzziness.
pub fn matches<R: Searchable + ?Sized>(record: &R, query: &str) -> bool {
    NormalizedQuery::new(query).matches(record)
}
