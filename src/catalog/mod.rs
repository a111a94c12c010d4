//! The read-only content catalog.
//!
//! A [`Catalog`] is built once from content files (or the embedded sample) and
//! never mutated afterwards, so it can be shared behind an `Arc` by any number
//! of concurrent readers without locking.

mod category;
mod loader;
mod record;

pub use category::{Category, FunctionCategory, IndustryCategory};
pub use loader::ContentFile;
pub use record::{CaseStudy, ContentRecord, RecordKind, RecordMeta, Searchable};

use crate::error::CatalogError;
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

/// Validated, immutable collection of services, case studies, and pages.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: Vec<RecordMeta>,
    cases: Vec<CaseStudy>,
    pages: Vec<RecordMeta>,
}

impl Catalog {
    /// Validate raw content and build a catalog.
    ///
    /// Rejects duplicate ids within a collection and collapses repeated
    /// function categories on a case study (first occurrence wins).
    pub fn from_content(content: ContentFile) -> Result<Self, CatalogError> {
        let ContentFile {
            services,
            mut cases,
            pages,
        } = content;

        ensure_unique_ids(RecordKind::Service, services.iter())?;
        ensure_unique_ids(RecordKind::Case, cases.iter().map(|c| &c.meta))?;
        ensure_unique_ids(RecordKind::Page, pages.iter())?;

        for case in &mut cases {
            let mut seen = HashSet::new();
            case.function_categories.retain(|f| seen.insert(*f));
        }

        Ok(Self {
            services,
            cases,
            pages,
        })
    }

    /// The sample catalog embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_content(loader::builtin()?)?;
        tracing::debug!(
            "Loaded builtin catalog: {} services, {} cases, {} pages",
            catalog.services.len(),
            catalog.cases.len(),
            catalog.pages.len()
        );
        Ok(catalog)
    }

    /// Parse a JSON content document.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        Self::from_content(loader::from_json_str(text)?)
    }

    /// Load a content file or a directory of content files.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let start = Instant::now();
        let catalog = Self::from_content(loader::read_path(path)?)?;
        tracing::info!(
            "Loaded catalog from {}: {} services, {} cases, {} pages in {:?}",
            path.display(),
            catalog.services.len(),
            catalog.cases.len(),
            catalog.pages.len(),
            start.elapsed()
        );
        Ok(catalog)
    }

    pub fn services(&self) -> &[RecordMeta] {
        &self.services
    }

    pub fn cases(&self) -> &[CaseStudy] {
        &self.cases
    }

    pub fn pages(&self) -> &[RecordMeta] {
        &self.pages
    }

    /// Total number of records across all collections.
    pub fn len(&self) -> usize {
        self.services.len() + self.cases.len() + self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every record in priority order: services, then cases, then pages.
    pub fn records(&self) -> impl Iterator<Item = ContentRecord<'_>> {
        self.services
            .iter()
            .map(ContentRecord::Service)
            .chain(self.cases.iter().map(ContentRecord::Case))
            .chain(self.pages.iter().map(ContentRecord::Page))
    }

    /// Look up a record by kind and id.
    pub fn get(&self, kind: RecordKind, id: &str) -> Option<ContentRecord<'_>> {
        match kind {
            RecordKind::Service => self
                .services
                .iter()
                .find(|s| s.id == id)
                .map(ContentRecord::Service),
            RecordKind::Case => self
                .cases
                .iter()
                .find(|c| c.meta.id == id)
                .map(ContentRecord::Case),
            RecordKind::Page => self
                .pages
                .iter()
                .find(|p| p.id == id)
                .map(ContentRecord::Page),
        }
    }
}

fn ensure_unique_ids<'a>(
    kind: RecordKind,
    records: impl Iterator<Item = &'a RecordMeta>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                kind: kind.as_str(),
                id: record.id.clone(),
            });
        }
    }
    Ok(())
}
