//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `sample_catalog`: the built-in catalog shipped with the binary
//! - `crm_catalog`: a small catalog with one CRM service, case, and page
//! - `site_state`: server state over the sample catalog with default config
//!
//! # Shared Infrastructure
//!
//! [`TempContent`] provides a temp directory for tests that write content
//! files to disk.

use content_search_mcp::{Catalog, Config, SiteState};
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A temporary content directory for test isolation.
///
/// Cleaned up automatically when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempContent {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempContent {
    /// Creates a new empty temporary directory.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content, creating parent directories.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }
}

impl Default for TempContent {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON for the catalog used by the ordering scenarios.
///
/// Collections are deliberately listed pages-first to show that result order
/// comes from record kind, not file order.
#[allow(dead_code)]
pub const CRM_CATALOG_JSON: &str = r#"{
    "pages": [
        {"id": "crm-faq", "title": "CRM Questions", "url": "/faq#crm"}
    ],
    "cases": [
        {
            "id": "x",
            "title": "Monday CRM Rollout",
            "url": "/case-studies/x",
            "tags": ["CRM"],
            "industryCategory": "real-estate",
            "functionCategories": ["sales"],
            "company": "Acme Realty",
            "solutionType": "CRM Implementation"
        },
        {
            "id": "y",
            "title": "Fleet Tracking",
            "url": "/case-studies/y",
            "tags": ["Dispatch"],
            "industryCategory": "logistics",
            "functionCategories": ["operations", "reporting"],
            "company": "SwiftRoute",
            "solutionType": "Custom Tool"
        }
    ],
    "services": [
        {"id": "crm-integration", "title": "CRM Integration", "url": "/services/crm-integration", "tags": []}
    ]
}"#;

#[fixture]
pub fn sample_catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog must be valid")
}

#[fixture]
pub fn crm_catalog() -> Catalog {
    Catalog::from_json_str(CRM_CATALOG_JSON).expect("CRM catalog must be valid")
}

#[fixture]
pub fn site_state() -> Arc<SiteState> {
    content_search_mcp::tracing::init();
    Arc::new(SiteState::new(
        Arc::new(Catalog::builtin().expect("builtin catalog must be valid")),
        Config::default(),
    ))
}
