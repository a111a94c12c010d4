//! Reading content files from disk or the embedded sample.

use super::record::{CaseStudy, RecordMeta};
use crate::error::CatalogError;
use ignore::WalkBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Sample catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Display name used in errors for the embedded catalog.
const BUILTIN_SOURCE: &str = "<builtin>";

/// The raw contents of one content file, before validation.
///
/// Every collection is optional so authors can split content across files
/// (e.g. `services.json`, `cases/*.toml`).
#[derive(Debug, Default, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub services: Vec<RecordMeta>,
    #[serde(default)]
    pub cases: Vec<CaseStudy>,
    #[serde(default)]
    pub pages: Vec<RecordMeta>,
}

impl ContentFile {
    /// Append another file's records after this one's.
    pub fn extend(&mut self, other: Self) {
        self.services.extend(other.services);
        self.cases.extend(other.cases);
        self.pages.extend(other.pages);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Option<Format> {
    match path.extension()?.to_str()? {
        "json" => Some(Format::Json),
        "toml" => Some(Format::Toml),
        _ => None,
    }
}

fn parse(text: &str, format: Format, path: &Path) -> Result<ContentFile, CatalogError> {
    match format {
        Format::Json => serde_json::from_str(text).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Format::Toml => toml::from_str(text).map_err(|source| CatalogError::Toml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse the embedded sample catalog.
pub(crate) fn builtin() -> Result<ContentFile, CatalogError> {
    parse(BUILTIN_CATALOG, Format::Json, Path::new(BUILTIN_SOURCE))
}

/// Parse a JSON string as a content file.
pub(crate) fn from_json_str(text: &str) -> Result<ContentFile, CatalogError> {
    parse(text, Format::Json, Path::new("<inline>"))
}

/// Read a single content file, choosing the format by extension.
pub(crate) fn read_file(path: &Path) -> Result<ContentFile, CatalogError> {
    let format = format_of(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text, format, path)
}

/// Collect every `.json`/`.toml` file below `dir`, sorted by path.
///
/// Hidden files and anything matched by ignore files are skipped.
fn content_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(dir).build() {
        let entry = entry?;
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if is_file && format_of(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Read a file or a directory of content files, merged in path order.
pub(crate) fn read_path(path: &Path) -> Result<ContentFile, CatalogError> {
    let metadata = std::fs::metadata(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return read_file(path);
    }

    let mut merged = ContentFile::default();
    for file in content_files(path)? {
        tracing::debug!("Reading content file {}", file.display());
        merged.extend(read_file(&file)?);
    }
    Ok(merged)
}
