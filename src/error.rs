//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for application-level operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at the edges (CLI, server startup).
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading the content catalog fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file or directory could not be read.
    #[error("Failed to read catalog at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A JSON content file is malformed or references an unknown category.
    #[error("Invalid JSON content in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A TOML content file is malformed or references an unknown category.
    #[error("Invalid TOML content in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Content files must be `.json` or `.toml`.
    #[error("Unsupported content file format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
    /// Two records of the same kind share an id.
    #[error("Duplicate {kind} id '{id}' in catalog")]
    DuplicateId { kind: &'static str, id: String },
    /// Directory traversal failed.
    #[error("Failed to walk catalog directory: {0}")]
    Walk(#[from] ignore::Error),
}

/// Error returned when a category slug from user input is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("Unknown {facet} '{value}'{}", suggestion_suffix(.suggestion.as_deref()))]
    Unknown {
        facet: &'static str,
        value: String,
        suggestion: Option<&'static str>,
    },
}

fn suggestion_suffix(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(". Did you mean '{}'?", s))
}

/// Error returned when the configuration file cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config in {}: {key} must be greater than zero", .path.display())]
    ZeroLimit { path: PathBuf, key: &'static str },
}
