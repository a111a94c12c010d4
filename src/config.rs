//! Configuration loading.
//!
//! Settings come from a TOML file; the catalog location can additionally be
//! overridden from the environment or the command line.

use crate::catalog::Catalog;
use crate::error::{CatalogError, ConfigError};
use crate::search::EmptyQueryPolicy;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "CONTENT_SEARCH_CONFIG";

/// Environment variable naming the catalog file or directory.
pub const CATALOG_ENV: &str = "CONTENT_SEARCH_CATALOG";

/// Default cap for the inline quick-search box.
pub const DEFAULT_QUICK_SEARCH_LIMIT: usize = 3;

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Content file or directory. `None` uses the built-in sample catalog.
    pub catalog: Option<PathBuf>,
    pub quick_search_limit: usize,
    /// Cap for the dedicated search page. `None` is unbounded.
    pub search_page_limit: Option<usize>,
    pub empty_query: EmptyQueryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            quick_search_limit: DEFAULT_QUICK_SEARCH_LIMIT,
            search_page_limit: None,
            empty_query: EmptyQueryPolicy::default(),
        }
    }
}

impl Config {
    /// Parse a config document.
    ///
    /// Result limits must be positive; a zero cap would hide every match.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let zero_key = if config.quick_search_limit == 0 {
            Some("quick_search_limit")
        } else if config.search_page_limit == Some(0) {
            Some("search_page_limit")
        } else {
            None
        };
        match zero_key {
            Some(key) => Err(ConfigError::ZeroLimit {
                path: path.to_path_buf(),
                key,
            }),
            None => Ok(config),
        }
    }

    /// Read a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Resolve the config file and apply the catalog override.
    ///
    /// Lookup order: `explicit`, then `$CONTENT_SEARCH_CONFIG`, then
    /// `<config dir>/content-search/config.toml` if it exists, then defaults.
    /// `$CONTENT_SEARCH_CATALOG` replaces the configured catalog path.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let path = explicit
            .map(Path::to_path_buf)
            .or(from_env)
            .or_else(|| default_config_path().filter(|p| p.is_file()));

        let mut config = match path {
            Some(path) => {
                tracing::debug!("Reading config from {}", path.display());
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        if let Some(catalog) = std::env::var_os(CATALOG_ENV) {
            config.catalog = Some(PathBuf::from(catalog));
        }

        Ok(config)
    }

    /// Load the configured catalog, falling back to the built-in sample.
    pub fn open_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => {
                let expanded = expand_tilde(&path.to_string_lossy()).into_owned();
                Catalog::load(Path::new(&expanded))
            }
            None => {
                tracing::info!("No catalog configured, using the built-in sample catalog");
                Catalog::builtin()
            }
        }
    }
}

/// `<config dir>/content-search/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("content-search").join("config.toml"))
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
///
/// Returns `Cow::Borrowed` if no expansion needed, `Cow::Owned` if expanded.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
