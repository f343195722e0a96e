//! # Catalog Configuration
//!
//! Optional settings read from `.catalog/config.json` in the runtime
//! directory, then overridden by environment variables. Command-line flags
//! are layered on top by the binary.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE: &str = "config.json";

/// How a rendered view is written out
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(CatalogError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding `users.json`, `categories.json`, `products.json`.
    /// `None` uses the bundled fixtures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixtures_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: None,
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Get the runtime directory path (.catalog)
pub fn get_runtime_path() -> PathBuf {
    if let Ok(path) = std::env::var("CATALOG_RUNTIME_PATH") {
        return PathBuf::from(path);
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".catalog")
}

impl CatalogConfig {
    /// Load from the runtime directory and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(get_runtime_path().join(CONFIG_FILE))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| CatalogError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `CATALOG_FIXTURES_DIR`, `CATALOG_FORMAT` and `NO_COLOR`
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(dir) = var("CATALOG_FIXTURES_DIR").filter(|d| !d.is_empty()) {
            self.fixtures_dir = Some(PathBuf::from(dir));
        }
        if let Some(format) = var("CATALOG_FORMAT").filter(|f| !f.is_empty()) {
            self.format = format.parse()?;
        }
        if var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
        Ok(())
    }
}
