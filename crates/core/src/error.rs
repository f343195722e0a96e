//! # Catalog Errors
//!
//! Only the I/O-facing edges (fixture loading, config files) can fail.
//! Joining, filtering and state transitions are total and never return these.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading fixtures or configuration
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {collection} id {id}")]
    DuplicateId { collection: &'static str, id: u32 },

    #[error("invalid config at {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown output format '{0}' (expected text, html or json)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
