//! Error types for wrapgen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using wrapgen's Error
pub type Result<T> = std::result::Result<T, Error>;

/// wrapgen error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
