//! Error types for catalog loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML syntax or shape error
    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is not one of the supported formats
    #[error("Unsupported catalog format '{}' (expected .toml, .json or .txt)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// An option or group has a blank label
    #[error("Entry {0} has an empty label")]
    EmptyLabel(usize),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
