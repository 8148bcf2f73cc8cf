//! UI error types

use crate::catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The catalog has nothing to offer and creation is disabled
    #[error("Nothing to select: the catalog is empty and creating options is disabled")]
    EmptyCatalog,

    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// IO error during terminal operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
