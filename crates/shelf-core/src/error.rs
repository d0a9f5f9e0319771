//! Error types for catalog operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Backing file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Backing file exists but is not a valid catalog document
    #[error("Parse error: {0}")]
    Parse(String),

    /// A book with this ISBN is already in the catalog
    #[error("Duplicate ISBN: {0}")]
    DuplicateIsbn(String),

    /// No book with the given ISBN
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
