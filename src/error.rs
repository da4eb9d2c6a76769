//! Error types for bookring
//!
//! Provides a unified error type for all catalog operations.

use thiserror::Error;

use crate::record::BookState;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Unified error type for bookring operations
#[derive(Debug, Error)]
pub enum CatalogError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Book not found (ISBN: {isbn})")]
    NotFound { isbn: String },

    // -------------------------------------------------------------------------
    // State Errors
    // -------------------------------------------------------------------------
    #[error("Book {isbn} is already {state}")]
    InvalidState { isbn: String, state: BookState },

    #[error("A book with ISBN {isbn} already exists")]
    DuplicateIsbn { isbn: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub(crate) fn not_found(isbn: &str) -> Self {
        CatalogError::NotFound {
            isbn: isbn.to_string(),
        }
    }
}
