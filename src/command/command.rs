//! Command definitions
//!
//! Represents requests against the catalog.

use crate::catalog::BookUpdate;

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new book
    Add {
        isbn: String,
        title: String,
        author: String,
        genre: Option<String>,
    },

    /// Check out an available book
    CheckOut { isbn: String },

    /// Check in a checked-out book
    CheckIn { isbn: String },

    /// Overwrite some fields of a book
    Update { isbn: String, update: BookUpdate },

    /// Remove a book
    Remove { isbn: String },

    /// Look up a book
    Search { isbn: String },

    /// List every book
    List,

    /// List transactions, most recent first
    History,
}

impl Command {
    /// `true` for commands that can change the catalog
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Command::Search { .. } | Command::List | Command::History
        )
    }
}
