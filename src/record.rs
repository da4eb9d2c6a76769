//! Book records
//!
//! A record is owned by the ring and shared (not copied) with the
//! transaction history, so later edits show up in past transactions.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// Shared, lockable handle to a book record
pub type BookRef = Arc<RwLock<Book>>;

/// A single book in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier, immutable once created
    isbn: String,

    pub title: String,

    pub author: String,

    pub genre: String,

    /// `true` while the book is on the shelf
    pub available: bool,
}

/// Lifecycle of a book: Available ⇄ CheckedOut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookState {
    Available,
    CheckedOut,
}

impl fmt::Display for BookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookState::Available => write!(f, "Available"),
            BookState::CheckedOut => write!(f, "Checked Out"),
        }
    }
}

impl Book {
    /// Create a new, available book
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            available: true,
        }
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn state(&self) -> BookState {
        if self.available {
            BookState::Available
        } else {
            BookState::CheckedOut
        }
    }

    /// Wrap into a shared record
    pub fn into_ref(self) -> BookRef {
        Arc::new(RwLock::new(self))
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' by {} (ISBN: {}) - {}",
            self.title,
            self.author,
            self.isbn,
            self.state()
        )
    }
}
