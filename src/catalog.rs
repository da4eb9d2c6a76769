//! Catalog Module
//!
//! The catalog manager that coordinates the ring, the index and the
//! transaction history.
//!
//! ## Responsibilities
//! - Keep ring and index consistent across every mutation
//! - Drive the Available ⇄ CheckedOut lifecycle of each book
//! - Log one transaction per successful mutation
//! - Report expected failures as `Err` values, never panics

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::command::{Command, Response, Status};
use crate::config::{Config, DuplicatePolicy};
use crate::error::{CatalogError, Result};
use crate::history::{BoundedStack, Transaction, TransactionKind};
use crate::index::HashIndex;
use crate::record::{Book, BookRef, BookState};
use crate::ring::{BookRing, NodeHandle};

/// A catalog behind a single lock, for use from several threads
///
/// Ring, index and history are updated in separate steps, so every
/// operation has to run under the one mutex.
pub type SharedCatalog = Arc<Mutex<Catalog>>;

/// Fields to overwrite in `update_book`. `None` and empty strings are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
}

impl BookUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// `true` if no field would be written
    pub fn is_empty(&self) -> bool {
        [&self.title, &self.author, &self.genre]
            .iter()
            .all(|field| provided(field).is_none())
    }
}

/// The in-memory book catalog
///
/// Owns all three structures. The ring owns the records; the index only
/// stores handles into it; history entries share the records.
#[derive(Debug)]
pub struct Catalog {
    config: Config,

    /// Records in insertion order
    books: BookRing,

    /// ISBN → ring handle
    index: HashIndex,

    /// Most-recent-first transaction log
    history: BoundedStack<Transaction>,

    /// Sequence number for the next logged transaction
    next_seq: u64,
}

impl Catalog {
    /// Create a catalog with the default config
    pub fn new() -> Self {
        let config = Config::default();
        Self::build(config)
    }

    /// Create a catalog with the given config
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        Self {
            books: BookRing::new(),
            index: HashIndex::new(config.bucket_count),
            history: BoundedStack::new(config.history_capacity),
            next_seq: 1,
            config,
        }
    }

    /// Wrap the catalog in a mutex for shared use
    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(Mutex::new(self))
    }

    /// Execute a command and fold the outcome into a response
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Add {
                isbn,
                title,
                author,
                genre,
            } => match self.add_book(&isbn, &title, &author, genre.as_deref()) {
                Ok(_) => Response::ok(format!("Book '{}' added successfully.", title)),
                Err(e) => Response::from_error(&e),
            },
            Command::CheckOut { isbn } => match self.check_out(&isbn) {
                Ok(book) => {
                    Response::ok(format!("Book '{}' checked out successfully.", book.title))
                }
                Err(e) => Response::failed(&e, "Book not available or not found."),
            },
            Command::CheckIn { isbn } => match self.check_in(&isbn) {
                Ok(book) => {
                    Response::ok(format!("Book '{}' checked in successfully.", book.title))
                }
                Err(e) => Response::failed(&e, "Book not found or already checked in."),
            },
            Command::Update { isbn, update } => match self.update_book(&isbn, update) {
                Ok(_) => Response::ok(format!("Book with ISBN {} updated successfully.", isbn)),
                Err(e) => Response::failed(&e, "Book not found."),
            },
            Command::Remove { isbn } => match self.remove_book(&isbn) {
                Ok(book) => Response::ok(format!("Book '{}' removed successfully.", book.title)),
                Err(e) => Response::failed(&e, "Book not found."),
            },
            Command::Search { isbn } => match self.search_book(&isbn) {
                Ok(book) => Response::new(
                    Status::Ok,
                    vec!["Book Found:".to_string(), book.to_string()],
                ),
                Err(e) => Response::failed(&e, "Book not found."),
            },
            Command::List => {
                let mut lines = vec!["Library Book Collection:".to_string()];
                if self.is_empty() {
                    lines.push("No books in the library.".to_string());
                }
                lines.extend(self.list_all().map(|book| book.to_string()));
                Response::new(Status::Ok, lines)
            }
            Command::History => {
                let mut lines = vec!["Transaction History:".to_string()];
                if self.history.is_empty() {
                    lines.push("No transactions recorded.".to_string());
                }
                lines.extend(self.list_transactions().map(|tx| tx.to_string()));
                Response::new(Status::Ok, lines)
            }
        }
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Add a new, available book at the end of the catalog
    ///
    /// A missing or empty genre falls back to `Config::default_genre`.
    /// Under `DuplicatePolicy::Shadow` a repeated ISBN adds a second ring
    /// entry and repoints the index at it; the older entry stays in the
    /// ring but is no longer reachable by lookup.
    pub fn add_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        genre: Option<&str>,
    ) -> Result<NodeHandle> {
        if self.index.contains(isbn) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    debug!(isbn, "Rejected duplicate ISBN");
                    return Err(CatalogError::DuplicateIsbn {
                        isbn: isbn.to_string(),
                    });
                }
                DuplicatePolicy::Shadow => {
                    warn!(isbn, "Duplicate ISBN, older record is no longer indexed");
                }
            }
        }

        let genre = match genre.filter(|g| !g.is_empty()) {
            Some(genre) => genre,
            None => self.config.default_genre.as_str(),
        };
        let book = Book::new(isbn, title, author, genre).into_ref();

        let handle = self.books.insert_ref(Arc::clone(&book));
        self.index.put(isbn, handle);

        debug!(isbn, title, "Added book");
        self.record(TransactionKind::Insert, book, "Added new book");

        Ok(handle)
    }

    /// Check out an available book
    ///
    /// Fails with `NotFound` or `InvalidState` and changes nothing if the
    /// book is unknown or already checked out.
    pub fn check_out(&mut self, isbn: &str) -> Result<Book> {
        self.transition(isbn, BookState::CheckedOut)
    }

    /// Check in a checked-out book
    pub fn check_in(&mut self, isbn: &str) -> Result<Book> {
        self.transition(isbn, BookState::Available)
    }

    /// Overwrite the provided fields of a book in place
    ///
    /// The ISBN is never changed. Logs an "update" transaction even when
    /// no field is provided.
    pub fn update_book(&mut self, isbn: &str, update: BookUpdate) -> Result<Book> {
        let book = Arc::clone(self.lookup(isbn)?);

        let mut changed = Vec::new();
        let snapshot = {
            let mut record = book.write();
            if let Some(title) = provided(&update.title) {
                record.title = title.to_string();
                changed.push("title");
            }
            if let Some(author) = provided(&update.author) {
                record.author = author.to_string();
                changed.push("author");
            }
            if let Some(genre) = provided(&update.genre) {
                record.genre = genre.to_string();
                changed.push("genre");
            }
            record.clone()
        };

        let description = if changed.is_empty() {
            "Updated book metadata".to_string()
        } else {
            format!("Updated book metadata: {}", changed.join(", "))
        };

        debug!(isbn, fields = ?changed, "Updated book");
        self.record(TransactionKind::Update, book, description);

        Ok(snapshot)
    }

    /// Remove a book from the ring and the index
    ///
    /// Returns the removed record. On `NotFound` neither structure changes.
    pub fn remove_book(&mut self, isbn: &str) -> Result<Book> {
        let book = match self.books.delete_by_isbn(isbn) {
            Some(book) => book,
            None => {
                debug!(isbn, "Remove of unknown ISBN");
                return Err(CatalogError::not_found(isbn));
            }
        };
        self.index.remove(isbn);

        let snapshot = book.read().clone();
        debug!(isbn, title = %snapshot.title, "Removed book");
        self.record(TransactionKind::Remove, book, "Removed book from library");

        Ok(snapshot)
    }

    /// Look up a book by ISBN. Never mutates or logs.
    pub fn search_book(&self, isbn: &str) -> Result<Book> {
        Ok(self.lookup(isbn)?.read().clone())
    }

    /// Every book in ring order, anchor first
    pub fn list_all(&self) -> impl ExactSizeIterator<Item = Book> + '_ {
        self.books.iter().map(|(_, book)| book.read().clone())
    }

    /// Logged transactions, most recent first
    pub fn list_transactions(&self) -> impl ExactSizeIterator<Item = &Transaction> + '_ {
        self.history.display()
    }

    /// The most recent transaction
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.history.peek()
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Resolve an ISBN to its record through the index
    fn lookup(&self, isbn: &str) -> Result<&BookRef> {
        self.index
            .get(isbn)
            .and_then(|handle| self.books.get(handle))
            .ok_or_else(|| CatalogError::not_found(isbn))
    }

    /// Move a book into `target` state, logging the matching transaction
    fn transition(&mut self, isbn: &str, target: BookState) -> Result<Book> {
        let book = match self.lookup(isbn) {
            Ok(book) => Arc::clone(book),
            Err(e) => {
                debug!(isbn, ?target, "Transition on unknown ISBN");
                return Err(e);
            }
        };

        let snapshot = {
            let mut record = book.write();
            if record.state() == target {
                debug!(isbn, state = %target, "Book already in target state");
                return Err(CatalogError::InvalidState {
                    isbn: isbn.to_string(),
                    state: target,
                });
            }
            record.available = target == BookState::Available;
            record.clone()
        };

        let (kind, description) = match target {
            BookState::CheckedOut => (TransactionKind::CheckOut, "Book checked out"),
            BookState::Available => (TransactionKind::CheckIn, "Book checked in"),
        };
        debug!(isbn, state = %target, "Book state changed");
        self.record(kind, book, description);

        Ok(snapshot)
    }

    /// Push a transaction; a full history drops it with a warning
    fn record(&mut self, kind: TransactionKind, book: BookRef, description: impl Into<String>) {
        let seq = self.next_seq;
        if self.history.push(Transaction::new(kind, book, description, seq)) {
            self.next_seq += 1;
        } else {
            warn!(
                action = %kind,
                capacity = self.history.capacity(),
                "Transaction history full, entry dropped"
            );
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of records in the ring (including shadowed duplicates)
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn ring(&self) -> &BookRing {
        &self.books
    }

    pub fn index(&self) -> &HashIndex {
        &self.index
    }

    pub fn history(&self) -> &BoundedStack<Transaction> {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.count()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates ring linkage and index targets. Panics on violation.
    pub fn debug_validate_invariants(&self) {
        self.books.debug_validate_invariants();

        for (isbn, handle) in self.index.iter() {
            let book = match self.books.get(handle) {
                Some(book) => book,
                None => panic!("index entry {} points at a deleted node", isbn),
            };
            assert_eq!(book.read().isbn(), isbn, "index entry {} points at wrong record", isbn);
        }
        assert!(
            self.index.len() <= self.books.len(),
            "index({}) larger than ring({})",
            self.index.len(),
            self.books.len()
        );
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// A field counts as provided when it is present and non-empty
fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
