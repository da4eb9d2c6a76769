//! Transaction definitions

use std::fmt;

use crate::record::BookRef;

/// Kind of catalog mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Insert,
    CheckOut,
    CheckIn,
    Update,
    Remove,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Insert => "insert",
            TransactionKind::CheckOut => "check-out",
            TransactionKind::CheckIn => "check-in",
            TransactionKind::Update => "update",
            TransactionKind::Remove => "remove",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged mutation
///
/// Immutable once created.
#[derive(Debug, Clone)]
pub struct Transaction {
    kind: TransactionKind,

    /// The affected record, shared with the ring
    book: BookRef,

    description: String,

    /// Logical timestamp: per-catalog sequence number, starting at 1
    seq: u64,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        book: BookRef,
        description: impl Into<String>,
        seq: u64,
    ) -> Self {
        Self {
            kind,
            book,
            description: description.into(),
            seq,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn book(&self) -> &BookRef {
        &self.book
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}: {} - {} ({})",
            self.seq,
            self.kind,
            self.book.read().title,
            self.description
        )
    }
}
