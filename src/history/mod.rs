//! History Module
//!
//! Bounded, most-recent-first log of catalog transactions.
//!
//! ## Responsibilities
//! - Record one transaction per successful mutation
//! - Keep at most `capacity` entries
//! - Reject (not evict) pushes once full
//!
//! Transactions hold the shared record, not a copy, so a later title
//! change is visible when an older transaction is displayed.

mod stack;
mod transaction;

pub use stack::BoundedStack;
pub use transaction::{Transaction, TransactionKind};
