//! Ring Module
//!
//! Circular doubly-linked ring holding book records in insertion order.
//!
//! ## Responsibilities
//! - Sole owner of every record in the catalog
//! - O(1) append at the logical tail (just before the anchor)
//! - Delete by ISBN with a linear scan from the anchor
//! - Finite traversal that always restarts at the anchor
//!
//! ## Layout
//! Nodes live in a slot arena; links are slot indices, not pointers.
//! ```text
//!   anchor
//!     │
//!     ▼
//!   ┌───┐ next ┌───┐ next ┌───┐
//!   │ A │ ───► │ B │ ───► │ C │ ──┐
//!   └───┘ ◄─── └───┘ ◄─── └───┘   │
//!     ▲   prev        prev        │
//!     └───────────────────────────┘
//! ```
//! A freed slot goes on the free list and bumps its generation, so a
//! [`NodeHandle`] taken before the delete no longer resolves.

mod iterator;
mod list;

pub use iterator::{RingIter, RingRevIter};
pub use list::BookRing;

/// Stable, non-owning reference to a ring node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) slot: usize,
    pub(crate) generation: u64,
}
