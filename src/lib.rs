//! # bookring
//!
//! An in-memory book catalog with:
//! - A circular doubly-linked ring holding records in insertion order
//! - A hash index for O(1) average lookup by ISBN
//! - A bounded, most-recent-first transaction history
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        CLI Shell                             │
//! │                   (text menu, stdin)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Response
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Catalog                                │
//! │        (keeps ring and index consistent, logs history)       │
//! └──────┬──────────────────────┬───────────────────────┬───────┘
//!        │                      │                       │
//!        ▼                      ▼                       ▼
//!  ┌───────────┐  handles ┌───────────┐          ┌───────────┐
//!  │   Index   │ ───────► │   Ring    │ ◄─────── │  History  │
//!  │ (buckets) │          │ (owner)   │  shared  │  (stack)  │
//!  └───────────┘          └───────────┘  records └───────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod ring;
pub mod index;
pub mod history;
pub mod command;
pub mod catalog;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CatalogError, Result};
pub use config::{Config, DuplicatePolicy};
pub use record::{Book, BookRef, BookState};
pub use catalog::{BookUpdate, Catalog, SharedCatalog};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of bookring
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
