//! Configuration for bookring
//!
//! Centralized configuration with sensible defaults.

use crate::error::{CatalogError, Result};

/// Main configuration for a catalog instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Index Configuration
    // -------------------------------------------------------------------------
    /// Number of hash buckets in the ISBN index.
    /// Fixed for the lifetime of the catalog (no rehashing).
    pub bucket_count: usize,

    // -------------------------------------------------------------------------
    // History Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of transactions kept. Pushes beyond this are rejected.
    pub history_capacity: usize,

    // -------------------------------------------------------------------------
    // Record Configuration
    // -------------------------------------------------------------------------
    /// Genre assigned when a book is added without one
    pub default_genre: String,

    /// What `add_book` does when the ISBN is already indexed
    pub duplicate_policy: DuplicatePolicy,
}

/// Handling of an `add_book` whose ISBN is already in the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Insert anyway. The index is repointed at the newest record and the
    /// older ring entry can no longer be looked up.
    #[default]
    Shadow,

    /// Refuse the insert with `CatalogError::DuplicateIsbn`
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket_count: 100,
            history_capacity: 1000,
            default_genre: "General".to_string(),
            duplicate_policy: DuplicatePolicy::Shadow,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values the catalog cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(CatalogError::Config(
                "bucket_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of index buckets
    pub fn bucket_count(mut self, count: usize) -> Self {
        self.config.bucket_count = count;
        self
    }

    /// Set the transaction history capacity
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Set the genre used when none is supplied
    pub fn default_genre(mut self, genre: impl Into<String>) -> Self {
        self.config.default_genre = genre.into();
        self
    }

    /// Set the duplicate ISBN policy
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
