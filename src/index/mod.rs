//! Index Module
//!
//! Hash-bucketed map from ISBN to a ring [`NodeHandle`](crate::ring::NodeHandle).
//!
//! ## Hashing Policy
//! - bucket = crc32(isbn) % bucket_count
//! - Fixed bucket count, no rehashing. `load_factor()` reports when a
//!   larger bucket count is worth configuring.
//! - Collisions resolved by a linear scan over the bucket's entries
//!
//! The index never owns records; the ring does. Entries must be removed
//! in the same operation that removes the node from the ring.

mod table;

pub use table::HashIndex;
