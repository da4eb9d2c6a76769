//! HashIndex implementation
//!
//! Separate chaining over a fixed number of buckets.

use crate::ring::NodeHandle;

/// Fixed-size hash index from ISBN to ring handle
#[derive(Debug)]
pub struct HashIndex {
    /// Each bucket holds the (key, handle) pairs that hash to it
    buckets: Vec<Vec<(String, NodeHandle)>>,

    /// Total number of entries across all buckets
    len: usize,
}

impl HashIndex {
    /// Create an index with `bucket_count` buckets (clamped to at least 1)
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Insert or overwrite the mapping for `isbn`
    ///
    /// Returns the handle previously stored under `isbn`, if any.
    pub fn put(&mut self, isbn: &str, handle: NodeHandle) -> Option<NodeHandle> {
        let bucket = self.bucket_of(isbn);
        let entries = &mut self.buckets[bucket];

        if let Some(entry) = entries.iter_mut().find(|(key, _)| key == isbn) {
            return Some(std::mem::replace(&mut entry.1, handle));
        }

        entries.push((isbn.to_string(), handle));
        self.len += 1;
        None
    }

    /// Look up the handle stored for `isbn`
    pub fn get(&self, isbn: &str) -> Option<NodeHandle> {
        self.buckets[self.bucket_of(isbn)]
            .iter()
            .find(|(key, _)| key == isbn)
            .map(|(_, handle)| *handle)
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.get(isbn).is_some()
    }

    /// Remove the mapping for `isbn`. Returns `true` if one existed.
    pub fn remove(&mut self, isbn: &str) -> bool {
        let bucket = self.bucket_of(isbn);
        let entries = &mut self.buckets[bucket];

        match entries.iter().position(|(key, _)| key == isbn) {
            Some(pos) => {
                entries.swap_remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Average entries per bucket
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Length of the fullest bucket (worst-case probe length)
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// All (isbn, handle) entries, in bucket order
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeHandle)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|(key, handle)| (key.as_str(), *handle))
    }

    fn bucket_of(&self, isbn: &str) -> usize {
        crc32fast::hash(isbn.as_bytes()) as usize % self.buckets.len()
    }
}
