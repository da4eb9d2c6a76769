//! Ring Iterators
//!
//! Finite traversal over the ring. Each new iterator restarts at the anchor.

use crate::record::BookRef;

use super::{BookRing, NodeHandle};

/// Iterator over ring records, anchor first
pub struct RingIter<'a> {
    ring: &'a BookRing,
    /// Next slot to yield
    current: Option<usize>,
    /// Nodes left before we are back at the anchor
    remaining: usize,
}

impl<'a> RingIter<'a> {
    pub(super) fn new(ring: &'a BookRing) -> Self {
        Self {
            ring,
            current: ring.anchor,
            remaining: ring.len(),
        }
    }
}

impl<'a> Iterator for RingIter<'a> {
    type Item = (NodeHandle, &'a BookRef);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.current?;
        let node = self.ring.node(slot);

        self.remaining -= 1;
        self.current = Some(node.next);

        Some((self.ring.handle_at(slot), &node.book))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RingIter<'_> {}

/// Iterator over ring records, tail first
pub struct RingRevIter<'a> {
    ring: &'a BookRing,
    current: Option<usize>,
    remaining: usize,
}

impl<'a> RingRevIter<'a> {
    pub(super) fn new(ring: &'a BookRing) -> Self {
        let tail = ring.anchor.map(|anchor| ring.node(anchor).prev);
        Self {
            ring,
            current: tail,
            remaining: ring.len(),
        }
    }
}

impl<'a> Iterator for RingRevIter<'a> {
    type Item = (NodeHandle, &'a BookRef);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.current?;
        let node = self.ring.node(slot);

        self.remaining -= 1;
        self.current = Some(node.prev);

        Some((self.ring.handle_at(slot), &node.book))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RingRevIter<'_> {}
