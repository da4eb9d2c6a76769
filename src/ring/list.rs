//! Ring implementation
//!
//! Slot-arena circular doubly-linked list.

use crate::record::{Book, BookRef};

use super::{NodeHandle, RingIter, RingRevIter};

/// A node in the ring
#[derive(Debug)]
pub(super) struct Node {
    pub(super) book: BookRef,
    pub(super) next: usize,
    pub(super) prev: usize,
}

/// An arena slot. `node` is `None` while the slot sits on the free list.
#[derive(Debug)]
pub(super) struct Slot {
    pub(super) generation: u64,
    pub(super) node: Option<Node>,
}

/// Circular doubly-linked ring of book records
#[derive(Debug, Default)]
pub struct BookRing {
    /// Node arena, indexed by slot
    pub(super) slots: Vec<Slot>,

    /// Stack of free slot indices
    free: Vec<usize>,

    /// Entry node of the ring; `None` when empty
    pub(super) anchor: Option<usize>,

    /// Number of live nodes
    len: usize,
}

impl BookRing {
    /// Create an empty ring
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the anchor node, if any
    pub fn anchor(&self) -> Option<NodeHandle> {
        self.anchor.map(|slot| self.handle_at(slot))
    }

    /// Insert a record at the tail of the ring and return its handle
    ///
    /// The new node is linked just before the anchor. On an empty ring it
    /// becomes the anchor and links to itself in both directions.
    pub fn insert(&mut self, book: Book) -> NodeHandle {
        self.insert_ref(book.into_ref())
    }

    /// Insert an already shared record at the tail of the ring
    pub fn insert_ref(&mut self, book: BookRef) -> NodeHandle {
        let slot = self.alloc_slot();

        let (next, prev) = match self.anchor {
            None => {
                self.anchor = Some(slot);
                (slot, slot)
            }
            Some(anchor) => {
                let tail = self.node(anchor).prev;
                self.node_mut(tail).next = slot;
                self.node_mut(anchor).prev = slot;
                (anchor, tail)
            }
        };

        self.slots[slot].node = Some(Node { book, next, prev });
        self.len += 1;
        self.handle_at(slot)
    }

    /// Delete the first record (from the anchor) whose ISBN matches
    ///
    /// Returns the removed record, or `None` if no node matches.
    pub fn delete_by_isbn(&mut self, isbn: &str) -> Option<BookRef> {
        let start = self.anchor?;
        let mut current = start;

        loop {
            let (matches, next) = {
                let node = self.node(current);
                (node.book.read().isbn() == isbn, node.next)
            };
            if matches {
                return Some(self.unlink(current));
            }
            current = next;
            if current == start {
                return None;
            }
        }
    }

    /// Resolve a handle to its record
    ///
    /// Returns `None` for handles whose node has since been deleted.
    pub fn get(&self, handle: NodeHandle) -> Option<&BookRef> {
        let slot = self.slots.get(handle.slot)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.node.as_ref().map(|node| &node.book)
    }

    /// Handle of the node after `handle`
    pub fn next_of(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.get(handle)?;
        Some(self.handle_at(self.node(handle.slot).next))
    }

    /// Handle of the node before `handle`
    pub fn prev_of(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.get(handle)?;
        Some(self.handle_at(self.node(handle.slot).prev))
    }

    /// Traverse records in ring order, starting at the anchor
    pub fn iter(&self) -> RingIter<'_> {
        RingIter::new(self)
    }

    /// Traverse records in reverse ring order, starting at the tail
    pub fn iter_rev(&self) -> RingRevIter<'_> {
        RingRevIter::new(self)
    }

    /// Validates ring linkage. Panics if any invariant is violated.
    pub fn debug_validate_invariants(&self) {
        let live = self.slots.iter().filter(|s| s.node.is_some()).count();
        assert_eq!(live, self.len, "live slots({}) != len({})", live, self.len);
        assert_eq!(
            self.free.len(),
            self.slots.len() - self.len,
            "free list size mismatch"
        );

        let Some(start) = self.anchor else {
            assert_eq!(self.len, 0, "ring has no anchor but len is {}", self.len);
            return;
        };

        let mut count = 0;
        let mut current = start;
        loop {
            let node = self.node(current);
            assert_eq!(self.node(node.prev).next, current, "ring broken at slot {}", current);
            assert_eq!(self.node(node.next).prev, current, "ring broken at slot {}", current);
            count += 1;
            assert!(count <= self.len, "ring cycle does not return to anchor");
            current = node.next;
            if current == start {
                break;
            }
        }
        assert_eq!(count, self.len, "ring walk count mismatch");
    }

    // =========================================================================
    // Slot management
    // =========================================================================

    fn alloc_slot(&mut self) -> usize {
        match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: None,
                });
                self.slots.len() - 1
            }
        }
    }

    /// Splice `slot` out of the ring and return its slot to the free list
    fn unlink(&mut self, slot: usize) -> BookRef {
        let (next, prev) = {
            let node = self.node(slot);
            (node.next, node.prev)
        };

        if next == slot {
            // Only node
            self.anchor = None;
        } else {
            if self.anchor == Some(slot) {
                self.anchor = Some(next);
            }
            self.node_mut(prev).next = next;
            self.node_mut(next).prev = prev;
        }

        let entry = &mut self.slots[slot];
        entry.generation += 1;
        let node = entry.node.take();
        self.free.push(slot);
        self.len -= 1;

        match node {
            Some(node) => node.book,
            None => unreachable!("unlinked slot {} held no node", slot),
        }
    }

    pub(super) fn handle_at(&self, slot: usize) -> NodeHandle {
        NodeHandle {
            slot,
            generation: self.slots[slot].generation,
        }
    }

    /// Live node at `slot`. Linked slots always hold a node.
    pub(super) fn node(&self, slot: usize) -> &Node {
        match self.slots[slot].node.as_ref() {
            Some(node) => node,
            None => unreachable!("ring link points at free slot {}", slot),
        }
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node {
        match self.slots[slot].node.as_mut() {
            Some(node) => node,
            None => unreachable!("ring link points at free slot {}", slot),
        }
    }
}
