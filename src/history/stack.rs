//! Bounded LIFO stack
//!
//! Front of the deque is the most recent item.

use std::collections::VecDeque;

/// Fixed-capacity stack that refuses pushes when full
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack holding at most `capacity` items
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            capacity,
        }
    }

    /// Push an item as the most recent entry
    ///
    /// Returns `false` and drops `item` if the stack is full. Older
    /// entries are never evicted.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push_front(item);
        true
    }

    /// Remove and return the most recent item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The most recent item, without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items in most-recent-first order
    pub fn display(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.items.iter()
    }
}
