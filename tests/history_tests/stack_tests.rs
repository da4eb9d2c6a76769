//! Tests for the transaction history
//!
//! These tests verify:
//! - Most-recent-first push / pop / peek ordering
//! - Rejection (not eviction) once full
//! - Transaction rendering through shared records

use bookring::history::{BoundedStack, Transaction, TransactionKind};
use bookring::record::Book;

// =============================================================================
// Stack Tests
// =============================================================================

#[test]
fn test_new_stack_is_empty() {
    let stack: BoundedStack<u32> = BoundedStack::new(3);
    assert!(stack.is_empty());
    assert!(!stack.is_full());
    assert_eq!(stack.count(), 0);
    assert_eq!(stack.peek(), None);
}

#[test]
fn test_push_pop_is_lifo() {
    let mut stack = BoundedStack::new(10);
    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.peek(), Some(&3));
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_display_is_most_recent_first() {
    let mut stack = BoundedStack::new(10);
    for i in 1..=4 {
        stack.push(i);
    }

    let items: Vec<_> = stack.display().copied().collect();
    assert_eq!(items, vec![4, 3, 2, 1]);
    // Display does not consume
    assert_eq!(stack.count(), 4);
}

#[test]
fn test_push_beyond_capacity_is_rejected() {
    let capacity = 5;
    let mut stack = BoundedStack::new(capacity);

    for i in 0..capacity {
        assert!(stack.push(i));
    }
    assert!(stack.is_full());

    assert!(!stack.push(99));
    assert_eq!(stack.count(), capacity);
    assert_eq!(stack.peek(), Some(&(capacity - 1)));

    // Oldest entries are still there, most recent first
    let drained: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
    assert_eq!(drained, vec![4, 3, 2, 1, 0]);
}

#[test]
fn test_zero_capacity_rejects_everything() {
    let mut stack = BoundedStack::new(0);
    assert!(stack.is_full());
    assert!(!stack.push("x"));
    assert!(stack.is_empty());
}

#[test]
fn test_pop_makes_room_again() {
    let mut stack = BoundedStack::new(1);
    assert!(stack.push('a'));
    assert!(!stack.push('b'));
    stack.pop();
    assert!(stack.push('c'));
    assert_eq!(stack.peek(), Some(&'c'));
}

// =============================================================================
// Transaction Tests
// =============================================================================

#[test]
fn test_transaction_display() {
    let book = Book::new("111", "Dune", "Herbert", "General").into_ref();
    let tx = Transaction::new(TransactionKind::CheckOut, book, "Book checked out", 7);

    assert_eq!(tx.to_string(), "#7: check-out - Dune (Book checked out)");
    assert_eq!(tx.kind(), TransactionKind::CheckOut);
    assert_eq!(tx.seq(), 7);
}

#[test]
fn test_transaction_sees_later_record_changes() {
    let book = Book::new("111", "Dune", "Herbert", "General").into_ref();
    let tx = Transaction::new(TransactionKind::Insert, book.clone(), "Added new book", 1);

    book.write().title = "Dune Messiah".to_string();

    assert_eq!(tx.book().read().title, "Dune Messiah");
    assert!(tx.to_string().contains("Dune Messiah"));
}

#[test]
fn test_transaction_kind_names() {
    let names: Vec<_> = [
        TransactionKind::Insert,
        TransactionKind::CheckOut,
        TransactionKind::CheckIn,
        TransactionKind::Update,
        TransactionKind::Remove,
    ]
    .iter()
    .map(|k| k.as_str())
    .collect();

    assert_eq!(names, vec!["insert", "check-out", "check-in", "update", "remove"]);
}
