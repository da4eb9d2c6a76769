//! Tests for command execution
//!
//! These tests verify:
//! - Each command maps to the right catalog operation
//! - Responses carry the expected status and messages

use bookring::command::{Command, Status};
use bookring::{BookUpdate, Catalog};

// =============================================================================
// Helper Functions
// =============================================================================

fn add(isbn: &str, title: &str) -> Command {
    Command::Add {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: "Herbert".to_string(),
        genre: None,
    }
}

fn isbn_cmd(make: fn(String) -> Command, isbn: &str) -> Command {
    make(isbn.to_string())
}

// =============================================================================
// Command Tests
// =============================================================================

#[test]
fn test_add_response() {
    let mut catalog = Catalog::new();

    let response = catalog.execute(add("111", "Dune"));
    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.to_string(), "Book 'Dune' added successfully.");
}

#[test]
fn test_check_out_responses() {
    let mut catalog = Catalog::new();
    catalog.execute(add("111", "Dune"));

    let checkout = |isbn| Command::CheckOut { isbn };
    let ok = catalog.execute(isbn_cmd(checkout, "111"));
    assert!(ok.is_ok());
    assert_eq!(ok.to_string(), "Book 'Dune' checked out successfully.");

    let again = catalog.execute(isbn_cmd(checkout, "111"));
    assert_eq!(again.status, Status::InvalidState);
    assert_eq!(again.to_string(), "Book not available or not found.");

    let missing = catalog.execute(isbn_cmd(checkout, "999"));
    assert_eq!(missing.status, Status::NotFound);
}

#[test]
fn test_check_in_responses() {
    let mut catalog = Catalog::new();
    catalog.execute(add("111", "Dune"));

    let checkin = |isbn| Command::CheckIn { isbn };
    let already = catalog.execute(isbn_cmd(checkin, "111"));
    assert_eq!(already.status, Status::InvalidState);
    assert_eq!(already.to_string(), "Book not found or already checked in.");

    catalog.execute(Command::CheckOut {
        isbn: "111".to_string(),
    });
    let ok = catalog.execute(isbn_cmd(checkin, "111"));
    assert_eq!(ok.to_string(), "Book 'Dune' checked in successfully.");
}

#[test]
fn test_update_and_search_responses() {
    let mut catalog = Catalog::new();
    catalog.execute(add("111", "Dune"));

    let response = catalog.execute(Command::Update {
        isbn: "111".to_string(),
        update: BookUpdate::new().genre("Sci-Fi"),
    });
    assert_eq!(response.to_string(), "Book with ISBN 111 updated successfully.");

    let found = catalog.execute(Command::Search {
        isbn: "111".to_string(),
    });
    assert_eq!(
        found.lines,
        vec![
            "Book Found:".to_string(),
            "'Dune' by Herbert (ISBN: 111) - Available".to_string(),
        ]
    );

    let missing = catalog.execute(Command::Search {
        isbn: "999".to_string(),
    });
    assert_eq!(missing.status, Status::NotFound);
    assert_eq!(missing.to_string(), "Book not found.");
}

#[test]
fn test_remove_response() {
    let mut catalog = Catalog::new();
    catalog.execute(add("111", "Dune"));

    let removed = catalog.execute(Command::Remove {
        isbn: "111".to_string(),
    });
    assert_eq!(removed.to_string(), "Book 'Dune' removed successfully.");

    let again = catalog.execute(Command::Remove {
        isbn: "111".to_string(),
    });
    assert_eq!(again.status, Status::NotFound);
}

#[test]
fn test_list_and_history_on_empty_catalog() {
    let mut catalog = Catalog::new();

    let list = catalog.execute(Command::List);
    assert_eq!(
        list.lines,
        vec!["Library Book Collection:", "No books in the library."]
    );

    let history = catalog.execute(Command::History);
    assert_eq!(
        history.lines,
        vec!["Transaction History:", "No transactions recorded."]
    );
}

#[test]
fn test_list_and_history_output() {
    let mut catalog = Catalog::new();
    catalog.execute(add("1", "Dune"));
    catalog.execute(add("2", "Emma"));
    catalog.execute(Command::CheckOut {
        isbn: "2".to_string(),
    });

    let list = catalog.execute(Command::List);
    assert_eq!(
        list.lines,
        vec![
            "Library Book Collection:",
            "'Dune' by Herbert (ISBN: 1) - Available",
            "'Emma' by Herbert (ISBN: 2) - Checked Out",
        ]
    );

    let history = catalog.execute(Command::History);
    assert_eq!(
        history.lines,
        vec![
            "Transaction History:",
            "#3: check-out - Emma (Book checked out)",
            "#2: insert - Emma (Added new book)",
            "#1: insert - Dune (Added new book)",
        ]
    );
}

#[test]
fn test_is_mutation() {
    assert!(add("1", "A").is_mutation());
    assert!(Command::Remove {
        isbn: "1".to_string()
    }
    .is_mutation());
    assert!(!Command::List.is_mutation());
    assert!(!Command::History.is_mutation());
}
