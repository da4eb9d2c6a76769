//! Text-menu choices for the interactive CLI

/// One entry of the numbered main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    CheckOut,
    CheckIn,
    Update,
    Remove,
    DisplayAll,
    Search,
    History,
    Exit,
}

impl MenuChoice {
    /// All choices, in menu order
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Add,
        MenuChoice::CheckOut,
        MenuChoice::CheckIn,
        MenuChoice::Update,
        MenuChoice::Remove,
        MenuChoice::DisplayAll,
        MenuChoice::Search,
        MenuChoice::History,
        MenuChoice::Exit,
    ];

    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a new book",
            MenuChoice::CheckOut => "Check out a book",
            MenuChoice::CheckIn => "Check in a book",
            MenuChoice::Update => "Update book information",
            MenuChoice::Remove => "Remove a book",
            MenuChoice::DisplayAll => "Display all books",
            MenuChoice::Search => "Search for a book",
            MenuChoice::History => "View transaction history",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Blank answers to optional prompts mean "skip"
pub fn optional_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
