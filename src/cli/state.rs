//! States and commands of the interactive menu.
//!
//! The session is a small state machine. Each state reads whatever input it
//! needs and names the state to run next; the only exits are back to
//! [`MenuState::MainMenu`] or on to [`MenuState::Quit`].

use crate::domain::{is_alphabetic, is_numeric};
use crate::models::{Contact, SearchField};

/// Where the session is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    /// Waiting for a top-level command.
    MainMenu,
    /// Collecting and validating the five fields of a new contact.
    AddFlow,
    /// Printing the whole book once.
    ViewOnce,
    /// Waiting for a search sub-command.
    SearchMenu,
    /// Reading and running one search query.
    Search(SearchField),
    /// Reading a name or phone number to delete by.
    DeleteFlow,
    /// Several contacts matched a delete query; waiting for a row number.
    DeleteDisambiguate(Vec<Contact>),
    /// Terminal state: the book is saved and the session ends.
    Quit,
}

/// Top-level menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    Add,
    View,
    Search,
    Delete,
    Quit,
}

impl MainCommand {
    /// Parse a single-letter command, ignoring case. Anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_uppercase().as_str() {
            "A" => Some(Self::Add),
            "V" => Some(Self::View),
            "S" => Some(Self::Search),
            "D" => Some(Self::Delete),
            "Q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// State entered when this command is chosen.
    pub fn next_state(self) -> MenuState {
        match self {
            Self::Add => MenuState::AddFlow,
            Self::View => MenuState::ViewOnce,
            Self::Search => MenuState::SearchMenu,
            Self::Delete => MenuState::DeleteFlow,
            Self::Quit => MenuState::Quit,
        }
    }
}

/// Search menu sub-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCommand {
    By(SearchField),
    Back,
}

impl SearchCommand {
    /// Parse `N`/`C`/`E`/`B`/`Q`, ignoring case.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_uppercase().as_str() {
            "N" => Some(Self::By(SearchField::Name)),
            "C" => Some(Self::By(SearchField::PhoneNumber)),
            "E" => Some(Self::By(SearchField::EmailAddress)),
            "B" => Some(Self::By(SearchField::BirthDate)),
            "Q" => Some(Self::Back),
            _ => None,
        }
    }

    /// State entered when this command is chosen.
    pub fn next_state(self) -> MenuState {
        match self {
            Self::By(field) => MenuState::Search(field),
            Self::Back => MenuState::MainMenu,
        }
    }
}

/// Check the raw shape of a search query before it is run.
///
/// Names must be alphabetic, phone fragments numeric, and date fragments numeric
/// between every `/`. Email queries are not checked.
pub fn query_shape_ok(field: SearchField, query: &str) -> bool {
    match field {
        SearchField::Name => is_alphabetic(query),
        SearchField::PhoneNumber => is_numeric(query),
        SearchField::EmailAddress => true,
        SearchField::BirthDate => query.split('/').all(is_numeric),
    }
}

/// Decide how a delete query is looked up: letters search names, digits
/// search phone numbers, anything mixed is rejected.
pub fn classify_delete_query(query: &str) -> Option<SearchField> {
    if is_alphabetic(query) {
        Some(SearchField::Name)
    } else if is_numeric(query) {
        Some(SearchField::PhoneNumber)
    } else {
        None
    }
}

/// Parse a 1-based row choice, returning the 0-based index when it is in range.
pub fn parse_row_choice(input: &str, rows: usize) -> Option<usize> {
    if !is_numeric(input) {
        return None;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=rows).contains(&n) => Some(n - 1),
        _ => None,
    }
}
