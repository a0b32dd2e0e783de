//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected input so the caller can echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or contains non-alphabetic characters.
    InvalidName(String),

    /// The provided phone number is not exactly ten numeric digits.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided birth date is malformed or not a real calendar date.
    InvalidBirthDate(String),

    /// A search or delete query does not have the shape its prompt expects.
    InvalidQuery(String),

    /// A menu letter or row number that is not one of the offered choices.
    InvalidChoice(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Invalid name: {}", name),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidBirthDate(date) => write!(f, "Invalid birth date: {}", date),
            Self::InvalidQuery(query) => write!(f, "Invalid query: {}", query),
            Self::InvalidChoice(choice) => write!(f, "Invalid choice: {}", choice),
        }
    }
}

impl std::error::Error for ValidationError {}
