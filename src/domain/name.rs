//! PersonName value object.

use super::errors::ValidationError;
use std::fmt;

/// Returns true when `s` is non-empty and every character is alphabetic.
///
/// Used both for name fields and for classifying free-form search input.
pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// Uppercase the first character and lowercase the rest.
///
/// ```
/// use phone_book::domain::capitalize;
///
/// assert_eq!(capitalize("mcDONALD"), "Mcdonald");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// A first or last name as typed by the user.
///
/// The wrapped text is stored exactly as entered; capitalization is applied when
/// the contact is built.
///
/// # Example
///
/// ```
/// use phone_book::domain::PersonName;
///
/// let name = PersonName::new("jane").unwrap();
/// assert_eq!(name.as_str(), "jane");
/// assert!(PersonName::new("Mary Ann").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is empty or contains
    /// anything other than letters (spaces, digits and hyphens are rejected).
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !is_alphabetic(&name) {
            return Err(ValidationError::InvalidName(name));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = PersonName::new("Zoë").unwrap();
        assert_eq!(name.as_str(), "Zoë");
    }

    #[test]
    fn test_name_rejects_non_alphabetic() {
        assert!(PersonName::new("").is_err());
        assert!(PersonName::new("O'Brien").is_err());
        assert!(PersonName::new("Anne-Marie").is_err());
        assert!(PersonName::new("R2D2").is_err());
        assert!(PersonName::new(" Jane").is_err());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("jane"), "Jane");
        assert_eq!(capitalize("DOE"), "Doe");
        assert_eq!(capitalize("éLODIE"), "Élodie");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(is_alphabetic("abc"));
        assert!(!is_alphabetic("abc1"));
        assert!(!is_alphabetic(""));
    }
}
