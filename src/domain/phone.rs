//! PhoneNumber value object.

use super::errors::ValidationError;
use std::fmt;

/// Number of digits a stored phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Returns true when `s` is non-empty and every character is numeric.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_numeric)
}

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// Only bare ten-digit numbers are accepted; no country codes or separators.
///
/// # Example
///
/// ```
/// use phone_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// assert!(PhoneNumber::new("555-123-4567").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Every character must be numeric
    /// - Exactly ten characters long
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        is_numeric(phone) && phone.chars().count() == PHONE_DIGITS
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("555123456").is_err());
        assert!(PhoneNumber::new("55512345678").is_err());
        assert!(PhoneNumber::new("555 123 45").is_err());
        assert!(PhoneNumber::new("+155512345").is_err());
        assert!(PhoneNumber::new(" 5551234567").is_err());
        assert!(PhoneNumber::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(format!("{}", phone), "5551234567");
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("555"));
        assert!(!is_numeric("55a"));
        assert!(!is_numeric(""));
    }
}
