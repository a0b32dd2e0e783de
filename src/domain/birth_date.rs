//! BirthDate value object.
//!
//! Birth dates are kept as text in `DD/MM/YYYY` order. Validation has two stages:
//! every `/`-separated part must be at least two characters long, and the whole
//! string must then name a real calendar day.

use super::errors::ValidationError;
use chrono::NaiveDate;
use std::fmt;

/// Returns true iff `candidate` is a zero-padded `DD/MM/YYYY` calendar date.
///
/// ```
/// use phone_book::domain::validate_birth_date;
///
/// assert!(validate_birth_date("15/06/1990"));
/// assert!(!validate_birth_date("5/6/1990"));
/// assert!(!validate_birth_date("31/02/1990"));
/// ```
pub fn validate_birth_date(candidate: &str) -> bool {
    if candidate.split('/').any(|part| part.chars().count() < 2) {
        return false;
    }
    parse_day_month_year(candidate).is_some()
}

fn parse_day_month_year(candidate: &str) -> Option<NaiveDate> {
    let mut parts = candidate.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let digits = |s: &str, width: usize| s.len() == width && s.bytes().all(|b| b.is_ascii_digit());
    // Padding counts as a character for the length check, so " 5" must be refused here.
    if !digits(day, 2) || !digits(month, 2) || !digits(year, 4) {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// A validated birth date, stored as the text the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BirthDate(String);

impl BirthDate {
    /// Create a new BirthDate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthDate` unless [`validate_birth_date`]
    /// accepts the input.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();
        if !validate_birth_date(&date) {
            return Err(ValidationError::InvalidBirthDate(date));
        }
        Ok(Self(date))
    }

    /// Get the date as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_date_valid() {
        assert!(validate_birth_date("15/06/1990"));
        assert!(validate_birth_date("29/02/2000"));
        assert!(validate_birth_date("01/01/0001"));
    }

    #[test]
    fn test_birth_date_rejects_short_parts() {
        assert!(!validate_birth_date("5/6/1990"));
        assert!(!validate_birth_date("05/6/1990"));
        assert!(!validate_birth_date("15/06/9"));
    }

    #[test]
    fn test_birth_date_rejects_impossible_dates() {
        assert!(!validate_birth_date("31/02/1990"));
        assert!(!validate_birth_date("29/02/1900"));
        assert!(!validate_birth_date("32/01/1990"));
        assert!(!validate_birth_date("15/13/1990"));
        assert!(!validate_birth_date("00/01/1990"));
        assert!(!validate_birth_date("01/01/0000"));
    }

    #[test]
    fn test_birth_date_rejects_wrong_shape() {
        assert!(!validate_birth_date(""));
        assert!(!validate_birth_date("15-06-1990"));
        assert!(!validate_birth_date("1990/06/15"));
        assert!(!validate_birth_date("15/06/1990/01"));
        assert!(!validate_birth_date("15/06/90"));
        assert!(!validate_birth_date("aa/bb/cccc"));
        assert!(!validate_birth_date(" 5/06/1990"));
        assert!(!validate_birth_date("15/ 6/1990"));
    }

    #[test]
    fn test_birth_date_value_object() {
        let date = BirthDate::new("15/06/1990").unwrap();
        assert_eq!(date.as_str(), "15/06/1990");
        assert!(BirthDate::new("31/04/2020").is_err());
    }
}
