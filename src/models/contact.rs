//! Contact model: the five-field record persisted to the phone book file.

use crate::domain::capitalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column headers of the contact file, in on-disk order.
pub const CONTACT_HEADER: [&str; 5] = [
    "First Name",
    "Last Name",
    "Phone Number",
    "Email Address",
    "Birth Date",
];

/// A single contact.
///
/// Fields are plain text so that whatever the file holds can be loaded as-is;
/// validation happens on input, before [`Contact::build`] is called. Serde names
/// match [`CONTACT_HEADER`], and missing columns load as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Contact {
    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Last Name")]
    pub last_name: String,

    /// Ten digits, stored as text
    #[serde(rename = "Phone Number")]
    pub phone: String,

    #[serde(rename = "Email Address")]
    pub email: String,

    /// `DD/MM/YYYY`
    #[serde(rename = "Birth Date")]
    pub birth_date: String,
}

impl Contact {
    /// Build a contact from already-validated input.
    ///
    /// Names are capitalized (`jANE` becomes `Jane`), phone and email are trimmed,
    /// and the birth date is kept verbatim. No validation is performed here.
    pub fn build(
        first_name: &str,
        last_name: &str,
        phone: &str,
        email: &str,
        birth_date: &str,
    ) -> Self {
        Self {
            first_name: capitalize(first_name),
            last_name: capitalize(last_name),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
            birth_date: birth_date.to_string(),
        }
    }

    /// Get the text of a single field.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::PhoneNumber => &self.phone,
            ContactField::EmailAddress => &self.email,
            ContactField::BirthDate => &self.birth_date,
        }
    }

    /// All fields in canonical order.
    pub fn fields(&self) -> [&str; 5] {
        ContactField::ALL.map(|field| self.field(field))
    }

    /// True when every field holds some text.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|value| !value.is_empty())
    }
}

/// One column of a contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
    EmailAddress,
    BirthDate,
}

impl ContactField {
    /// Every field, in on-disk order.
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::PhoneNumber,
        ContactField::EmailAddress,
        ContactField::BirthDate,
    ];

    /// Header text for this field.
    pub fn header(self) -> &'static str {
        match self {
            ContactField::FirstName => CONTACT_HEADER[0],
            ContactField::LastName => CONTACT_HEADER[1],
            ContactField::PhoneNumber => CONTACT_HEADER[2],
            ContactField::EmailAddress => CONTACT_HEADER[3],
            ContactField::BirthDate => CONTACT_HEADER[4],
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// What a search query is matched against.
///
/// `Name` covers both first and last name; the others map to a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    PhoneNumber,
    EmailAddress,
    BirthDate,
}

impl SearchField {
    /// The single column searched, or `None` for the two-column name search.
    pub fn column(self) -> Option<ContactField> {
        match self {
            SearchField::Name => None,
            SearchField::PhoneNumber => Some(ContactField::PhoneNumber),
            SearchField::EmailAddress => Some(ContactField::EmailAddress),
            SearchField::BirthDate => Some(ContactField::BirthDate),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column() {
            Some(column) => f.write_str(column.header()),
            None => f.write_str("Name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_normalizes_fields() {
        let contact = Contact::build("jANE", "doe", " 5551234567 ", "  jane@example.com", "15/06/1990");
        assert_eq!(contact.first_name, "Jane");
        assert_eq!(contact.last_name, "Doe");
        assert_eq!(contact.phone, "5551234567");
        assert_eq!(contact.email, "jane@example.com");
        assert_eq!(contact.birth_date, "15/06/1990");
        assert!(contact.is_complete());
    }

    #[test]
    fn test_build_does_not_validate() {
        let contact = Contact::build("", "", "abc", "nope", "someday");
        assert_eq!(contact.phone, "abc");
        assert!(!contact.is_complete());
    }

    #[test]
    fn test_fields_follow_header_order() {
        let contact = Contact::build("jane", "doe", "5551234567", "jane@example.com", "15/06/1990");
        assert_eq!(
            contact.fields(),
            ["Jane", "Doe", "5551234567", "jane@example.com", "15/06/1990"]
        );
        let headers: Vec<&str> = ContactField::ALL.iter().map(|f| f.header()).collect();
        assert_eq!(headers, CONTACT_HEADER);
    }

    #[test]
    fn test_search_field_display() {
        assert_eq!(SearchField::Name.to_string(), "Name");
        assert_eq!(SearchField::PhoneNumber.to_string(), "Phone Number");
        assert_eq!(SearchField::BirthDate.column(), Some(ContactField::BirthDate));
    }
}
