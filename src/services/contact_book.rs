//! In-memory contact collection.
//!
//! The book is the single mutable copy of the contact list for a session. It keeps
//! insertion order, and every query returns matches in that order.

use crate::models::{Contact, SearchField};
use tracing::debug;

/// Ordered, owned list of contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// True when the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Consume the book, returning its contacts.
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }

    /// True when no stored contact has both this phone and this email.
    ///
    /// Uniqueness is on the pair: sharing only the phone, or only the email, with
    /// an existing contact is allowed. Comparison is exact and case-sensitive.
    pub fn is_unique(&self, phone: &str, email: &str) -> bool {
        !self
            .contacts
            .iter()
            .any(|c| c.phone == phone && c.email == email)
    }

    /// Append a contact. Callers check [`ContactBook::is_unique`] first.
    pub fn add(&mut self, contact: Contact) {
        debug!(phone = %contact.phone, "Adding contact");
        self.contacts.push(contact);
    }

    /// Contacts matching `query` on `field`, in book order.
    pub fn search(&self, field: SearchField, query: &str) -> Vec<Contact> {
        search(&self.contacts, field, query)
    }

    /// Remove the first contact equal to `contact` in every field.
    ///
    /// Returns whether anything was removed; a missing contact is a no-op.
    pub fn delete(&mut self, contact: &Contact) -> bool {
        match self.contacts.iter().position(|c| c == contact) {
            Some(index) => {
                self.contacts.remove(index);
                debug!(index, "Deleted contact");
                true
            }
            None => false,
        }
    }
}

impl From<Vec<Contact>> for ContactBook {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

/// Substring search over a slice of contacts.
///
/// For [`SearchField::Name`] a contact matches when the lowercased query occurs
/// in its lowercased first name, or when the query as typed occurs in its
/// lowercased last name. A query with capitals therefore never matches on the
/// last name. Every other field is a plain, case-sensitive substring test on
/// the stored text, so partial phone numbers and dates match anywhere.
pub fn search(contacts: &[Contact], field: SearchField, query: &str) -> Vec<Contact> {
    let matches: Vec<Contact> = match field.column() {
        None => {
            let lowered = query.to_lowercase();
            contacts
                .iter()
                .filter(|c| {
                    c.first_name.to_lowercase().contains(&lowered)
                        || c.last_name.to_lowercase().contains(query)
                })
                .cloned()
                .collect()
        }
        Some(column) => contacts
            .iter()
            .filter(|c| c.field(column).contains(query))
            .cloned()
            .collect(),
    };

    debug!(%field, query, hits = matches.len(), "Search completed");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> ContactBook {
        ContactBook::from(vec![
            Contact::build("jane", "doe", "5551234567", "jane.doe@example.com", "15/06/1990"),
            Contact::build("john", "doe", "4445556666", "john@example.com", "01/02/1985"),
            Contact::build("alice", "smith", "1235550000", "alice@sample.org", "15/12/1990"),
        ])
    }

    #[test]
    fn test_is_unique_requires_both_fields_to_match() {
        let book = sample_book();
        assert!(!book.is_unique("5551234567", "jane.doe@example.com"));
        assert!(book.is_unique("5551234567", "other@example.com"));
        assert!(book.is_unique("0000000000", "jane.doe@example.com"));
        assert!(book.is_unique("5551234567", "JANE.DOE@example.com"));
        assert!(ContactBook::new().is_unique("5551234567", "jane.doe@example.com"));
    }

    #[test]
    fn test_search_phone_matches_anywhere() {
        let book = sample_book();
        let hits = book.search(SearchField::PhoneNumber, "555");
        assert_eq!(hits.len(), 3);

        let hits = book.search(SearchField::PhoneNumber, "0000");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Alice");
    }

    #[test]
    fn test_search_birth_date_fragment() {
        let book = sample_book();
        let names: Vec<String> = book
            .search(SearchField::BirthDate, "1990")
            .into_iter()
            .map(|c| c.first_name)
            .collect();
        assert_eq!(names, vec!["Jane", "Alice"]);
        assert_eq!(book.search(SearchField::BirthDate, "15/").len(), 2);
    }

    #[test]
    fn test_search_email_is_case_sensitive() {
        let book = sample_book();
        assert_eq!(book.search(SearchField::EmailAddress, "example.com").len(), 2);
        assert!(book.search(SearchField::EmailAddress, "EXAMPLE").is_empty());
    }

    #[test]
    fn test_search_name_first_name_ignores_case() {
        let book = sample_book();
        let hits = book.search(SearchField::Name, "JA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Jane");
    }

    #[test]
    fn test_search_name_last_name_needs_lowercase_query() {
        let book = sample_book();
        let hits = book.search(SearchField::Name, "doe");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].first_name, "Jane");
        assert_eq!(hits[1].first_name, "John");

        assert!(book.search(SearchField::Name, "Doe").is_empty());
        assert!(book.search(SearchField::Name, "Smith").is_empty());
    }

    #[test]
    fn test_search_no_hits() {
        assert!(sample_book().search(SearchField::Name, "zed").is_empty());
    }

    #[test]
    fn test_delete_removes_first_exact_match_only() {
        let jane = Contact::build("jane", "doe", "5551234567", "jane.doe@example.com", "15/06/1990");
        let mut book = ContactBook::from(vec![jane.clone(), jane.clone()]);

        assert!(book.delete(&jane));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_delete_missing_contact_is_noop() {
        let mut book = sample_book();
        let before = book.clone();
        let mut stranger = book.contacts()[0].clone();
        stranger.birth_date = "16/06/1990".to_string();

        assert!(!book.delete(&stranger));
        assert_eq!(book, before);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut book = ContactBook::new();
        book.add(Contact::build("b", "b", "1111111111", "b@x.io", "01/01/2000"));
        book.add(Contact::build("a", "a", "2222222222", "a@x.io", "01/01/2000"));
        let firsts: Vec<&str> = book.contacts().iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(firsts, vec!["B", "A"]);
    }
}
