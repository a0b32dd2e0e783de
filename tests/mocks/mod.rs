//! In-memory test doubles and shared fixtures.

mod mock_contact_repository;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;

use phone_book::Contact;

/// Jane Doe, the contact most tests start from.
#[allow(dead_code)]
pub fn jane() -> Contact {
    Contact::build("jane", "doe", "5551234567", "jane.doe@example.com", "15/06/1990")
}

/// John Doe, who shares Jane's last name.
#[allow(dead_code)]
pub fn john() -> Contact {
    Contact::build("john", "doe", "4445556666", "john.doe@example.com", "01/02/1985")
}

/// Alice Smith, unrelated to the Does.
#[allow(dead_code)]
pub fn alice() -> Contact {
    Contact::build("alice", "smith", "1235550000", "alice@sample.org", "15/12/1990")
}

/// Join scripted answers into the text a user would type, one per line.
#[allow(dead_code)]
pub fn script(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
