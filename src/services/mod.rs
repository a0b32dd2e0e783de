//! Collection operations over the in-memory contact list.

mod contact_book;

pub use contact_book::{search, ContactBook};
