//! Data models for the phone book.
//!
//! A contact is the only entity; this module also names its columns and the
//! fields a search can target.

pub mod contact;

pub use contact::{Contact, ContactField, SearchField, CONTACT_HEADER};
