//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields a user types in when
//! adding a contact: names, phone numbers, email addresses and birth dates. Each
//! value object validates at construction time, so a value that exists is one the
//! interactive session is allowed to store.

pub mod birth_date;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use birth_date::{validate_birth_date, BirthDate};
pub use email::{validate_email, EmailAddress};
pub use errors::ValidationError;
pub use name::{capitalize, is_alphabetic, PersonName};
pub use phone::{is_numeric, PhoneNumber};
