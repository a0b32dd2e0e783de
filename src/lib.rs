//! Phone Book - an interactive personal contact manager.
//!
//! Contacts are loaded from a CSV file at startup, edited in memory through a
//! line-based menu, and written back in full when the user quits.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones, emails and birth dates
//! - **models**: The contact record and its columns
//! - **services**: Search, duplicate check and delete over the in-memory book
//! - **repositories**: Loading and saving the book (CSV file)
//! - **presentation**: Fixed-width table output
//! - **cli**: The interactive menu state machine
//! - **observability**: Session counters reported through `tracing`
//! - **config**: Runtime configuration
//! - **error**: Custom error types for precise error handling

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod presentation;
pub mod repositories;
pub mod services;

pub use cli::{run_session, MenuState, Session};
pub use config::{Config, DEFAULT_STORAGE_PATH};
pub use domain::{validate_birth_date, validate_email, ValidationError};
pub use error::{ConfigError, SessionError, StorageError};
pub use models::{Contact, ContactField, SearchField};
pub use repositories::{ContactRepository, CsvContactRepository};
pub use services::ContactBook;
