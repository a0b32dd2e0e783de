//! Error types for the phone book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Input validation failures live in [`crate::domain::ValidationError`]; they are
//! always recovered by the interactive session and never reach these types.

use thiserror::Error;

/// Errors that can occur while reading or writing the contact file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Opening, reading or writing the file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be parsed or written as CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Configuration problems. Never fatal: the setting falls back to its default.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading user input or writing to the terminal failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisting the contact list failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;
