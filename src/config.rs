//! Configuration management for the phone book.
//!
//! The storage location is fixed; only the logging level can be tuned through the
//! environment (or a `.env` file). Nothing here prints to stdout, which belongs to
//! the interactive session.

use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;

/// File the contact list is loaded from and saved to, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "PhoneBook.csv";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the phone book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the CSV contact file (always [`DEFAULT_STORAGE_PATH`])
    pub storage_path: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,

    /// Settings that were rejected and replaced by their defaults.
    ///
    /// Loading runs before logging is set up, so the caller reports these.
    pub rejected: Vec<ConfigError>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    ///
    /// Never fails: an unreadable `.env` or an unknown level falls back to the
    /// defaults and is listed in [`Config::rejected`].
    pub fn from_env() -> Self {
        let mut rejected = Vec::new();

        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => rejected.push(ConfigError::DotenvError(e.to_string())),
        }

        let log_level = Self::parse_log_level("LOG_LEVEL", "error").unwrap_or_else(|e| {
            rejected.push(e);
            "error".to_string()
        });

        Config {
            log_level,
            rejected,
            ..Config::default()
        }
    }

    /// Parse a log level variable, falling back to `default` when unset.
    fn parse_log_level(var_name: &str, default: &str) -> Result<String, ConfigError> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("|"), val),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            log_level: "error".to_string(),
            rejected: Vec::new(),
        }
    }
}
