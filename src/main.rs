//! Phone Book - Main entry point
//!
//! Runs one interactive session on the terminal against `PhoneBook.csv` in the
//! working directory.

use anyhow::Result;
use phone_book::{run_session, Config, CsvContactRepository};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration first: it decides the log level
    let config = Config::from_env();

    // Initialize logging (stderr only so log lines never interleave with the menu)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    for rejected in &config.rejected {
        warn!("Ignoring configuration: {}", rejected);
    }

    info!(path = %config.storage_path.display(), "Starting Phone Book");

    let repo = CsvContactRepository::new(config.storage_path.clone());
    let stdin = io::stdin();
    let book = match run_session(&repo, stdin.lock(), io::stdout()) {
        Ok(book) => book,
        Err(e) => {
            error!("Session failed: {}", e);
            return Err(e.into());
        }
    };

    info!(contacts = book.len(), "Phone Book shutdown complete");
    Ok(())
}
