//! Interactive command-line controller.
//!
//! - **state**: menu states, command parsing and input shape checks
//! - **session**: the loop that runs states against a contact book

pub mod session;
pub mod state;

pub use session::{run_session, Session};
pub use state::{MainCommand, MenuState, SearchCommand};
