//! Per-session activity counters.
//!
//! Counters are bumped by the interactive session as commands complete and
//! reported once through `tracing` when the session ends.

use crate::domain::ValidationError;

/// Activity counters for one interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionMetrics {
    contacts_loaded: usize,
    contacts_added: u64,
    duplicates_rejected: u64,
    contacts_deleted: u64,
    searches_total: u64,
    searches_empty: u64,
    invalid_inputs_total: u64,
}

impl SessionMetrics {
    /// Create a tracker for a session that started with `contacts_loaded` contacts.
    pub fn new(contacts_loaded: usize) -> Self {
        Self {
            contacts_loaded,
            ..Self::default()
        }
    }

    /// Track a contact appended to the book.
    pub fn track_add(&mut self) {
        self.contacts_added += 1;
    }

    /// Track an add rejected because the phone/email pair already exists.
    pub fn track_duplicate(&mut self) {
        self.duplicates_rejected += 1;
        tracing::debug!("Duplicate contact rejected");
    }

    /// Track a contact removed from the book.
    pub fn track_delete(&mut self) {
        self.contacts_deleted += 1;
    }

    /// Track a completed search.
    pub fn track_search(&mut self, result_count: usize) {
        self.searches_total += 1;
        if result_count == 0 {
            self.searches_empty += 1;
        }
    }

    /// Track input that failed shape validation and was re-prompted.
    pub fn track_invalid_input(&mut self, prompt: &str, reason: &ValidationError) {
        self.invalid_inputs_total += 1;
        tracing::debug!(prompt = %prompt, reason = %reason, "Input rejected");
    }

    pub fn contacts_added(&self) -> u64 {
        self.contacts_added
    }

    pub fn duplicates_rejected(&self) -> u64 {
        self.duplicates_rejected
    }

    pub fn contacts_deleted(&self) -> u64 {
        self.contacts_deleted
    }

    pub fn searches_total(&self) -> u64 {
        self.searches_total
    }

    pub fn searches_empty(&self) -> u64 {
        self.searches_empty
    }

    pub fn invalid_inputs_total(&self) -> u64 {
        self.invalid_inputs_total
    }

    /// Log a one-line summary at `info`.
    pub fn log_summary(&self, contacts_saved: usize) {
        tracing::info!(
            contacts_loaded = self.contacts_loaded,
            contacts_saved = contacts_saved,
            contacts_added = self.contacts_added,
            duplicates_rejected = self.duplicates_rejected,
            contacts_deleted = self.contacts_deleted,
            searches_total = self.searches_total,
            searches_empty = self.searches_empty,
            invalid_inputs_total = self.invalid_inputs_total,
            "Session summary"
        );
    }
}
