//! Observability for interactive sessions.
//!
//! Logging goes through `tracing` to stderr; this module adds the counters that
//! are summarised when a session ends.

pub mod metrics;

pub use metrics::SessionMetrics;
