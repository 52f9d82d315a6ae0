//! Schedule error types.

use std::path::PathBuf;

/// Errors from editing, loading or saving a schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Term index past the end of the schedule
    #[error("term {term} is out of range (schedule has {term_count} terms)")]
    TermOutOfRange { term: usize, term_count: usize },

    /// Schedule file could not be read or written
    #[error("schedule file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schedule JSON is malformed
    #[error("invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),
}
