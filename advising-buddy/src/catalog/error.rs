//! Catalog error types.

use std::path::PathBuf;

use crate::domain::{CourseId, InvalidCredits};

/// Errors from building or querying a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A course's credit string could not be parsed
    #[error("course {course}: {source}")]
    InvalidCredits {
        course: CourseId,
        #[source]
        source: InvalidCredits,
    },

    /// The same course id was supplied twice
    #[error("duplicate course {0}")]
    DuplicateCourse(CourseId),

    /// Lookup of an id the catalog does not contain
    #[error("unknown course {0}")]
    UnknownCourse(CourseId),

    /// The prerequisite graph contains a cycle
    #[error("prerequisite cycle: {}", format_cycle(.0))]
    PrerequisiteCycle(Vec<CourseId>),

    /// Summing a schedule's credits overflowed
    #[error("credit total overflows at course {0}")]
    CreditOverflow(CourseId),
}

fn format_cycle(cycle: &[CourseId]) -> String {
    cycle
        .iter()
        .map(CourseId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
