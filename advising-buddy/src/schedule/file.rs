//! JSON wire form and file persistence for schedules.
//!
//! On disk a schedule is an array of arrays of course-id strings, one inner
//! array per term. Saving sorts the ids inside each term and keeps term
//! order as-is. Loading accepts any strings without consulting a catalog.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::error::ScheduleError;
use super::{Schedule, Term};

/// Convert a schedule into nested lists, each term sorted ascending.
///
/// The schedule itself is not modified.
pub fn schedule_to_json(schedule: &Schedule) -> Vec<Vec<String>> {
    schedule
        .terms()
        .iter()
        .map(|term| {
            term.sorted()
                .into_iter()
                .map(|id| id.as_str().to_string())
                .collect()
        })
        .collect()
}

/// Convert nested lists into a schedule. Repeats within a term collapse.
pub fn json_to_schedule(terms: Vec<Vec<String>>) -> Schedule {
    terms
        .into_iter()
        .map(|term| term.into_iter().collect::<Term>())
        .collect()
}

/// Save a schedule as pretty-printed JSON.
///
/// Creates parent directories if they don't exist.
pub fn save_schedule(schedule: &Schedule, path: impl AsRef<Path>) -> Result<(), ScheduleError> {
    let path = path.as_ref();
    let io_err = |source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let json = to_json_string(&schedule_to_json(schedule))?;
    std::fs::write(path, json).map_err(io_err)?;

    info!(
        path = %path.display(),
        terms = schedule.len(),
        "Saved schedule"
    );
    Ok(())
}

/// Load a schedule from a JSON file.
pub fn load_schedule(path: impl AsRef<Path>) -> Result<Schedule, ScheduleError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let terms: Vec<Vec<String>> = serde_json::from_str(&contents)?;
    let schedule = json_to_schedule(terms);

    info!(
        path = %path.display(),
        terms = schedule.len(),
        "Loaded schedule"
    );
    Ok(schedule)
}

/// Serialize with four-space indentation.
fn to_json_string(value: &impl Serialize) -> Result<String, ScheduleError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
