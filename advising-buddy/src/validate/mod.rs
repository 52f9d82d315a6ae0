//! Schedule validation against a catalog.
//!
//! Every function here is a pure function of its `(Schedule, Catalog)`
//! arguments. Lookups of a scheduled course that the catalog does not know
//! return [`CatalogError::UnknownCourse`]; nothing is silently skipped or
//! counted as zero.

mod info;
mod report;

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::catalog::{Catalog, CatalogError};
use crate::domain::CourseId;
use crate::schedule::Schedule;

pub use info::{DEFAULT_WRAP_WIDTH, format_course_info, wrap};
pub use report::{CreditTotal, ScheduleReport, check_schedule};

/// Courses placed in more than one term.
///
/// Each repeated course is reported once, however many terms hold it.
pub fn get_duplicates(schedule: &Schedule) -> BTreeSet<CourseId> {
    let mut seen: BTreeSet<&CourseId> = BTreeSet::new();
    let mut duplicates = BTreeSet::new();

    for (_, id) in schedule.placements() {
        if !seen.insert(id) {
            duplicates.insert(id.clone());
        }
    }

    duplicates
}

/// Courses whose prerequisites are not all placed in a strictly earlier term.
///
/// A prerequisite counts at its earliest placement. A prerequisite absent
/// from the schedule, or placed in the same or a later term, makes the
/// course invalid.
pub fn check_prerequisites(
    schedule: &Schedule,
    catalog: &Catalog,
) -> Result<BTreeSet<CourseId>, CatalogError> {
    let mut invalid = BTreeSet::new();

    for (term, id) in schedule.placements() {
        let course = catalog.course(id)?;

        let unmet = course.prerequisites.iter().find(|prerequisite| {
            schedule
                .check_semester(prerequisite.as_str())
                .earliest()
                .is_none_or(|placed| placed >= term)
        });

        if let Some(prerequisite) = unmet {
            trace!(course = %id, term, %prerequisite, "Unmet prerequisite");
            invalid.insert(id.clone());
        }
    }

    debug!(invalid = invalid.len(), "Checked prerequisites");
    Ok(invalid)
}

/// Courses that could be newly placed in `term`.
///
/// A course qualifies when it is not already anywhere in the schedule and
/// every prerequisite sits in a term before `term`.
pub fn available_classes(schedule: &Schedule, term: usize, catalog: &Catalog) -> BTreeSet<CourseId> {
    let available: BTreeSet<CourseId> = catalog
        .courses()
        .filter(|course| !schedule.contains(course.id.as_str()))
        .filter(|course| {
            course.prerequisites.iter().all(|prerequisite| {
                schedule
                    .check_semester(prerequisite.as_str())
                    .earliest()
                    .is_some_and(|placed| placed < term)
            })
        })
        .map(|course| course.id.clone())
        .collect();

    debug!(term, available = available.len(), "Computed available classes");
    available
}

/// Options to offer for `term`.
///
/// With prerequisite enforcement these are [`available_classes`];
/// without it, every course in the catalog.
pub fn selectable_courses(
    schedule: &Schedule,
    term: usize,
    catalog: &Catalog,
    enforce_prerequisites: bool,
) -> BTreeSet<CourseId> {
    if enforce_prerequisites {
        available_classes(schedule, term, catalog)
    } else {
        catalog.ids().cloned().collect()
    }
}

/// Minimum and maximum total credits across every placed course.
pub fn total_credits(schedule: &Schedule, catalog: &Catalog) -> Result<CreditTotal, CatalogError> {
    let mut total = CreditTotal::default();

    for (_, id) in schedule.placements() {
        let credits = catalog.course(id)?.credits;
        let overflow = || CatalogError::CreditOverflow(id.clone());
        total.min = total
            .min
            .checked_add(u64::from(credits.min()))
            .ok_or_else(overflow)?;
        total.max = total
            .max
            .checked_add(u64::from(credits.max()))
            .ok_or_else(overflow)?;
    }

    Ok(total)
}
