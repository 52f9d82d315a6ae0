//! Human-readable schedule feedback.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::catalog::{Catalog, CatalogError};
use crate::domain::CourseId;
use crate::schedule::Schedule;

use super::{check_prerequisites, get_duplicates};

/// Total credit load of a schedule.
///
/// Variable-credit courses contribute their minimum to `min` and their
/// maximum to `max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CreditTotal {
    pub min: u64,
    pub max: u64,
}

impl fmt::Display for CreditTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// Result of checking a whole schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleReport {
    /// Courses placed in more than one term.
    pub duplicates: BTreeSet<CourseId>,
    /// Courses whose prerequisites are not met in time.
    pub unmet: BTreeSet<CourseId>,
}

impl ScheduleReport {
    /// True when there is nothing to report.
    pub fn is_ok(&self) -> bool {
        self.duplicates.is_empty() && self.unmet.is_empty()
    }
}

/// Run duplicate and prerequisite checks together.
pub fn check_schedule(schedule: &Schedule, catalog: &Catalog) -> Result<ScheduleReport, CatalogError> {
    Ok(ScheduleReport {
        duplicates: get_duplicates(schedule),
        unmet: check_prerequisites(schedule, catalog)?,
    })
}

fn join(ids: &BTreeSet<CourseId>) -> String {
    ids.iter().map(CourseId::as_str).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for ScheduleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return f.write_str("Looks good!");
        }
        if !self.duplicates.is_empty() {
            write!(f, "Duplicate courses: {}\n\n", join(&self.duplicates))?;
        }
        if !self.unmet.is_empty() {
            writeln!(f, "Courses with unmet prereqs: {}", join(&self.unmet))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, CreditRange};
    use crate::schedule::Term;

    fn ids(list: &[&str]) -> BTreeSet<CourseId> {
        list.iter().copied().map(CourseId::from).collect()
    }

    #[test]
    fn credit_total_display() {
        assert_eq!(CreditTotal { min: 12, max: 12 }.to_string(), "12");
        assert_eq!(CreditTotal { min: 9, max: 12 }.to_string(), "9-12");
        assert_eq!(CreditTotal::default().to_string(), "0");
    }

    #[test]
    fn clean_report() {
        assert_eq!(ScheduleReport::default().to_string(), "Looks good!");
    }

    #[test]
    fn duplicates_only() {
        let report = ScheduleReport {
            duplicates: ids(&["CS 159", "CS 149"]),
            unmet: BTreeSet::new(),
        };
        assert_eq!(report.to_string(), "Duplicate courses: CS 149, CS 159\n\n");
    }

    #[test]
    fn unmet_only() {
        let report = ScheduleReport {
            duplicates: BTreeSet::new(),
            unmet: ids(&["B"]),
        };
        assert_eq!(report.to_string(), "Courses with unmet prereqs: B\n");
    }

    #[test]
    fn both_sections() {
        let report = ScheduleReport {
            duplicates: ids(&["X"]),
            unmet: ids(&["B", "A"]),
        };
        assert_eq!(
            report.to_string(),
            "Duplicate courses: X\n\nCourses with unmet prereqs: A, B\n"
        );
    }

    #[test]
    fn check_schedule_combines_checks() {
        let catalog = Catalog::new([
            Course::new("A", "A", "", CreditRange::fixed(4), []),
            Course::new("B", "B", "", CreditRange::new(3, 4).unwrap(), [CourseId::new("A")]),
        ])
        .unwrap();
        let schedule: Schedule = [
            ["B"].into_iter().collect::<Term>(),
            ["A"].into_iter().collect::<Term>(),
            ["A"].into_iter().collect::<Term>(),
        ]
        .into_iter()
        .collect();

        let report = check_schedule(&schedule, &catalog).unwrap();
        assert_eq!(report.duplicates, ids(&["A"]));
        assert_eq!(report.unmet, ids(&["B"]));
        assert!(!report.is_ok());
    }
}
