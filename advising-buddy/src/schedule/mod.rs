//! Multi-term course schedules.
//!
//! A [`Schedule`] is an ordered list of [`Term`]s, each an unordered set of
//! course ids. The schedule is owned and edited by the caller; validator
//! functions only ever borrow a snapshot for the length of one call.

mod error;
mod file;

use std::collections::HashSet;

use crate::domain::CourseId;

pub use error::ScheduleError;
pub use file::{json_to_schedule, load_schedule, save_schedule, schedule_to_json};

/// Number of terms in the standard layout: one AP/transfer term plus
/// eight semesters.
pub const STANDARD_TERM_COUNT: usize = 9;

/// One scheduling period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Term {
    courses: HashSet<CourseId>,
}

impl Term {
    /// Create an empty term.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course. Returns false if it was already in this term.
    pub fn insert(&mut self, id: impl Into<CourseId>) -> bool {
        self.courses.insert(id.into())
    }

    /// Remove a course. Returns false if it was not in this term.
    pub fn remove(&mut self, id: &str) -> bool {
        self.courses.remove(id)
    }

    /// True when the course is placed in this term.
    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains(id)
    }

    /// Courses in this term, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &CourseId> {
        self.courses.iter()
    }

    /// Courses in this term, ascending.
    pub fn sorted(&self) -> Vec<&CourseId> {
        let mut ids: Vec<_> = self.courses.iter().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl<I: Into<CourseId>> FromIterator<I> for Term {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            courses: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Where a course sits in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermLookup {
    /// Whether any term contains the course.
    pub found: bool,
    /// Index of the earliest term containing the course, or the number of
    /// terms when it is absent.
    pub term_index: usize,
}

impl TermLookup {
    /// The earliest term index, if the course is scheduled at all.
    pub fn earliest(&self) -> Option<usize> {
        self.found.then_some(self.term_index)
    }
}

/// An ordered sequence of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    terms: Vec<Term>,
}

impl Schedule {
    /// A schedule of `term_count` empty terms.
    pub fn new(term_count: usize) -> Self {
        Self {
            terms: vec![Term::new(); term_count],
        }
    }

    /// The standard empty layout ([`STANDARD_TERM_COUNT`] terms).
    pub fn standard() -> Self {
        Self::new(STANDARD_TERM_COUNT)
    }

    /// Build a schedule from existing terms.
    pub fn from_terms(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    pub fn term_mut(&mut self, index: usize) -> Option<&mut Term> {
        self.terms.get_mut(index)
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Place a course in a term.
    ///
    /// Placing a course that already sits in another term is allowed; the
    /// duplicate is reported by validation, not prevented here.
    pub fn place(&mut self, term: usize, id: impl Into<CourseId>) -> Result<bool, ScheduleError> {
        let term_count = self.len();
        self.terms
            .get_mut(term)
            .map(|t| t.insert(id))
            .ok_or(ScheduleError::TermOutOfRange { term, term_count })
    }

    /// Remove a course from a term.
    pub fn remove(&mut self, term: usize, id: &str) -> Result<bool, ScheduleError> {
        let term_count = self.len();
        self.terms
            .get_mut(term)
            .map(|t| t.remove(id))
            .ok_or(ScheduleError::TermOutOfRange { term, term_count })
    }

    /// Find the earliest term containing `id`, scanning in index order.
    pub fn check_semester(&self, id: &str) -> TermLookup {
        match self.terms.iter().position(|t| t.contains(id)) {
            Some(term_index) => TermLookup {
                found: true,
                term_index,
            },
            None => TermLookup {
                found: false,
                term_index: self.terms.len(),
            },
        }
    }

    /// True when any term contains `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.terms.iter().any(|t| t.contains(id))
    }

    /// Every placement as `(term_index, course)`, terms in order.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &CourseId)> {
        self.terms
            .iter()
            .enumerate()
            .flat_map(|(index, term)| term.iter().map(move |id| (index, id)))
    }
}

impl FromIterator<Term> for Schedule {
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        Self::from_terms(iter.into_iter().collect())
    }
}

/// Display label for a term in the standard layout.
///
/// Term 0 holds AP and transfer credit; later terms are numbered semesters.
pub fn term_label(index: usize) -> String {
    if index == 0 {
        "AP/Transfer".to_string()
    } else {
        format!("S{index}")
    }
}
