//! Course records.

use std::collections::BTreeSet;

use super::{CourseId, CreditRange};

/// A single catalog entry.
///
/// Courses are immutable once a catalog has been built from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub credits: CreditRange,
    /// Direct prerequisites. These ids need not exist in the catalog.
    pub prerequisites: BTreeSet<CourseId>,
}

impl Course {
    /// Create a course. Duplicate prerequisites collapse to one entry.
    pub fn new(
        id: impl Into<CourseId>,
        name: impl Into<String>,
        description: impl Into<String>,
        credits: CreditRange,
        prerequisites: impl IntoIterator<Item = CourseId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            credits,
            prerequisites: prerequisites.into_iter().collect(),
        }
    }

    /// True when the course has at least one prerequisite.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
