//! JSON wire form of the catalog.
//!
//! The catalog file is an object keyed by course id. Each value carries the
//! credit string in its source notation and the prerequisite list as
//! written; both are normalised when converted into a [`Course`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Course, CourseId, CreditRange};

use super::error::CatalogError;

/// A course record exactly as it appears in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCourse {
    pub name: String,
    pub description: String,
    /// `"N"` or `"A-B"`
    pub credits: String,
    /// Order and duplicates are insignificant
    pub prerequisites: Vec<CourseId>,
}

/// The catalog file: course id to raw record.
pub type RawCatalog = BTreeMap<CourseId, RawCourse>;

impl RawCourse {
    /// Convert into a validated course, parsing the credit string.
    pub fn into_course(self, id: CourseId) -> Result<Course, CatalogError> {
        let credits = CreditRange::parse(&self.credits).map_err(|source| {
            CatalogError::InvalidCredits {
                course: id.clone(),
                source,
            }
        })?;

        Ok(Course::new(
            id,
            self.name,
            self.description,
            credits,
            self.prerequisites,
        ))
    }

    /// Render a course back into its wire form.
    pub fn from_course(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            description: course.description.clone(),
            credits: course.credits.to_string(),
            prerequisites: course.prerequisites.iter().cloned().collect(),
        }
    }
}
