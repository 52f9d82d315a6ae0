//! Course catalog and prerequisite graph queries.
//!
//! A [`Catalog`] is built once from the catalog file and is read-only
//! afterwards; callers share it behind an `Arc` and pass `&Catalog` into
//! every validator call.
//!
//! Construction rejects cyclic prerequisite graphs, so every traversal
//! over a built catalog terminates. Prerequisite ids that are not in the
//! catalog are accepted at construction and only fail when a query needs
//! to look them up.

mod error;
mod raw;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{Course, CourseId};

pub use error::CatalogError;
pub use raw::{RawCatalog, RawCourse};

/// All known courses, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: BTreeMap<CourseId, Course>,
}

impl Catalog {
    /// Build a catalog from course records.
    ///
    /// Fails on a repeated course id or a prerequisite cycle.
    pub fn new(courses: impl IntoIterator<Item = Course>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for course in courses {
            if map.contains_key(&course.id) {
                return Err(CatalogError::DuplicateCourse(course.id));
            }
            map.insert(course.id.clone(), course);
        }

        if let Some(cycle) = find_cycle(&map) {
            return Err(CatalogError::PrerequisiteCycle(cycle));
        }

        Ok(Self { courses: map })
    }

    /// Build a catalog from its deserialized wire form.
    pub fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
        let courses = raw
            .into_iter()
            .map(|(id, record)| record.into_course(id))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(courses)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;

        info!(
            path = %path.display(),
            courses = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// The wire form of this catalog.
    pub fn to_raw(&self) -> RawCatalog {
        self.courses
            .iter()
            .map(|(id, course)| (id.clone(), RawCourse::from_course(course)))
            .collect()
    }

    /// Look up a course, if present.
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Look up a course that the caller expects to exist.
    ///
    /// Returns [`CatalogError::UnknownCourse`] rather than a default when
    /// the id is missing.
    pub fn course(&self, id: &CourseId) -> Result<&Course, CatalogError> {
        self.courses
            .get(id)
            .ok_or_else(|| CatalogError::UnknownCourse(id.clone()))
    }

    /// True when the catalog has a course with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    /// All course ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = &CourseId> {
        self.courses.keys()
    }

    /// All courses, ordered by id.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Every course required, directly or indirectly, before `id`.
    ///
    /// The course itself is never included. Fails if `id` or any
    /// prerequisite reached along the way is missing from the catalog.
    pub fn get_dependencies(&self, id: &CourseId) -> Result<BTreeSet<CourseId>, CatalogError> {
        let root = self.course(id)?;

        let mut dependencies = BTreeSet::new();
        let mut stack: Vec<&CourseId> = root.prerequisites.iter().collect();

        while let Some(next) = stack.pop() {
            if next == id || !dependencies.insert(next.clone()) {
                continue;
            }
            let course = self.course(next)?;
            stack.extend(course.prerequisites.iter());
        }

        debug!(
            course = %id,
            dependencies = dependencies.len(),
            "Resolved dependency closure"
        );
        Ok(dependencies)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Find one cycle in the prerequisite graph, returned as the path that
/// closes on itself (first and last ids equal).
fn find_cycle(courses: &BTreeMap<CourseId, Course>) -> Option<Vec<CourseId>> {
    let mut marks: HashMap<&CourseId, Mark> = HashMap::new();
    let mut path: Vec<&CourseId> = Vec::new();

    courses
        .keys()
        .find_map(|id| visit(id, courses, &mut marks, &mut path))
}

fn visit<'a>(
    id: &'a CourseId,
    courses: &'a BTreeMap<CourseId, Course>,
    marks: &mut HashMap<&'a CourseId, Mark>,
    path: &mut Vec<&'a CourseId>,
) -> Option<Vec<CourseId>> {
    match marks.get(id) {
        Some(Mark::Done) => return None,
        Some(Mark::Visiting) => {
            let start = path.iter().position(|p| *p == id)?;
            let mut cycle: Vec<CourseId> = path[start..].iter().map(|p| (*p).clone()).collect();
            cycle.push(id.clone());
            return Some(cycle);
        }
        None => {}
    }

    // Unknown prerequisites are leaves here; lookups report them later.
    let course = courses.get(id)?;

    marks.insert(id, Mark::Visiting);
    path.push(id);
    for prerequisite in &course.prerequisites {
        if let Some(cycle) = visit(prerequisite, courses, marks, path) {
            return Some(cycle);
        }
    }
    path.pop();
    marks.insert(id, Mark::Done);

    None
}
