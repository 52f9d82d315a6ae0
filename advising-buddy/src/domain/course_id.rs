//! Course identifier type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque course identifier such as `"CS 149"`.
///
/// Course ids carry no internal structure. They are compared, hashed and
/// ordered as plain strings; the ordering is only used to produce sorted
/// output. Any string is accepted, including ones no catalog knows about.
///
/// # Examples
///
/// ```
/// use advising_buddy::domain::CourseId;
///
/// let id = CourseId::new("CS 149");
/// assert_eq!(id.as_str(), "CS 149");
/// assert!(CourseId::new("CS 149") < CourseId::new("CS 159"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Create a course id from anything string-like.
    pub fn new(s: impl Into<String>) -> Self {
        CourseId(s.into())
    }

    /// Returns the course id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the CourseId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for CourseId {
    fn from(s: &str) -> Self {
        CourseId::new(s)
    }
}

impl From<String> for CourseId {
    fn from(s: String) -> Self {
        CourseId(s)
    }
}

impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CourseId({})", self.0)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_roundtrip() {
        let id = CourseId::new("CS 149");
        assert_eq!(id.as_str(), "CS 149");
    }

    #[test]
    fn into_inner() {
        let id = CourseId::new("MATH 231");
        assert_eq!(id.into_inner(), "MATH 231".to_string());
    }

    #[test]
    fn empty_and_odd_ids_accepted() {
        assert_eq!(CourseId::new("").as_str(), "");
        assert_eq!(CourseId::new("ALGEBRA").as_str(), "ALGEBRA");
        assert_eq!(CourseId::from("Class_One").as_str(), "Class_One");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", CourseId::new("JAPN 101")), "JAPN 101");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", CourseId::new("JAPN 101")), "CourseId(JAPN 101)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut ids = vec![
            CourseId::new("CS 261"),
            CourseId::new("CS 149"),
            CourseId::new("ALGEBRA"),
        ];
        ids.sort();
        let sorted: Vec<_> = ids.iter().map(CourseId::as_str).collect();
        assert_eq!(sorted, vec!["ALGEBRA", "CS 149", "CS 261"]);
    }

    #[test]
    fn hash_lookup_by_str() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(CourseId::new("CS 149"));
        assert!(set.contains("CS 149"));
        assert!(!set.contains("CS 159"));
    }

    #[test]
    fn serde_is_a_bare_string() {
        let id = CourseId::new("CS 149");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"CS 149\"");
        let back: CourseId = serde_json::from_str("\"CS 149\"").unwrap();
        assert_eq!(back, id);
    }
}
