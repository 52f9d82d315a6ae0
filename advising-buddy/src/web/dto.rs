//! Data transfer objects for web requests and responses.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::CourseId;
use crate::schedule::{Schedule, json_to_schedule};
use crate::validate::CreditTotal;

/// A schedule in its JSON wire form: one array of course ids per term.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ScheduleDto(pub Vec<Vec<String>>);

impl ScheduleDto {
    /// Convert into a schedule snapshot.
    pub fn into_schedule(self) -> Schedule {
        json_to_schedule(self.0)
    }
}

/// Request carrying only a schedule.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub schedule: ScheduleDto,
}

/// Request for the courses that can go in a term.
#[derive(Debug, Deserialize)]
pub struct AvailableRequest {
    pub schedule: ScheduleDto,

    /// Term index (0 is AP/transfer)
    pub term: usize,

    /// Overrides the server default when present
    pub enforce_prerequisites: Option<bool>,
}

/// Query parameters for course info.
#[derive(Debug, Deserialize)]
pub struct CourseInfoQuery {
    /// Wrap width (defaults to the configured width)
    pub width: Option<usize>,
}

/// A course in the catalog listing.
#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub name: String,
    /// `"N"` or `"low-high"`
    pub credits: String,
}

/// Catalog listing response.
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseSummary>,
}

/// Formatted course info.
#[derive(Debug, Serialize)]
pub struct CourseInfoResponse {
    pub id: CourseId,
    pub info: String,
}

/// Credit load of a schedule.
#[derive(Debug, Serialize)]
pub struct CreditsResponse {
    pub min: u64,
    pub max: u64,
    /// `"N"` when min equals max, otherwise `"min-max"`
    pub display: String,
}

impl From<CreditTotal> for CreditsResponse {
    fn from(total: CreditTotal) -> Self {
        Self {
            min: total.min,
            max: total.max,
            display: total.to_string(),
        }
    }
}

/// Full schedule check.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub duplicates: BTreeSet<CourseId>,
    pub unmet_prerequisites: BTreeSet<CourseId>,
    pub credits: CreditsResponse,
    /// Feedback text, e.g. "Looks good!"
    pub report: String,
}

/// Courses that can be placed in a term.
#[derive(Debug, Serialize)]
pub struct AvailableResponse {
    pub term: usize,
    pub label: String,
    pub enforce_prerequisites: bool,
    pub courses: BTreeSet<CourseId>,
}

/// An empty schedule in the configured layout.
#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub labels: Vec<String>,
    pub schedule: ScheduleDto,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_dto_is_nested_arrays() {
        let dto: ScheduleDto = serde_json::from_str(r#"[[], ["A", "B"], ["A"]]"#).unwrap();
        let schedule = dto.into_schedule();
        assert_eq!(schedule.len(), 3);
        assert!(schedule.terms()[1].contains("B"));
    }

    #[test]
    fn available_request_optional_enforcement() {
        let req: AvailableRequest =
            serde_json::from_str(r#"{"schedule": [[]], "term": 0}"#).unwrap();
        assert_eq!(req.term, 0);
        assert!(req.enforce_prerequisites.is_none());
    }

    #[test]
    fn credits_response_display() {
        let resp = CreditsResponse::from(CreditTotal { min: 9, max: 12 });
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["display"], "9-12");
        assert_eq!(json["min"], 9);
    }
}
