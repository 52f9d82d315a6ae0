//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, warn};

use crate::catalog::CatalogError;
use crate::domain::CourseId;
use crate::schedule::{Schedule, ScheduleError, schedule_to_json, term_label};
use crate::validate::{check_schedule, format_course_info, selectable_courses, total_credits};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses))
        .route("/courses/:id", get(course_info))
        .route("/schedule/template", get(schedule_template))
        .route("/schedule/check", post(check))
        .route("/schedule/available", post(available))
        .route("/schedule/credits", post(credits))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every course in the catalog, sorted by id.
async fn list_courses(State(state): State<AppState>) -> Json<CourseListResponse> {
    let courses = state
        .catalog
        .courses()
        .map(|c| CourseSummary {
            id: c.id.clone(),
            name: c.name.clone(),
            credits: c.credits.to_string(),
        })
        .collect();

    Json(CourseListResponse { courses })
}

/// Formatted info block for one course.
async fn course_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CourseInfoQuery>,
) -> Result<Json<CourseInfoResponse>, AppError> {
    let id = CourseId::new(id);
    if !state.catalog.contains(id.as_str()) {
        return Err(AppError::NotFound {
            message: format!("Unknown course: {id}"),
        });
    }

    let width = query.width.unwrap_or(state.config.info_wrap_width);
    let info = format_course_info(&id, &state.catalog, width)?;

    Ok(Json(CourseInfoResponse { id, info }))
}

/// An empty schedule in the configured layout.
async fn schedule_template(State(state): State<AppState>) -> Json<TemplateResponse> {
    let term_count = state.config.term_count;
    let schedule = Schedule::new(term_count);

    Json(TemplateResponse {
        labels: (0..term_count).map(term_label).collect(),
        schedule: ScheduleDto(schedule_to_json(&schedule)),
    })
}

/// Duplicates, unmet prerequisites and credit load in one call.
async fn check(
    State(state): State<AppState>,
    Json(req): Json<ScheduleRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let schedule = req.schedule.into_schedule();

    let report = check_schedule(&schedule, &state.catalog)?;
    let credits = total_credits(&schedule, &state.catalog)?;

    debug!(
        terms = schedule.len(),
        duplicates = report.duplicates.len(),
        unmet = report.unmet.len(),
        "Checked schedule"
    );

    Ok(Json(CheckResponse {
        report: report.to_string(),
        duplicates: report.duplicates,
        unmet_prerequisites: report.unmet,
        credits: credits.into(),
    }))
}

/// Courses that can be placed in the requested term.
async fn available(
    State(state): State<AppState>,
    Json(req): Json<AvailableRequest>,
) -> Result<Json<AvailableResponse>, AppError> {
    let schedule = req.schedule.into_schedule();
    if req.term >= schedule.len() {
        return Err(ScheduleError::TermOutOfRange {
            term: req.term,
            term_count: schedule.len(),
        }
        .into());
    }

    let enforce = req
        .enforce_prerequisites
        .unwrap_or(state.config.enforce_prerequisites);
    let courses = selectable_courses(&schedule, req.term, &state.catalog, enforce);

    Ok(Json(AvailableResponse {
        term: req.term,
        label: term_label(req.term),
        enforce_prerequisites: enforce,
        courses,
    }))
}

/// Credit load of a schedule.
async fn credits(
    State(state): State<AppState>,
    Json(req): Json<ScheduleRequest>,
) -> Result<Json<CreditsResponse>, AppError> {
    let schedule = req.schedule.into_schedule();
    let total = total_credits(&schedule, &state.catalog)?;
    Ok(Json(total.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            // Caused by the submitted schedule
            CatalogError::UnknownCourse(_) | CatalogError::CreditOverflow(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::TermOutOfRange { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, error = %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::AdvisingConfig;

    const CATALOG_JSON: &str = r#"{
        "A": {"name": "Course A", "description": "First course.", "credits": "4", "prerequisites": []},
        "B": {"name": "Course B", "description": "Second course.", "credits": "3-4", "prerequisites": ["A"]}
    }"#;

    fn state() -> AppState {
        let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
        AppState::new(catalog, AdvisingConfig::default())
    }

    fn dto(terms: &[&[&str]]) -> ScheduleDto {
        ScheduleDto(
            terms
                .iter()
                .map(|t| t.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn ids(list: &[&str]) -> std::collections::BTreeSet<CourseId> {
        list.iter().copied().map(CourseId::from).collect()
    }

    #[tokio::test]
    async fn health_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_courses_sorted() {
        let Json(resp) = list_courses(State(state())).await;
        let listed: Vec<_> = resp.courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(listed, vec!["A", "B"]);
        assert_eq!(resp.courses[1].credits, "3-4");
    }

    #[tokio::test]
    async fn course_info_found() {
        let Json(resp) = course_info(
            State(state()),
            Path("B".to_string()),
            Query(CourseInfoQuery { width: None }),
        )
        .await
        .unwrap();
        assert_eq!(
            resp.info,
            "Name: Course B\n\nDescription: Second course.\n\nCredits: 3-4\n\nPrerequisites: A\n\nDependencies: A"
        );
    }

    #[tokio::test]
    async fn course_info_unknown_is_not_found() {
        let err = course_info(
            State(state()),
            Path("Z".to_string()),
            Query(CourseInfoQuery { width: Some(80) }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn template_uses_configured_layout() {
        let Json(resp) = schedule_template(State(state())).await;
        assert_eq!(resp.labels.len(), 9);
        assert_eq!(resp.labels[0], "AP/Transfer");
        assert_eq!(resp.labels[8], "S8");
        assert!(resp.schedule.0.iter().all(Vec::is_empty));
    }

    #[tokio::test]
    async fn check_reports_problems() {
        let req = ScheduleRequest {
            schedule: dto(&[&["B"], &["A"], &["A"]]),
        };
        let Json(resp) = check(State(state()), Json(req)).await.unwrap();

        assert_eq!(resp.duplicates, ids(&["A"]));
        assert_eq!(resp.unmet_prerequisites, ids(&["B"]));
        assert_eq!(resp.credits.min, 11);
        assert_eq!(resp.credits.max, 12);
        assert_eq!(
            resp.report,
            "Duplicate courses: A\n\nCourses with unmet prereqs: B\n"
        );
    }

    #[tokio::test]
    async fn check_clean_schedule() {
        let req = ScheduleRequest {
            schedule: dto(&[&[], &["A"], &["B"]]),
        };
        let Json(resp) = check(State(state()), Json(req)).await.unwrap();
        assert_eq!(resp.report, "Looks good!");
        assert_eq!(resp.credits.display, "7-8");
    }

    #[tokio::test]
    async fn check_unknown_course_is_bad_request() {
        let req = ScheduleRequest {
            schedule: dto(&[&["GHOST"]]),
        };
        let err = check(State(state()), Json(req)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn available_with_enforcement() {
        let req = AvailableRequest {
            schedule: dto(&[&[], &["A"], &[]]),
            term: 2,
            enforce_prerequisites: Some(true),
        };
        let Json(resp) = available(State(state()), Json(req)).await.unwrap();
        assert_eq!(resp.courses, ids(&["B"]));
        assert_eq!(resp.label, "S2");
    }

    #[tokio::test]
    async fn available_defaults_to_config() {
        let req = AvailableRequest {
            schedule: dto(&[&[], &["A"], &[]]),
            term: 1,
            enforce_prerequisites: None,
        };
        let Json(resp) = available(State(state()), Json(req)).await.unwrap();
        assert!(!resp.enforce_prerequisites);
        assert_eq!(resp.courses, ids(&["A", "B"]));
    }

    #[tokio::test]
    async fn available_term_out_of_range() {
        let req = AvailableRequest {
            schedule: dto(&[&[], &[]]),
            term: 2,
            enforce_prerequisites: Some(true),
        };
        let err = available(State(state()), Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn credits_total() {
        let req = ScheduleRequest {
            schedule: dto(&[&[], &["A"], &[]]),
        };
        let Json(resp) = credits(State(state()), Json(req)).await.unwrap();
        assert_eq!((resp.min, resp.max), (4, 4));
        assert_eq!(resp.display, "4");
    }

    #[test]
    fn catalog_errors_map_to_status() {
        let err: AppError = CatalogError::UnknownCourse(CourseId::new("X")).into();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err: AppError = CatalogError::CreditOverflow(CourseId::new("BIG")).into();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err: AppError = CatalogError::PrerequisiteCycle(vec![]).into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
