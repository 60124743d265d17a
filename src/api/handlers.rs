//! HTTP request handlers for the Coverage Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    CalendarIndex, CoverageEvaluator, LedgerSnapshot, OvertimeAccumulator, window_start,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{CoverageRecord, Employee, LeaveInterval, ScheduledShift};

use super::request::{CoverageRequest, OvertimeRequest};
use super::response::{ApiError, ApiErrorResponse, CoverageReport, CrewListing, OvertimeReport};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/crews", get(crews_handler))
        .route("/coverage-gaps", post(coverage_gaps_handler))
        .route("/overtime-summary", post(overtime_summary_handler))
        .with_state(state)
}

/// Handler for GET /crews endpoint.
///
/// Lists the configured crews and their staffing targets.
async fn crews_handler(State(state): State<AppState>) -> Response {
    let crews: Vec<CrewListing> = state
        .config()
        .config()
        .crews()
        .iter()
        .map(|c| CrewListing {
            label: c.label.clone(),
            required_staffing: c.required_staffing,
        })
        .collect();

    json_response(StatusCode::OK, crews)
}

/// Handler for POST /coverage-gaps endpoint.
///
/// Evaluates coverage for every date and crew in the requested range.
async fn coverage_gaps_handler(
    State(state): State<AppState>,
    payload: Result<Json<CoverageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing coverage request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_coverage(request, state.config()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                records = report.records.len(),
                gaps = report.gap_count,
                duration_us = start_time.elapsed().as_micros(),
                "Coverage evaluation completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Coverage evaluation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Handler for POST /overtime-summary endpoint.
///
/// Summarises hours over the 13-week window ending on the reference date.
async fn overtime_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_overtime(request, state.config()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employees = report.summaries.len(),
                high_overtime = report.summaries.iter().filter(|s| s.high_overtime).count(),
                duration_us = start_time.elapsed().as_micros(),
                "Overtime summary completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Overtime summary failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Builds the coverage report for a request.
///
/// The date range is checked against the site's `max_range_days` before
/// any records are built.
fn perform_coverage(
    request: CoverageRequest,
    config: &ConfigLoader,
) -> EngineResult<CoverageReport> {
    let calendar = CalendarIndex::new(request.start_date, request.end_date)?;
    let max_days = config.site().max_range_days;
    if calendar.day_count() > max_days as usize {
        return Err(EngineError::RangeTooLarge {
            days: calendar.day_count(),
            max_days,
        });
    }

    let shifts = into_validated_shifts(request.shifts)?;
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let leaves: Vec<LeaveInterval> = request.leaves.into_iter().map(Into::into).collect();
    let snapshot = LedgerSnapshot::new(employees, leaves, shifts);

    let evaluator = CoverageEvaluator::from_provider(config.config(), &snapshot);
    let mut records = evaluator.compute_coverage_gaps(
        calendar.start(),
        calendar.end(),
        request.crew.as_deref(),
    )?;

    let gap_count = records.iter().filter(|r| r.is_gap()).count();
    if request.gaps_only {
        records.retain(CoverageRecord::is_gap);
    }

    Ok(CoverageReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        gap_count,
        records,
    })
}

/// Builds the overtime report for a request.
fn perform_overtime(
    request: OvertimeRequest,
    config: &ConfigLoader,
) -> EngineResult<OvertimeReport> {
    let shifts = into_validated_shifts(request.shifts)?;
    let snapshot = LedgerSnapshot::new(vec![], vec![], shifts);

    let accumulator = OvertimeAccumulator::new(config.config().overtime(), &snapshot);
    let summaries =
        accumulator.compute_overtime_summary(&request.employee_ids, request.reference_date)?;

    Ok(OvertimeReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        window_start: window_start(request.reference_date)?,
        window_end: request.reference_date,
        summaries,
    })
}

fn into_validated_shifts(
    shifts: Vec<super::request::ShiftRequest>,
) -> EngineResult<Vec<ScheduledShift>> {
    let shifts: Vec<ScheduledShift> = shifts.into_iter().map(Into::into).collect();
    for shift in &shifts {
        shift.validate()?;
    }
    Ok(shifts)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{EmployeeRequest, LeaveRequest, ShiftRequest};
    use crate::models::LeaveStatus;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/plant").expect("Failed to load config");
        AppState::new(config)
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_valid_request() -> CoverageRequest {
        CoverageRequest {
            start_date: make_date("2025-01-01"),
            end_date: make_date("2025-01-03"),
            crew: Some("A".to_string()),
            gaps_only: false,
            employees: vec![
                EmployeeRequest {
                    id: "emp_001".to_string(),
                    crew: "A".to_string(),
                    position: "operator".to_string(),
                    active: true,
                },
                EmployeeRequest {
                    id: "emp_002".to_string(),
                    crew: "A".to_string(),
                    position: "operator".to_string(),
                    active: true,
                },
            ],
            leaves: vec![LeaveRequest {
                id: "lv_001".to_string(),
                employee_id: "emp_002".to_string(),
                date: make_date("2025-01-02"),
                status: LeaveStatus::Approved,
            }],
            shifts: vec![
                ShiftRequest {
                    id: "shift_001".to_string(),
                    employee_id: "emp_001".to_string(),
                    date: make_date("2025-01-02"),
                    crew: "A".to_string(),
                    hours: Decimal::new(12, 0),
                },
                ShiftRequest {
                    id: "shift_002".to_string(),
                    employee_id: "emp_002".to_string(),
                    date: make_date("2025-01-02"),
                    crew: "A".to_string(),
                    hours: Decimal::new(12, 0),
                },
            ],
        }
    }

    async fn send(router: Router, method: &str, uri: &str, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_valid_coverage_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let (status, body) = send(router, "POST", "/coverage-gaps", body).await;
        assert_eq!(status, StatusCode::OK);

        let report: CoverageReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.records[1].scheduled, 2);
        assert_eq!(report.records[1].on_leave, 1);
        assert_eq!(report.records[1].coverage_percentage, Decimal::new(50, 0));
        assert_eq!(report.gap_count, 3);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) =
            send(router, "POST", "/coverage-gaps", "{not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_start_date_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = r#"{"end_date": "2025-01-03"}"#.to_string();

        let (status, body) = send(router, "POST", "/coverage-gaps", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("start_date"));
    }

    #[tokio::test]
    async fn test_unknown_crew_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.crew = Some("Z".to_string());
        let body = serde_json::to_string(&request).unwrap();

        let (status, body) = send(router, "POST", "/coverage-gaps", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNKNOWN_CREW");
    }

    #[tokio::test]
    async fn test_range_beyond_site_limit_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.start_date = make_date("0001-01-01");
        request.end_date = make_date("9999-12-31");
        let body = serde_json::to_string(&request).unwrap();

        let (status, body) = send(router, "POST", "/coverage-gaps", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "RANGE_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_negative_hours_returns_invalid_shift() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.shifts[0].hours = Decimal::new(-8, 0);
        let body = serde_json::to_string(&request).unwrap();

        let (status, body) = send(router, "POST", "/coverage-gaps", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_SHIFT");
    }

    #[tokio::test]
    async fn test_crews_lists_configuration() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/crews").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let crews: Vec<CrewListing> = serde_json::from_slice(&body).unwrap();
        let labels: Vec<_> = crews.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C", "D"]);
        assert_eq!(crews[0].required_staffing, Some(16));
    }

    #[tokio::test]
    async fn test_overtime_summary_for_idle_employee() {
        let router = create_router(create_test_state());
        let request = OvertimeRequest {
            employee_ids: vec!["emp_001".to_string()],
            reference_date: make_date("2025-03-31"),
            shifts: vec![],
        };
        let body = serde_json::to_string(&request).unwrap();

        let (status, body) = send(router, "POST", "/overtime-summary", body).await;
        assert_eq!(status, StatusCode::OK);

        let report: OvertimeReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.window_start, make_date("2024-12-31"));
        assert_eq!(report.window_end, make_date("2025-03-31"));
        assert_eq!(report.summaries.len(), 1);
        assert_eq!(report.summaries[0].total_hours_13_weeks, Decimal::ZERO);
    }
}
