//! Response types for the Coverage Engine API.
//!
//! This module defines the report envelopes returned on success and the
//! error response structures and error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{CoverageRecord, OvertimeSummary};

/// Response body for the `/coverage-gaps` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Number of evaluated cells short of their staffing target.
    pub gap_count: usize,
    /// Coverage records, ordered by date then crew.
    pub records: Vec<CoverageRecord>,
}

/// Response body for the `/overtime-summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// First date of the overtime window.
    pub window_start: NaiveDate,
    /// Last date of the overtime window.
    pub window_end: NaiveDate,
    /// One summary per requested employee.
    pub summaries: Vec<OvertimeSummary>,
}

/// A configured crew, as listed by `/crews`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewListing {
    /// The crew label.
    pub label: String,
    /// The staffing target, if configured.
    pub required_staffing: Option<u32>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    "end_date must be on or after start_date",
                ),
            },
            EngineError::RangeTooLarge { max_days, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RANGE_TOO_LARGE",
                    message,
                    format!("Request at most {} days at a time", max_days),
                ),
            },
            EngineError::UnknownCrew { crew } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_CREW",
                    message,
                    format!("The crew '{}' is not part of the configured crew set", crew),
                ),
            },
            EngineError::MissingConfiguration { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("MISSING_CONFIGURATION", message),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidShift { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    message,
                    "The shift data contains invalid information",
                ),
            },
            EngineError::InvalidLeaveTransition { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_LEAVE_TRANSITION", message),
            },
        }
    }
}
