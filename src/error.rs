//! Error types for the Coverage Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while evaluating coverage and
//! overtime.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::LeaveStatus;

/// The main error type for the Coverage Engine.
///
/// Every error reflects caller-supplied input or configuration; none of
/// them is transient, so nothing in the engine retries.
///
/// # Example
///
/// ```
/// use coverage_engine::error::EngineError;
///
/// let error = EngineError::UnknownCrew {
///     crew: "Z".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown crew: Z");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The end of a date range precedes its start.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange {
        /// The requested first date.
        start: NaiveDate,
        /// The requested last date.
        end: NaiveDate,
    },

    /// A date range covers more days than the site allows per request.
    #[error("Date range of {days} days exceeds the maximum of {max_days}")]
    RangeTooLarge {
        /// Number of days requested.
        days: usize,
        /// The configured maximum.
        max_days: u32,
    },

    /// A crew label is outside the configured crew set.
    #[error("Unknown crew: {crew}")]
    UnknownCrew {
        /// The crew label that was not recognised.
        crew: String,
    },

    /// A required configuration value is absent.
    #[error("Missing configuration for crew '{crew}': {setting}")]
    MissingConfiguration {
        /// The crew the setting belongs to.
        crew: String,
        /// The name of the missing setting.
        setting: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A scheduled shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A leave status change is not permitted from the current status.
    #[error("Leave '{leave_id}' cannot move from {from} to {to}")]
    InvalidLeaveTransition {
        /// The ID of the leave interval.
        leave_id: String,
        /// The current status.
        from: LeaveStatus,
        /// The requested status.
        to: LeaveStatus,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
