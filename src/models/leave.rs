//! Leave interval model and status lifecycle.
//!
//! This module contains the [`LeaveInterval`] and [`LeaveStatus`] types used
//! to record time off requested by employees.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The lifecycle status of a leave request.
///
/// Requests start as `Pending`. `Approved`, `Denied` and `Cancelled` are
/// terminal, except that approved leave may still be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted and awaiting a supervisor decision.
    Pending,
    /// Approved by a supervisor. The only status counted against coverage.
    Approved,
    /// Rejected by a supervisor.
    Denied,
    /// Withdrawn by the employee or an administrator.
    Cancelled,
}

impl LeaveStatus {
    /// Returns true if the status has reached a final decision.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Denied => write!(f, "denied"),
            LeaveStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A single day of leave for one employee.
///
/// # Example
///
/// ```
/// use coverage_engine::models::{LeaveInterval, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let mut leave = LeaveInterval::request(
///     "lv_001",
///     "emp_001",
///     NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
/// );
/// assert_eq!(leave.status, LeaveStatus::Pending);
///
/// leave.approve().unwrap();
/// assert!(leave.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// Unique identifier for the leave request.
    pub id: String,
    /// The employee taking leave.
    pub employee_id: String,
    /// The calendar date of the leave.
    pub date: NaiveDate,
    /// The current status of the request.
    pub status: LeaveStatus,
}

impl LeaveInterval {
    /// Creates a new pending leave request.
    pub fn request(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            date,
            status: LeaveStatus::Pending,
        }
    }

    /// Returns true if the leave counts against coverage.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Approves a pending request.
    pub fn approve(&mut self) -> EngineResult<()> {
        self.transition(LeaveStatus::Approved)
    }

    /// Denies a pending request.
    pub fn deny(&mut self) -> EngineResult<()> {
        self.transition(LeaveStatus::Denied)
    }

    /// Cancels a pending or approved request.
    pub fn cancel(&mut self) -> EngineResult<()> {
        self.transition(LeaveStatus::Cancelled)
    }

    /// Administrative correction. Sets any status regardless of the current one.
    pub fn correct(&mut self, status: LeaveStatus) {
        self.status = status;
    }

    fn transition(&mut self, to: LeaveStatus) -> EngineResult<()> {
        let allowed = matches!(
            (self.status, to),
            (LeaveStatus::Pending, LeaveStatus::Approved)
                | (LeaveStatus::Pending, LeaveStatus::Denied)
                | (LeaveStatus::Pending, LeaveStatus::Cancelled)
                | (LeaveStatus::Approved, LeaveStatus::Cancelled)
        );

        if !allowed {
            return Err(EngineError::InvalidLeaveTransition {
                leave_id: self.id.clone(),
                from: self.status,
                to,
            });
        }

        self.status = to;
        Ok(())
    }
}
