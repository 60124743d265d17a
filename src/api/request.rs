//! Request types for the Coverage Engine API.
//!
//! This module defines the JSON request structures for the
//! `/coverage-gaps` and `/overtime-summary` endpoints. Each request carries
//! the ledger rows it should be evaluated against.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, LeaveInterval, LeaveStatus, ScheduledShift};

/// Request body for the `/coverage-gaps` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageRequest {
    /// The first date to evaluate (inclusive).
    pub start_date: NaiveDate,
    /// The last date to evaluate (inclusive).
    pub end_date: NaiveDate,
    /// Restricts evaluation to a single crew when set.
    #[serde(default)]
    pub crew: Option<String>,
    /// Returns only records that fall short of the staffing target.
    #[serde(default)]
    pub gaps_only: bool,
    /// The employee roster.
    #[serde(default)]
    pub employees: Vec<EmployeeRequest>,
    /// Leave intervals in any status.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
    /// Scheduled shifts.
    #[serde(default)]
    pub shifts: Vec<ShiftRequest>,
}

/// Request body for the `/overtime-summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The employees to summarise.
    pub employee_ids: Vec<String>,
    /// The last date of the overtime window.
    pub reference_date: NaiveDate,
    /// Worked shifts.
    #[serde(default)]
    pub shifts: Vec<ShiftRequest>,
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The crew label the employee is assigned to.
    pub crew: String,
    /// The position the employee fills.
    pub position: String,
    /// Whether the employee is active.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Leave information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the leave request.
    pub id: String,
    /// The employee taking leave.
    pub employee_id: String,
    /// The date of the leave.
    pub date: NaiveDate,
    /// The status of the leave request.
    pub status: LeaveStatus,
}

/// Shift information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// The crew the shift belongs to.
    pub crew: String,
    /// Hours worked.
    pub hours: Decimal,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            crew: req.crew,
            position: req.position,
            active: req.active,
        }
    }
}

impl From<LeaveRequest> for LeaveInterval {
    fn from(req: LeaveRequest) -> Self {
        LeaveInterval {
            id: req.id,
            employee_id: req.employee_id,
            date: req.date,
            status: req.status,
        }
    }
}

impl From<ShiftRequest> for ScheduledShift {
    fn from(req: ShiftRequest) -> Self {
        ScheduledShift {
            id: req.id,
            employee_id: req.employee_id,
            date: req.date,
            crew: req.crew,
            hours: req.hours,
            is_overtime: false,
        }
    }
}
