//! HTTP API module for the Coverage Engine.
//!
//! This module provides the REST API endpoints for coverage gap and
//! overtime summary reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CoverageRequest, EmployeeRequest, LeaveRequest, OvertimeRequest, ShiftRequest};
pub use response::{ApiError, CoverageReport, CrewListing, OvertimeReport};
pub use state::AppState;
