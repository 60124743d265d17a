//! Core data models for the Coverage Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod coverage_record;
mod employee;
mod leave;
mod overtime_summary;
mod shift;

pub use coverage_record::CoverageRecord;
pub use employee::Employee;
pub use leave::{LeaveInterval, LeaveStatus};
pub use overtime_summary::{OvertimeSummary, Trend};
pub use shift::ScheduledShift;
