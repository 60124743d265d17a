//! Overtime summary model.
//!
//! An [`OvertimeSummary`] rolls up one employee's hours over the trailing
//! 13-week overtime window. Like coverage records it is derived per query
//! and never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of an employee's recent workload compared with the earlier
/// part of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Recent weeks average more than the threshold above earlier weeks.
    Increasing,
    /// Recent weeks average more than the threshold below earlier weeks.
    Decreasing,
    /// Recent and earlier weeks are within the threshold of each other.
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Increasing => write!(f, "increasing"),
            Trend::Decreasing => write!(f, "decreasing"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Per-employee hours over the overtime window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSummary {
    /// The employee summarised.
    pub employee_id: String,
    /// Hours worked per week, oldest week first.
    pub weekly_hours: Vec<Decimal>,
    /// Sum of all hours in the window.
    pub total_hours_13_weeks: Decimal,
    /// Total hours divided by the number of weeks (2 dp).
    pub average_weekly_hours: Decimal,
    /// Average of the most recent weeks (2 dp).
    pub recent_average: Decimal,
    /// Average of the earlier weeks (2 dp).
    pub prior_average: Decimal,
    /// Hours above the standard weekly threshold, summed across weeks.
    pub overtime_hours: Decimal,
    /// Shifts flagged as weekly overtime (ISO weeks) within the window.
    pub overtime_shifts: u32,
    /// Workload trend classification.
    pub trend: Trend,
    /// Whether the window total exceeds the high-overtime ceiling.
    pub high_overtime: bool,
}
