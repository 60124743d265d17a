//! Coverage record model.
//!
//! A [`CoverageRecord`] is a derived view over the roster, leave ledger and
//! schedule for a single crew on a single date. It is recomputed on demand
//! and never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Staffing figures for one crew on one date.
///
/// # Example
///
/// ```
/// use coverage_engine::models::CoverageRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = CoverageRecord {
///     date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
///     crew: "A".to_string(),
///     required: 18,
///     scheduled: 18,
///     on_leave: 2,
///     coverage_percentage: Decimal::new(8889, 2),
/// };
/// assert_eq!(record.available(), 16);
/// assert_eq!(record.shortfall(), 2);
/// assert!(record.is_gap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRecord {
    /// The date the record covers.
    pub date: NaiveDate,
    /// The crew the record covers.
    pub crew: String,
    /// The configured staffing target for the crew.
    pub required: u32,
    /// Number of shifts scheduled for the crew on the date.
    pub scheduled: u32,
    /// Number of crew members on approved leave on the date.
    pub on_leave: u32,
    /// Share of scheduled shifts not lost to leave, in percent (2 dp).
    pub coverage_percentage: Decimal,
}

impl CoverageRecord {
    /// Headcount actually available: scheduled minus on leave, floored at zero.
    pub fn available(&self) -> u32 {
        self.scheduled.saturating_sub(self.on_leave)
    }

    /// How many people short of the staffing target the crew is.
    pub fn shortfall(&self) -> u32 {
        self.required.saturating_sub(self.available())
    }

    /// Returns true if available staffing falls below the target.
    pub fn is_gap(&self) -> bool {
        self.shortfall() > 0
    }
}
