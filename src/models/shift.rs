//! Scheduled shift model.
//!
//! This module defines the ScheduledShift struct for representing a crew
//! member's assignment on a calendar date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a shift scheduled (and worked) by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledShift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The crew the shift belongs to.
    pub crew: String,
    /// Hours worked on the shift.
    pub hours: Decimal,
    /// Whether the shift falls in weekly overtime.
    #[serde(default)]
    pub is_overtime: bool,
}

impl ScheduledShift {
    /// Most hours a single shift may record: one calendar day.
    pub const MAX_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

    /// Checks that the shift's hours lie within `0..=MAX_HOURS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_engine::models::ScheduledShift;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ScheduledShift {
    ///     id: "shift_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
    ///     crew: "A".to_string(),
    ///     hours: Decimal::new(-1, 0),
    ///     is_overtime: false,
    /// };
    /// assert!(shift.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.hours < Decimal::ZERO {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: format!("hours must not be negative, got {}", self.hours),
            });
        }
        if self.hours > Self::MAX_HOURS {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: format!(
                    "hours must not exceed {}, got {}",
                    Self::MAX_HOURS,
                    self.hours
                ),
            });
        }
        Ok(())
    }
}
