//! Calendar range enumeration.
//!
//! This module provides [`CalendarIndex`], the inclusive date range every
//! coverage evaluation walks.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// An inclusive, validated range of calendar dates.
///
/// Iteration is lazy and restartable: every call to [`CalendarIndex::iter`]
/// yields the full range again in ascending order.
///
/// # Example
///
/// ```
/// use coverage_engine::calculation::CalendarIndex;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
/// let calendar = CalendarIndex::new(start, end).unwrap();
///
/// assert_eq!(calendar.day_count(), 3);
/// assert_eq!(calendar.iter().count(), 3);
/// assert_eq!(calendar.iter().last(), Some(end));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarIndex {
    start: NaiveDate,
    end: NaiveDate,
}

impl CalendarIndex {
    /// Creates a range from `start` to `end`, both inclusive.
    ///
    /// Fails with `InvalidRange` when `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The first date of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last date of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, never zero.
    pub fn day_count(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Returns true if the date falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates the dates of the range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.start.iter_days().take(self.day_count())
    }
}
