//! Weekly overtime flagging.
//!
//! Overtime is an aggregate weekly condition, not a property of a single
//! shift: a shift is overtime once the employee's running total for the
//! week passes the standard weekly hours. Weeks are consecutive 7-day
//! periods counted from an anchor date, so the same anchor always yields
//! the same week boundaries as the overtime window's buckets.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::ScheduledShift;

/// Default standard weekly hours before overtime applies.
pub const DEFAULT_STANDARD_WEEKLY_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Returns the index of the 7-day week containing `date`, counting from the
/// week that starts on `anchor`. Dates before the anchor give negative
/// indices.
///
/// # Example
///
/// ```
/// use coverage_engine::calculation::week_index;
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert_eq!(week_index(anchor, anchor), 0);
/// assert_eq!(week_index(anchor, NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()), 0);
/// assert_eq!(week_index(anchor, NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()), 1);
/// assert_eq!(week_index(anchor, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()), -1);
/// ```
pub fn week_index(anchor: NaiveDate, date: NaiveDate) -> i64 {
    (date - anchor).num_days().div_euclid(7)
}

/// Returns copies of the shifts with `is_overtime` set from weekly totals.
///
/// Shifts are walked in date order per employee and week, where weeks are
/// aligned to `week_anchor` (pass a Monday for ISO weeks). The shift whose
/// hours take the running total above `standard_weekly_hours`, and every
/// later shift that week, is flagged. Any flag already present on the
/// input is recomputed. The output keeps the input order.
///
/// # Example
///
/// ```
/// use coverage_engine::calculation::{flag_weekly_overtime, DEFAULT_STANDARD_WEEKLY_HOURS};
/// use coverage_engine::models::ScheduledShift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Four 12-hour shifts Monday to Thursday: 48 hours in one week.
/// let shifts: Vec<ScheduledShift> = (6..=9)
///     .map(|day| ScheduledShift {
///         id: format!("shift_{}", day),
///         employee_id: "emp_001".to_string(),
///         date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
///         crew: "A".to_string(),
///         hours: Decimal::new(12, 0),
///         is_overtime: false,
///     })
///     .collect();
///
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let flagged = flag_weekly_overtime(&shifts, DEFAULT_STANDARD_WEEKLY_HOURS, monday);
/// let flags: Vec<bool> = flagged.iter().map(|s| s.is_overtime).collect();
/// assert_eq!(flags, vec![false, false, false, true]);
/// ```
pub fn flag_weekly_overtime(
    shifts: &[ScheduledShift],
    standard_weekly_hours: Decimal,
    week_anchor: NaiveDate,
) -> Vec<ScheduledShift> {
    let mut order: Vec<usize> = (0..shifts.len()).collect();
    order.sort_by_key(|&i| shifts[i].date);

    let mut running: HashMap<(&str, i64), Decimal> = HashMap::new();
    let mut flagged = shifts.to_vec();

    for i in order {
        let shift = &shifts[i];
        let week = week_index(week_anchor, shift.date);
        let total = running
            .entry((shift.employee_id.as_str(), week))
            .or_insert(Decimal::ZERO);
        *total += shift.hours;
        flagged[i].is_overtime = *total > standard_weekly_hours;
    }

    flagged
}
