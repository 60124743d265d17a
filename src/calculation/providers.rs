//! Data source capabilities consumed by the evaluators.
//!
//! Evaluators never reach for global state. Callers hand them a provider
//! for each kind of ledger data, which makes every evaluation deterministic
//! and lets independent evaluations run side by side.

use chrono::NaiveDate;

use crate::models::{Employee, LeaveInterval, ScheduledShift};

/// Supplies the employee roster.
pub trait RosterProvider {
    /// Returns every known employee, active or not.
    fn employees(&self) -> Vec<Employee>;
}

/// Supplies leave intervals in any status.
pub trait LeaveProvider {
    /// Returns every known leave interval.
    fn leave_intervals(&self) -> Vec<LeaveInterval>;
}

/// Supplies scheduled shifts.
pub trait ScheduleProvider {
    /// Returns shifts dated between `start` and `end`, both inclusive.
    fn shifts_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<ScheduledShift>;
}

/// An in-memory point-in-time copy of the roster, leave and schedule
/// ledgers. Implements all three provider traits.
///
/// # Example
///
/// ```
/// use coverage_engine::calculation::{LedgerSnapshot, RosterProvider};
/// use coverage_engine::models::Employee;
///
/// let snapshot = LedgerSnapshot::new(
///     vec![Employee::new("emp_001", "A", "operator")],
///     vec![],
///     vec![],
/// );
/// assert_eq!(snapshot.employees().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    employees: Vec<Employee>,
    leaves: Vec<LeaveInterval>,
    shifts: Vec<ScheduledShift>,
}

impl LedgerSnapshot {
    /// Creates a snapshot from ledger rows.
    pub fn new(
        employees: Vec<Employee>,
        leaves: Vec<LeaveInterval>,
        shifts: Vec<ScheduledShift>,
    ) -> Self {
        Self {
            employees,
            leaves,
            shifts,
        }
    }

    /// Returns all shifts in the snapshot.
    pub fn shifts(&self) -> &[ScheduledShift] {
        &self.shifts
    }
}

impl RosterProvider for LedgerSnapshot {
    fn employees(&self) -> Vec<Employee> {
        self.employees.clone()
    }
}

impl LeaveProvider for LedgerSnapshot {
    fn leave_intervals(&self) -> Vec<LeaveInterval> {
        self.leaves.clone()
    }
}

impl ScheduleProvider for LedgerSnapshot {
    fn shifts_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<ScheduledShift> {
        self.shifts
            .iter()
            .filter(|s| s.date >= start && s.date <= end)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_shift(id: &str, day: u32) -> ScheduledShift {
        ScheduledShift {
            id: id.to_string(),
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            crew: "A".to_string(),
            hours: Decimal::new(12, 0),
            is_overtime: false,
        }
    }

    #[test]
    fn test_shifts_between_is_inclusive() {
        let snapshot = LedgerSnapshot::new(
            vec![],
            vec![],
            vec![
                make_shift("s1", 1),
                make_shift("s2", 2),
                make_shift("s3", 3),
                make_shift("s4", 4),
            ],
        );

        let shifts = snapshot.shifts_between(
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
        );
        let ids: Vec<_> = shifts.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s3"]);
    }

    #[test]
    fn test_empty_snapshot_provides_nothing() {
        let snapshot = LedgerSnapshot::default();
        assert!(snapshot.employees().is_empty());
        assert!(snapshot.leave_intervals().is_empty());
        assert!(snapshot.shifts().is_empty());
    }
}
