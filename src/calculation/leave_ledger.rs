//! Approved leave lookup.
//!
//! The [`LeaveLedger`] is the only source of "on leave" facts for coverage
//! evaluation. Only approved intervals count, and the same employee on the
//! same date is one fact no matter how many requests produced it.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::models::LeaveInterval;

use super::calendar::CalendarIndex;
use super::providers::LeaveProvider;

/// One employee absent on approved leave on one date.
///
/// Ordered by date, then employee.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeaveFact {
    /// The date of the absence.
    pub date: NaiveDate,
    /// The absent employee.
    pub employee_id: String,
}

/// Snapshot of leave intervals in every status.
#[derive(Debug, Clone, Default)]
pub struct LeaveLedger {
    intervals: Vec<LeaveInterval>,
}

impl LeaveLedger {
    /// Copies every leave interval from the provider.
    pub fn snapshot<P: LeaveProvider + ?Sized>(provider: &P) -> Self {
        Self {
            intervals: provider.leave_intervals(),
        }
    }

    /// Builds a ledger directly from intervals.
    pub fn from_intervals(intervals: Vec<LeaveInterval>) -> Self {
        Self { intervals }
    }

    /// Returns approved leave facts for the given employees within the range.
    ///
    /// # Example
    ///
    /// ```
    /// use coverage_engine::calculation::{CalendarIndex, LeaveLedger};
    /// use coverage_engine::models::LeaveInterval;
    /// use chrono::NaiveDate;
    /// use std::collections::HashSet;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    /// let mut first = LeaveInterval::request("lv_001", "emp_001", date);
    /// first.approve().unwrap();
    /// let mut duplicate = LeaveInterval::request("lv_002", "emp_001", date);
    /// duplicate.approve().unwrap();
    ///
    /// let ledger = LeaveLedger::from_intervals(vec![first, duplicate]);
    /// let range = CalendarIndex::new(date, date).unwrap();
    /// let employees: HashSet<&str> = ["emp_001"].into_iter().collect();
    ///
    /// assert_eq!(ledger.approved_in_range(&employees, &range).len(), 1);
    /// ```
    pub fn approved_in_range(
        &self,
        employee_ids: &HashSet<&str>,
        range: &CalendarIndex,
    ) -> Vec<LeaveFact> {
        self.intervals
            .iter()
            .filter(|l| l.is_approved())
            .filter(|l| range.contains(l.date))
            .filter(|l| employee_ids.contains(l.employee_id.as_str()))
            .map(|l| LeaveFact {
                date: l.date,
                employee_id: l.employee_id.clone(),
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveStatus;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn leave(id: &str, employee: &str, day: u32, status: LeaveStatus) -> LeaveInterval {
        let mut interval = LeaveInterval::request(id, employee, date(day));
        interval.correct(status);
        interval
    }

    fn ids<'a>(list: &[&'a str]) -> HashSet<&'a str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_only_approved_leave_counts() {
        let ledger = LeaveLedger::from_intervals(vec![
            leave("l1", "emp_001", 2, LeaveStatus::Approved),
            leave("l2", "emp_002", 2, LeaveStatus::Pending),
            leave("l3", "emp_003", 2, LeaveStatus::Denied),
            leave("l4", "emp_004", 2, LeaveStatus::Cancelled),
        ]);
        let range = CalendarIndex::new(date(1), date(3)).unwrap();

        let facts = ledger.approved_in_range(
            &ids(&["emp_001", "emp_002", "emp_003", "emp_004"]),
            &range,
        );
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].employee_id, "emp_001");
    }

    #[test]
    fn test_duplicates_collapse_to_one_fact() {
        let ledger = LeaveLedger::from_intervals(vec![
            leave("l1", "emp_001", 2, LeaveStatus::Approved),
            leave("l2", "emp_001", 2, LeaveStatus::Approved),
            leave("l3", "emp_001", 3, LeaveStatus::Approved),
        ]);
        let range = CalendarIndex::new(date(1), date(3)).unwrap();

        let facts = ledger.approved_in_range(&ids(&["emp_001"]), &range);
        assert_eq!(facts.len(), 2);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let ledger = LeaveLedger::from_intervals(vec![
            leave("l1", "emp_001", 1, LeaveStatus::Approved),
            leave("l2", "emp_001", 3, LeaveStatus::Approved),
            leave("l3", "emp_001", 4, LeaveStatus::Approved),
        ]);
        let range = CalendarIndex::new(date(1), date(3)).unwrap();

        let facts = ledger.approved_in_range(&ids(&["emp_001"]), &range);
        let dates: Vec<_> = facts.iter().map(|f| f.date).collect();
        assert_eq!(dates, vec![date(1), date(3)]);
    }

    #[test]
    fn test_employees_outside_set_are_ignored() {
        let ledger = LeaveLedger::from_intervals(vec![
            leave("l1", "emp_001", 2, LeaveStatus::Approved),
            leave("l2", "emp_099", 2, LeaveStatus::Approved),
        ]);
        let range = CalendarIndex::new(date(2), date(2)).unwrap();

        let facts = ledger.approved_in_range(&ids(&["emp_001"]), &range);
        assert_eq!(facts.len(), 1);
    }

    #[test]
    fn test_facts_ordered_by_date_then_employee() {
        let ledger = LeaveLedger::from_intervals(vec![
            leave("l1", "emp_002", 3, LeaveStatus::Approved),
            leave("l2", "emp_002", 2, LeaveStatus::Approved),
            leave("l3", "emp_001", 2, LeaveStatus::Approved),
        ]);
        let range = CalendarIndex::new(date(1), date(3)).unwrap();

        let facts = ledger.approved_in_range(&ids(&["emp_001", "emp_002"]), &range);
        let keys: Vec<_> = facts
            .iter()
            .map(|f| (f.date, f.employee_id.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (date(2), "emp_001"),
                (date(2), "emp_002"),
                (date(3), "emp_002"),
            ]
        );
    }
}
