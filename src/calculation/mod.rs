//! Calculation logic for the Coverage Engine.
//!
//! This module contains the calendar range enumeration, roster and leave
//! snapshots, the data provider capabilities, per-day crew coverage
//! evaluation, weekly overtime flagging and the trailing-window overtime
//! accumulator.

mod calendar;
mod coverage;
mod leave_ledger;
mod overtime;
mod providers;
mod roster;
mod weekly_overtime;

pub use calendar::CalendarIndex;
pub use coverage::{CoverageEvaluator, coverage_percentage};
pub use leave_ledger::{LeaveFact, LeaveLedger};
pub use overtime::{
    OVERTIME_WINDOW_WEEKS, OvertimeAccumulator, RECENT_WEEKS, classify_trend, window_start,
};
pub use providers::{LeaveProvider, LedgerSnapshot, RosterProvider, ScheduleProvider};
pub use roster::{CrewRoster, RosterEntry};
pub use weekly_overtime::{DEFAULT_STANDARD_WEEKLY_HOURS, flag_weekly_overtime, week_index};
