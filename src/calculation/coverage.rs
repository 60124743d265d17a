//! Coverage gap evaluation.
//!
//! This module provides the [`CoverageEvaluator`], which produces one
//! [`CoverageRecord`] for every (date, crew) pair in a requested range.
//! Cells with no shifts and no leave are still reported, with zero counts
//! and 0% coverage, so that unscheduled days show up as gaps instead of
//! disappearing from the report.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::CoverageRecord;

use super::calendar::CalendarIndex;
use super::leave_ledger::LeaveLedger;
use super::providers::{LeaveProvider, RosterProvider, ScheduleProvider};
use super::roster::CrewRoster;

/// Computes the coverage percentage for a crew/date cell.
///
/// Returns zero when nothing is scheduled. Otherwise returns the share of
/// scheduled shifts not lost to leave, in percent, rounded to 2 decimal
/// places and never below zero.
///
/// # Examples
///
/// ```
/// use coverage_engine::calculation::coverage_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(coverage_percentage(18, 2), Decimal::new(8889, 2));
/// assert_eq!(coverage_percentage(0, 0), Decimal::ZERO);
/// assert_eq!(coverage_percentage(10, 0), Decimal::ONE_HUNDRED);
/// ```
pub fn coverage_percentage(scheduled: u32, on_leave: u32) -> Decimal {
    if scheduled == 0 {
        return Decimal::ZERO;
    }

    let available = Decimal::from(scheduled.saturating_sub(on_leave));
    (available * Decimal::ONE_HUNDRED / Decimal::from(scheduled)).round_dp(2)
}

/// Evaluates staffing coverage over a roster, leave ledger and schedule.
///
/// The evaluator holds no mutable state; calling
/// [`compute_coverage_gaps`](CoverageEvaluator::compute_coverage_gaps)
/// twice with the same arguments yields the same records.
pub struct CoverageEvaluator<'a> {
    config: &'a EngineConfig,
    roster: CrewRoster,
    ledger: LeaveLedger,
    schedule: &'a dyn ScheduleProvider,
}

impl<'a> CoverageEvaluator<'a> {
    /// Creates an evaluator from explicit snapshots and a schedule source.
    pub fn new(
        config: &'a EngineConfig,
        roster: CrewRoster,
        ledger: LeaveLedger,
        schedule: &'a dyn ScheduleProvider,
    ) -> Self {
        Self {
            config,
            roster,
            ledger,
            schedule,
        }
    }

    /// Creates an evaluator that snapshots roster and leave data from one
    /// provider and reads shifts from it.
    pub fn from_provider<P>(config: &'a EngineConfig, provider: &'a P) -> Self
    where
        P: RosterProvider + LeaveProvider + ScheduleProvider,
    {
        Self::new(
            config,
            CrewRoster::snapshot(provider, config),
            LeaveLedger::snapshot(provider),
            provider,
        )
    }

    /// Computes coverage records for every date in `start..=end` and every
    /// evaluated crew.
    ///
    /// With `crew` set only that crew is evaluated; otherwise every
    /// configured crew is, in configuration order. Records are ordered by
    /// date, then crew.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` when `end` is before `start`
    /// - `UnknownCrew` when `crew` is not a configured crew
    /// - `MissingConfiguration` when an evaluated crew has no staffing target
    pub fn compute_coverage_gaps(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        crew: Option<&str>,
    ) -> EngineResult<Vec<CoverageRecord>> {
        let calendar = CalendarIndex::new(start, end)?;

        let crews: Vec<&str> = match crew {
            Some(label) => vec![self.config.crew(label)?.label.as_str()],
            None => self
                .config
                .crews()
                .iter()
                .map(|c| c.label.as_str())
                .collect(),
        };

        let targets = crews
            .into_iter()
            .map(|label| Ok((label, self.config.required_staffing(label)?)))
            .collect::<EngineResult<Vec<(&str, u32)>>>()?;

        let shifts = self.schedule.shifts_between(calendar.start(), calendar.end());
        let mut scheduled: HashMap<(NaiveDate, &str), u32> = HashMap::new();
        for shift in shifts.iter().filter(|s| calendar.contains(s.date)) {
            *scheduled
                .entry((shift.date, shift.crew.as_str()))
                .or_default() += 1;
        }

        let mut on_leave: HashMap<(NaiveDate, &str), u32> = HashMap::new();
        for &(label, _) in &targets {
            // A crew missing from the roster snapshot counts nobody on leave.
            let members = self.roster.member_ids(label).unwrap_or_default();
            for fact in self.ledger.approved_in_range(&members, &calendar) {
                *on_leave.entry((fact.date, label)).or_default() += 1;
            }
        }

        let mut records = Vec::with_capacity(calendar.day_count() * targets.len());
        for date in calendar.iter() {
            for &(label, required) in &targets {
                let scheduled = scheduled.get(&(date, label)).copied().unwrap_or(0);
                let on_leave = on_leave.get(&(date, label)).copied().unwrap_or(0);

                records.push(CoverageRecord {
                    date,
                    crew: label.to_string(),
                    required,
                    scheduled,
                    on_leave,
                    coverage_percentage: coverage_percentage(scheduled, on_leave),
                });
            }
        }

        debug!(
            start = %start,
            end = %end,
            crews = targets.len(),
            records = records.len(),
            gaps = records.iter().filter(|r| r.is_gap()).count(),
            "Coverage evaluated"
        );

        Ok(records)
    }
}
