//! Overtime equity accumulation.
//!
//! This module rolls each employee's worked hours up over the trailing
//! overtime window (13 consecutive 7-day weeks ending on a reference date)
//! and classifies whether their workload is trending up or down.
//!
//! Weeks in the window are counted back from the reference date, so the
//! last week always ends on it. An employee with no shifts in a week simply
//! worked zero hours that week.

use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::OvertimePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{OvertimeSummary, Trend};

use super::providers::ScheduleProvider;
use super::calendar::CalendarIndex;
use super::weekly_overtime::{flag_weekly_overtime, week_index};

/// Number of weeks in the overtime window.
pub const OVERTIME_WINDOW_WEEKS: usize = 13;

/// Number of most recent weeks compared against the rest of the window.
pub const RECENT_WEEKS: usize = 4;

/// Returns the first date of the window ending on `reference_date`.
///
/// Fails with `InvalidRange` if the window would start before the earliest
/// representable date.
///
/// # Example
///
/// ```
/// use coverage_engine::calculation::window_start;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
/// assert_eq!(
///     window_start(reference).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
/// );
/// ```
pub fn window_start(reference_date: NaiveDate) -> EngineResult<NaiveDate> {
    let span = (OVERTIME_WINDOW_WEEKS * 7 - 1) as u64;
    reference_date
        .checked_sub_days(Days::new(span))
        .ok_or(EngineError::InvalidRange {
            start: NaiveDate::MIN,
            end: reference_date,
        })
}

/// Classifies a workload trend.
///
/// Compares the recent weekly average against the prior weekly average.
/// A percentage change above `threshold_percent` is increasing, below its
/// negation is decreasing, anything else is stable. With no prior hours,
/// any recent hours count as increasing.
///
/// # Examples
///
/// ```
/// use coverage_engine::calculation::classify_trend;
/// use coverage_engine::models::Trend;
/// use rust_decimal::Decimal;
///
/// let ten = Decimal::new(10, 0);
/// assert_eq!(classify_trend(Decimal::new(48, 0), Decimal::new(40, 0), ten), Trend::Increasing);
/// assert_eq!(classify_trend(Decimal::new(42, 0), Decimal::new(40, 0), ten), Trend::Stable);
/// assert_eq!(classify_trend(Decimal::new(30, 0), Decimal::new(40, 0), ten), Trend::Decreasing);
/// assert_eq!(classify_trend(Decimal::ZERO, Decimal::ZERO, ten), Trend::Stable);
/// ```
pub fn classify_trend(
    recent_average: Decimal,
    prior_average: Decimal,
    threshold_percent: Decimal,
) -> Trend {
    if prior_average.is_zero() {
        return if recent_average > Decimal::ZERO {
            Trend::Increasing
        } else {
            Trend::Stable
        };
    }

    let delta = recent_average - prior_average;
    let Some(delta_percent) = delta
        .checked_div(prior_average)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    else {
        // Too large to represent, so far past any threshold.
        return if delta > Decimal::ZERO {
            Trend::Increasing
        } else {
            Trend::Decreasing
        };
    };
    if delta_percent > threshold_percent {
        Trend::Increasing
    } else if delta_percent < -threshold_percent {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// Rolls up per-employee hours over the overtime window.
pub struct OvertimeAccumulator<'a> {
    policy: &'a OvertimePolicy,
    schedule: &'a dyn ScheduleProvider,
}

impl<'a> OvertimeAccumulator<'a> {
    /// Creates an accumulator reading shifts from `schedule`.
    pub fn new(policy: &'a OvertimePolicy, schedule: &'a dyn ScheduleProvider) -> Self {
        Self { policy, schedule }
    }

    /// Computes one summary per distinct employee id, in first-seen order.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if the window cannot be represented
    /// - `InvalidShift` if a shift in the window has hours outside
    ///   `0..=ScheduledShift::MAX_HOURS`
    pub fn compute_overtime_summary(
        &self,
        employee_ids: &[String],
        reference_date: NaiveDate,
    ) -> EngineResult<Vec<OvertimeSummary>> {
        let start = window_start(reference_date)?;
        let window = CalendarIndex::new(start, reference_date)?;

        let mut seen = HashSet::new();
        let employees: Vec<&str> = employee_ids
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect();

        // Providers may return more than asked for; only the window counts.
        let shifts: Vec<_> = self
            .schedule
            .shifts_between(start, reference_date)
            .into_iter()
            .filter(|s| window.contains(s.date) && seen.contains(s.employee_id.as_str()))
            .collect();
        for shift in &shifts {
            shift.validate()?;
        }

        let mut weekly: HashMap<&str, [Decimal; OVERTIME_WINDOW_WEEKS]> = HashMap::new();
        for shift in &shifts {
            let week = week_index(start, shift.date) as usize;
            weekly
                .entry(shift.employee_id.as_str())
                .or_insert([Decimal::ZERO; OVERTIME_WINDOW_WEEKS])[week] += shift.hours;
        }

        let flagged = flag_weekly_overtime(&shifts, self.policy.standard_weekly_hours, start);
        let mut overtime_shifts: HashMap<&str, u32> = HashMap::new();
        for shift in flagged.iter().filter(|s| s.is_overtime) {
            *overtime_shifts.entry(shift.employee_id.as_str()).or_default() += 1;
        }

        let summaries: Vec<OvertimeSummary> = employees
            .into_iter()
            .map(|id| {
                let weeks = weekly
                    .get(id)
                    .copied()
                    .unwrap_or([Decimal::ZERO; OVERTIME_WINDOW_WEEKS]);
                self.summarize(id, &weeks, overtime_shifts.get(id).copied().unwrap_or(0))
            })
            .collect();

        debug!(
            reference_date = %reference_date,
            window_start = %start,
            employees = summaries.len(),
            high_overtime = summaries.iter().filter(|s| s.high_overtime).count(),
            "Overtime summarised"
        );

        Ok(summaries)
    }

    fn summarize(
        &self,
        employee_id: &str,
        weeks: &[Decimal; OVERTIME_WINDOW_WEEKS],
        overtime_shifts: u32,
    ) -> OvertimeSummary {
        let split = OVERTIME_WINDOW_WEEKS - RECENT_WEEKS;
        let total: Decimal = weeks.iter().sum();
        let prior: Decimal = weeks[..split].iter().sum();
        let recent: Decimal = weeks[split..].iter().sum();

        let prior_average = prior / Decimal::from(split);
        let recent_average = recent / Decimal::from(RECENT_WEEKS);

        let overtime_hours: Decimal = weeks
            .iter()
            .map(|w| (*w - self.policy.standard_weekly_hours).max(Decimal::ZERO))
            .sum();

        OvertimeSummary {
            employee_id: employee_id.to_string(),
            weekly_hours: weeks.to_vec(),
            total_hours_13_weeks: total,
            average_weekly_hours: (total / Decimal::from(OVERTIME_WINDOW_WEEKS)).round_dp(2),
            recent_average: recent_average.round_dp(2),
            prior_average: prior_average.round_dp(2),
            overtime_hours,
            overtime_shifts,
            trend: classify_trend(
                recent_average,
                prior_average,
                self.policy.trend_threshold_percent,
            ),
            high_overtime: total > self.policy.high_overtime_ceiling,
        }
    }
}
