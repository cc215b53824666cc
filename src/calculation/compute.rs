//! The engine entry point.
//!
//! [`compute`] chains the pipeline stages for one employee's sessions:
//! daily aggregation, calendar materialization, weekly evaluation, totals and
//! formatting. It is pure and synchronous; computations for different
//! employees share nothing and may run in parallel.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{ComputationResult, DateRange, Policy, WorkSession};

use super::calendar::materialize_calendar;
use super::daily_aggregation::aggregate_daily;
use super::totals::{day_report, range_totals, week_report};
use super::weekly_policy::evaluate_weeks;

/// Computes the overtime/shortfall report for one employee.
///
/// Sessions outside `[range_start, range_end]` or with malformed times are
/// skipped and counted in [`ComputationResult::skipped_sessions`]. Negative
/// policy values fall back to their defaults.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRange`] when `range_end`
/// precedes `range_start`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::compute;
/// use overtime_engine::models::{Policy, WorkSession};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// let sessions: Vec<WorkSession> = monday
///     .iter_days()
///     .take(7)
///     .map(|date| WorkSession {
///         employee_id: "emp_001".to_string(),
///         date,
///         start_time: "08:00".to_string(),
///         end_time: "17:00".to_string(),
///         had_lunch: true,
///         lunch_minutes: None,
///     })
///     .collect();
///
/// let result = compute(&sessions, &Policy::default(), monday, sunday).unwrap();
/// assert_eq!(result.days.len(), 7);
/// assert_eq!(result.weeks[0].record.extra_hours, Decimal::new(8, 0));
/// assert_eq!(result.totals.net_display, "08:00");
/// ```
pub fn compute(
    sessions: &[WorkSession],
    policy: &Policy,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> EngineResult<ComputationResult> {
    let range = DateRange::new(range_start, range_end)?;
    let policy = policy.clone().sanitized();

    let aggregation = aggregate_daily(sessions, &policy, &range);
    let days = materialize_calendar(&aggregation, &range, policy.daily_base_hours);
    let weeks = evaluate_weeks(&days, &range, &policy);
    let totals = range_totals(&days, &weeks);

    debug!(
        range_start = %range_start,
        range_end = %range_end,
        sessions = sessions.len(),
        skipped_sessions = aggregation.skipped.len(),
        weeks = weeks.len(),
        net_hours = %totals.net_hours,
        "Computed overtime report"
    );

    Ok(ComputationResult {
        range_start,
        range_end,
        policy,
        days: days.into_iter().map(day_report).collect(),
        weeks: weeks.into_iter().map(week_report).collect(),
        totals,
        skipped_sessions: aggregation.skipped.len(),
    })
}
