//! Daily aggregation of work sessions.
//!
//! This module converts an employee's raw sessions into worked hours per
//! calendar date. Sessions that end at or before their start time are treated
//! as crossing midnight; all of their hours stay on the session's own date.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DateRange, Policy, WorkSession};

use super::time_normalizer::parse_time;

/// Worked hours accumulated for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWork {
    /// Sum of worked hours over all sessions on this date, unrounded.
    pub worked_hours: Decimal,
    /// Earliest clock-in on this date.
    pub first_start: NaiveTime,
    /// Latest clock-out on this date.
    pub last_end: NaiveTime,
}

/// Why a session was left out of the aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The session's date lies outside the query range.
    OutOfRange,
    /// The start or end time could not be normalized.
    InvalidTime,
}

/// A session that did not contribute to the aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSession {
    /// Position of the session in the input slice.
    pub index: usize,
    /// The session's date.
    pub date: NaiveDate,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// The output of [`aggregate_daily`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyAggregation {
    /// Worked hours per date, only for dates that had at least one session.
    pub by_date: BTreeMap<NaiveDate, DailyWork>,
    /// Sessions that were dropped.
    pub skipped: Vec<SkippedSession>,
}

/// Computes the worked hours of a single session.
///
/// The end instant is moved to the following day when it is not after the
/// start. Lunch minutes are deducted only when `had_lunch` is set, using the
/// session override or `default_lunch_minutes`; the result never goes below
/// zero.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::session_worked_hours;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(2, 0, 0).unwrap();
///
/// assert_eq!(session_worked_hours(date, start, end, 0), Decimal::new(4, 0));
/// ```
pub fn session_worked_hours(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    lunch_minutes: u32,
) -> Decimal {
    const MINUTES_PER_DAY: i64 = 24 * 60;

    // Rolling the end over in minutes keeps sessions on the last
    // representable date from overflowing.
    let same_day_minutes = (date.and_time(end) - date.and_time(start)).num_minutes();
    let elapsed_minutes = if same_day_minutes <= 0 {
        same_day_minutes + MINUTES_PER_DAY
    } else {
        same_day_minutes
    };
    let worked_minutes = (elapsed_minutes - i64::from(lunch_minutes)).max(0);

    Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)
}

/// Aggregates sessions into worked hours per date within `range`.
///
/// Sessions dated outside the range, or with a start or end time that fails
/// normalization, are skipped and reported in
/// [`DailyAggregation::skipped`]. Multiple sessions on the same date add up.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::aggregate_daily;
/// use overtime_engine::models::{DateRange, Policy, WorkSession};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let range = DateRange::new(date, date).unwrap();
/// let sessions = vec![WorkSession {
///     employee_id: "emp_001".to_string(),
///     date,
///     start_time: "08:00".to_string(),
///     end_time: "17:00".to_string(),
///     had_lunch: true,
///     lunch_minutes: None,
/// }];
///
/// let aggregation = aggregate_daily(&sessions, &Policy::default(), &range);
/// assert_eq!(aggregation.by_date[&date].worked_hours, Decimal::new(8, 0));
/// ```
pub fn aggregate_daily(
    sessions: &[WorkSession],
    policy: &Policy,
    range: &DateRange,
) -> DailyAggregation {
    sessions
        .iter()
        .enumerate()
        .fold(DailyAggregation::default(), |mut acc, (index, session)| {
            if let Err(reason) = accumulate_session(&mut acc.by_date, session, policy, range) {
                debug!(
                    index,
                    employee_id = %session.employee_id,
                    date = %session.date,
                    start_time = %session.start_time,
                    end_time = %session.end_time,
                    ?reason,
                    "Skipping work session"
                );
                acc.skipped.push(SkippedSession {
                    index,
                    date: session.date,
                    reason,
                });
            }
            acc
        })
}

fn accumulate_session(
    by_date: &mut BTreeMap<NaiveDate, DailyWork>,
    session: &WorkSession,
    policy: &Policy,
    range: &DateRange,
) -> Result<(), SkipReason> {
    if !range.contains(session.date) {
        return Err(SkipReason::OutOfRange);
    }

    let start = parse_time(&session.start_time).map_err(|_| SkipReason::InvalidTime)?;
    let end = parse_time(&session.end_time).map_err(|_| SkipReason::InvalidTime)?;

    let lunch_minutes = session.lunch_deduction_minutes(policy.default_lunch_minutes);
    let worked_hours = session_worked_hours(session.date, start, end, lunch_minutes);

    by_date
        .entry(session.date)
        .and_modify(|day| {
            day.worked_hours += worked_hours;
            day.first_start = day.first_start.min(start);
            day.last_end = day.last_end.max(end);
        })
        .or_insert(DailyWork {
            worked_hours,
            first_start: start,
            last_end: end,
        });

    Ok(())
}
