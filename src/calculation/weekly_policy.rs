//! Weekly grouping and policy evaluation.
//!
//! Days are grouped into Monday-aligned weeks independent of the weekday the
//! query range starts on. Each week is clipped to the range:
//!
//! - A **complete** week (the range covers Monday through Sunday) is scored
//!   against the weekly target: `extra = max(0, worked - target)` and
//!   `owed = max(0, target - worked)`.
//! - A **partial** week (only the first and/or last week of a range) is scored
//!   day by day against the daily base, optionally refined by the
//!   [`PartialWeekRules`] variants.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::{DateRange, DayRecord, PartialWeekRules, Policy, WeekRecord};

/// Returns the Monday of the week containing `date`.
///
/// With Sunday numbered 0, a date on weekday `w` lies `(w + 6) mod 7` days
/// after its Monday, so Sunday belongs to the week that started six days
/// earlier. Weeks that start before [`NaiveDate::MIN`] are keyed by
/// `NaiveDate::MIN`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::week_key;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(week_key(sunday), monday);
/// assert_eq!(week_key(monday), monday);
/// ```
pub fn week_key(date: NaiveDate) -> NaiveDate {
    let offset = (date.weekday().num_days_from_sunday() + 6) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// The days of one Monday-aligned week that fall inside the query range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGroup<'a> {
    /// Monday of the canonical week.
    pub canonical_start: NaiveDate,
    /// First date of the clipped window.
    pub week_start: NaiveDate,
    /// Last date of the clipped window.
    pub week_end: NaiveDate,
    /// Whether all seven days of the canonical week lie in the range.
    pub is_complete: bool,
    /// The week's days, ascending.
    pub days: &'a [DayRecord],
}

/// Partitions an ascending, gap-free day sequence into clipped weeks.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{DailyAggregation, group_weeks, materialize_calendar};
/// use overtime_engine::models::DateRange;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Wednesday 2026-01-14 through Sunday 2026-01-25
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(),
/// ).unwrap();
/// let days = materialize_calendar(&DailyAggregation::default(), &range, Decimal::new(8, 0));
///
/// let weeks = group_weeks(&days, &range);
/// assert_eq!(weeks.len(), 2);
/// assert_eq!(weeks[0].week_start, range.start());
/// assert!(!weeks[0].is_complete);
/// assert!(weeks[1].is_complete);
/// ```
pub fn group_weeks<'a>(days: &'a [DayRecord], range: &DateRange) -> Vec<WeekGroup<'a>> {
    days.chunk_by(|a, b| week_key(a.date) == week_key(b.date))
        .filter_map(|chunk| {
            let first = chunk.first()?;
            let last = chunk.last()?;
            let canonical_start = week_key(first.date);
            let canonical_end = canonical_start
                .checked_add_days(Days::new(6))
                .unwrap_or(NaiveDate::MAX);
            let (week_start, week_end) = range
                .clip(canonical_start, canonical_end)
                .unwrap_or((first.date, last.date));

            Some(WeekGroup {
                canonical_start,
                week_start,
                week_end,
                // Every weekday present; weeks cut short by the calendar's
                // own limits stay partial.
                is_complete: chunk.len() == 7,
                days: chunk,
            })
        })
        .collect()
}

/// Scores one week under `policy`.
pub fn evaluate_week(group: &WeekGroup<'_>, policy: &Policy) -> WeekRecord {
    let worked_hours: Decimal = group.days.iter().map(|d| d.worked_hours).sum();
    let rest_days = group.days.iter().filter(|d| d.is_rest_day()).count() as u32;

    let (extra_hours, owed_hours) = if group.is_complete {
        (
            (worked_hours - policy.weekly_target_hours).max(Decimal::ZERO),
            (policy.weekly_target_hours - worked_hours).max(Decimal::ZERO),
        )
    } else {
        score_partial_week(group.days, rest_days, policy)
    };

    WeekRecord {
        week_start: group.week_start,
        week_end: group.week_end,
        canonical_start: group.canonical_start,
        is_complete: group.is_complete,
        day_count: group.days.len() as u32,
        rest_days,
        worked_hours,
        extra_hours,
        owed_hours,
        net_hours: extra_hours - owed_hours,
    }
}

fn score_partial_week(days: &[DayRecord], rest_days: u32, policy: &Policy) -> (Decimal, Decimal) {
    let rules = &policy.partial_week;

    let (extra, owed) = days
        .iter()
        .map(|day| score_partial_day(day, rest_days, rules, policy.daily_base_hours))
        .fold((Decimal::ZERO, Decimal::ZERO), |(extra, owed), (e, o)| {
            (extra + e, owed + o)
        });

    if rules.no_rest_day_bonus && rest_days == 0 {
        (extra + rules.bonus_hours, owed)
    } else {
        (extra, owed)
    }
}

fn score_partial_day(
    day: &DayRecord,
    rest_days: u32,
    rules: &PartialWeekRules,
    base: Decimal,
) -> (Decimal, Decimal) {
    let worked_sunday = day.date.weekday() == Weekday::Sun && !day.is_rest_day();

    // A worked Sunday is never itself a rest day, so any rest day is "another".
    if worked_sunday && rules.sunday_exempt_with_rest_day && rest_days > 0 {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    if worked_sunday && rules.sunday_bonus {
        return (rules.bonus_hours, Decimal::ZERO);
    }

    (
        (day.worked_hours - base).max(Decimal::ZERO),
        (base - day.worked_hours).max(Decimal::ZERO),
    )
}

/// Groups `days` into clipped weeks and scores each one, in date order.
///
/// An empty day sequence yields no weeks.
pub fn evaluate_weeks(days: &[DayRecord], range: &DateRange, policy: &Policy) -> Vec<WeekRecord> {
    group_weeks(days, range)
        .iter()
        .map(|group| evaluate_week(group, policy))
        .collect()
}
