//! Calendar materialization.
//!
//! Expands the query range into one [`DayRecord`] per date, filling dates
//! without sessions with zero worked hours. The ascending date order produced
//! here is relied on by the weekly grouping.

use rust_decimal::Decimal;

use crate::models::{DateRange, DayRecord};

use super::daily_aggregation::DailyAggregation;
use super::formatting::round_hours;

/// Builds the day-by-day calendar for `range`.
///
/// Worked hours come from the aggregation (zero when absent) and are rounded
/// to 2 decimal places. Overtime is `max(0, worked - base)` and owed is
/// `max(0, base - worked)`, both computed from the rounded worked value.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{DailyAggregation, materialize_calendar};
/// use overtime_engine::models::DateRange;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
/// ).unwrap();
///
/// let days = materialize_calendar(&DailyAggregation::default(), &range, Decimal::new(8, 0));
/// assert_eq!(days.len(), 3);
/// assert!(days.iter().all(|d| d.is_rest_day()));
/// ```
pub fn materialize_calendar(
    aggregation: &DailyAggregation,
    range: &DateRange,
    daily_base_hours: Decimal,
) -> Vec<DayRecord> {
    range
        .days()
        .map(|date| {
            let work = aggregation.by_date.get(&date);
            let worked_hours = work
                .map(|w| round_hours(w.worked_hours))
                .unwrap_or(Decimal::ZERO);

            DayRecord {
                date,
                worked_hours,
                overtime_hours: round_hours((worked_hours - daily_base_hours).max(Decimal::ZERO)),
                owed_hours: round_hours((daily_base_hours - worked_hours).max(Decimal::ZERO)),
                first_start: work.map(|w| w.first_start),
                last_end: work.map(|w| w.last_end),
            }
        })
        .collect()
}
