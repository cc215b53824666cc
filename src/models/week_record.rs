//! Weekly summary record.
//!
//! A [`WeekRecord`] covers the part of one Monday-aligned week that falls
//! inside the query range.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Extra and owed hours for one (possibly range-clipped) week.
///
/// # Example
///
/// ```
/// use overtime_engine::models::WeekRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let week = WeekRecord {
///     week_start: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     week_end: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     canonical_start: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     is_complete: true,
///     day_count: 7,
///     rest_days: 0,
///     worked_hours: Decimal::new(56, 0),
///     extra_hours: Decimal::new(8, 0),
///     owed_hours: Decimal::ZERO,
///     net_hours: Decimal::new(8, 0),
/// };
/// assert_eq!(week.net_hours, week.extra_hours - week.owed_hours);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRecord {
    /// First date of the week inside the query range.
    pub week_start: NaiveDate,
    /// Last date of the week inside the query range.
    pub week_end: NaiveDate,
    /// Monday of the canonical week.
    pub canonical_start: NaiveDate,
    /// Whether the query range covers the whole Monday-to-Sunday week.
    pub is_complete: bool,
    /// Number of dates in the clipped window.
    pub day_count: u32,
    /// Number of rest days in the clipped window.
    pub rest_days: u32,
    /// Sum of worked hours over the clipped window.
    pub worked_hours: Decimal,
    /// Hours above target.
    pub extra_hours: Decimal,
    /// Hours below target.
    pub owed_hours: Decimal,
    /// `extra_hours - owed_hours`.
    pub net_hours: Decimal,
}
