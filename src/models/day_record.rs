//! Per-date worked-hours record.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Worked hours for one calendar date of the query range.
///
/// Every date in the range has exactly one record; dates without sessions
/// carry zero worked hours and count as rest days.
///
/// # Example
///
/// ```
/// use overtime_engine::models::DayRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rest = DayRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     worked_hours: Decimal::ZERO,
///     overtime_hours: Decimal::ZERO,
///     owed_hours: Decimal::new(8, 0),
///     first_start: None,
///     last_end: None,
/// };
/// assert!(rest.is_rest_day());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date.
    pub date: NaiveDate,
    /// Hours worked, rounded to 2 decimal places.
    pub worked_hours: Decimal,
    /// Hours beyond the daily base.
    pub overtime_hours: Decimal,
    /// Hours short of the daily base. Informative only; weekly figures are
    /// authoritative for totals.
    pub owed_hours: Decimal,
    /// Earliest clock-in observed on this date.
    pub first_start: Option<NaiveTime>,
    /// Latest clock-out observed on this date.
    pub last_end: Option<NaiveTime>,
}

impl DayRecord {
    /// A rest day is a date with zero worked hours.
    pub fn is_rest_day(&self) -> bool {
        self.worked_hours.is_zero()
    }
}
