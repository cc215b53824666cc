//! Computation result models for the Overtime Computation Engine.
//!
//! This module contains the [`ComputationResult`] type and its associated
//! structures: the per-day and per-week reports with their HH:MM renderings,
//! and the range totals. A result is the only artifact handed to transport and
//! presentation layers, which read it but never recompute policy.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DayRecord, Policy, WeekRecord};

/// Marker rendered in place of an HH:MM value on rest days.
pub const REST_MARKER: &str = "REST";

/// A day-level value as shown to callers.
///
/// Serialized as the plain string `"REST"` or `"HH:MM"`.
///
/// # Example
///
/// ```
/// use overtime_engine::models::HoursDisplay;
///
/// assert_eq!(HoursDisplay::Rest.to_string(), "REST");
/// assert_eq!(HoursDisplay::Hours("08:30".to_string()).to_string(), "08:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum HoursDisplay {
    /// The date has no worked hours.
    Rest,
    /// A formatted HH:MM value.
    Hours(String),
}

impl std::fmt::Display for HoursDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoursDisplay::Rest => write!(f, "{}", REST_MARKER),
            HoursDisplay::Hours(hhmm) => write!(f, "{}", hhmm),
        }
    }
}

impl From<HoursDisplay> for String {
    fn from(display: HoursDisplay) -> Self {
        display.to_string()
    }
}

impl From<String> for HoursDisplay {
    fn from(value: String) -> Self {
        if value == REST_MARKER {
            HoursDisplay::Rest
        } else {
            HoursDisplay::Hours(value)
        }
    }
}

/// A [`DayRecord`] together with its display values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// The underlying decimal figures.
    #[serde(flatten)]
    pub record: DayRecord,
    /// Worked hours, or the rest marker.
    pub worked_display: HoursDisplay,
    /// Daily overtime, or the rest marker.
    pub overtime_display: HoursDisplay,
    /// Daily shortfall, or the rest marker.
    pub owed_display: HoursDisplay,
}

/// A [`WeekRecord`] together with its HH:MM renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekReport {
    /// The underlying decimal figures.
    #[serde(flatten)]
    pub record: WeekRecord,
    /// Worked hours as HH:MM.
    pub worked_display: String,
    /// Extra hours as HH:MM.
    pub extra_display: String,
    /// Owed hours as HH:MM.
    pub owed_display: String,
    /// Net hours as HH:MM, with a leading `-` when negative.
    pub net_display: String,
}

/// Aggregated totals over the whole query range.
///
/// Extra, owed and net are sums of the weekly figures; the weekly policy is
/// authoritative for them. `daily_overtime_hours` is the plain sum of the
/// per-day overtime column, kept for reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTotals {
    /// Total worked hours.
    pub worked_hours: Decimal,
    /// Sum of daily overtime hours.
    pub daily_overtime_hours: Decimal,
    /// Total extra hours.
    pub extra_hours: Decimal,
    /// Total owed hours.
    pub owed_hours: Decimal,
    /// `extra_hours - owed_hours`.
    pub net_hours: Decimal,
    /// Total worked hours as HH:MM.
    pub worked_display: String,
    /// Total extra hours as HH:MM.
    pub extra_display: String,
    /// Total owed hours as HH:MM.
    pub owed_display: String,
    /// Net hours as HH:MM, with a leading `-` when negative.
    pub net_display: String,
}

/// The complete report for one employee over one query range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationResult {
    /// First date of the query range.
    pub range_start: NaiveDate,
    /// Last date of the query range.
    pub range_end: NaiveDate,
    /// The effective policy used.
    pub policy: Policy,
    /// One entry per date, ascending.
    pub days: Vec<DayReport>,
    /// One entry per (clipped) week, ascending.
    pub weeks: Vec<WeekReport>,
    /// Range totals.
    pub totals: RangeTotals,
    /// Number of sessions dropped as out of range or malformed.
    pub skipped_sessions: usize,
}
