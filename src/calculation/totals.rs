//! Range totals and report assembly.
//!
//! Totals for extra, owed and net hours are sums of the weekly figures, not of
//! the daily columns: the weekly policy is authoritative for them.

use rust_decimal::Decimal;

use crate::models::{DayRecord, DayReport, RangeTotals, WeekRecord, WeekReport};

use super::formatting::{day_display, hours_to_hhmm};

/// Sums weekly extra/owed into range totals.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::range_totals;
/// use overtime_engine::models::WeekRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let week = WeekRecord {
///     week_start: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
///     week_end: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
///     canonical_start: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
///     is_complete: false,
///     day_count: 2,
///     rest_days: 1,
///     worked_hours: Decimal::new(65, 1),
///     extra_hours: Decimal::ZERO,
///     owed_hours: Decimal::new(95, 1),
///     net_hours: Decimal::new(-95, 1),
/// };
///
/// let totals = range_totals(&[], &[week]);
/// assert_eq!(totals.net_hours, Decimal::new(-95, 1));
/// assert_eq!(totals.net_display, "-09:30");
/// ```
pub fn range_totals(days: &[DayRecord], weeks: &[WeekRecord]) -> RangeTotals {
    let (worked_hours, extra_hours, owed_hours) = weeks.iter().fold(
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        |(worked, extra, owed), week| {
            (
                worked + week.worked_hours,
                extra + week.extra_hours,
                owed + week.owed_hours,
            )
        },
    );
    let daily_overtime_hours: Decimal = days.iter().map(|d| d.overtime_hours).sum();
    let net_hours = extra_hours - owed_hours;

    RangeTotals {
        worked_hours,
        daily_overtime_hours,
        extra_hours,
        owed_hours,
        net_hours,
        worked_display: hours_to_hhmm(worked_hours),
        extra_display: hours_to_hhmm(extra_hours),
        owed_display: hours_to_hhmm(owed_hours),
        net_display: hours_to_hhmm(net_hours),
    }
}

/// Attaches display values to a day.
pub fn day_report(record: DayRecord) -> DayReport {
    DayReport {
        worked_display: day_display(record.worked_hours, record.worked_hours),
        overtime_display: day_display(record.worked_hours, record.overtime_hours),
        owed_display: day_display(record.worked_hours, record.owed_hours),
        record,
    }
}

/// Attaches HH:MM renderings to a week.
pub fn week_report(record: WeekRecord) -> WeekReport {
    WeekReport {
        worked_display: hours_to_hhmm(record.worked_hours),
        extra_display: hours_to_hhmm(record.extra_hours),
        owed_display: hours_to_hhmm(record.owed_hours),
        net_display: hours_to_hhmm(record.net_hours),
        record,
    }
}
