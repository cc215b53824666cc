//! Decimal-hour rounding and HH:MM rendering.
//!
//! Every hour quantity in a report is carried as a [`Decimal`] and rendered as
//! `HH:MM` for display. Negative values keep a leading `-`; the magnitude is
//! formatted exactly as a positive value would be.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::HoursDisplay;

/// Rounds an hour quantity to 2 decimal places, halves away from zero.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::round_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_hours(Decimal::from_str("8.125").unwrap()), Decimal::from_str("8.13").unwrap());
/// ```
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders decimal hours as `HH:MM`.
///
/// Minutes are `round(fraction * 60)`; a rounding carry to 60 minutes rolls
/// over into the hour. Hours are zero-padded to two digits but may be wider.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::hours_to_hhmm;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(hours_to_hhmm(Decimal::from_str("8.5").unwrap()), "08:30");
/// assert_eq!(hours_to_hhmm(Decimal::from_str("-1.5").unwrap()), "-01:30");
/// assert_eq!(hours_to_hhmm(Decimal::from_str("1.999").unwrap()), "02:00");
/// assert_eq!(hours_to_hhmm(Decimal::from_str("120.25").unwrap()), "120:15");
/// ```
pub fn hours_to_hhmm(hours: Decimal) -> String {
    let sign = if hours.is_sign_negative() && !hours.is_zero() {
        "-"
    } else {
        ""
    };
    let magnitude = hours.abs();
    let whole = magnitude.floor();
    let minutes = ((magnitude - whole) * Decimal::new(60, 0))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    // Minutes lie in 0..=60, so only the hour needs to stay a Decimal.
    let (hh, mm) = match minutes.to_u32() {
        Some(60) => (whole + Decimal::ONE, 0),
        Some(mm) => (whole, mm),
        None => (whole, 0),
    };

    let hours_text = hh.normalize().to_string();
    let rendered = format!("{}{:0>2}:{:02}", sign, hours_text, mm);
    // A value that rounds to zero minutes renders without a sign.
    if rendered == "-00:00" {
        return "00:00".to_string();
    }
    rendered
}

/// Parses an `HH:MM` rendering (optionally prefixed with `-`) back to hours.
///
/// Returns `None` for anything [`hours_to_hhmm`] could not have produced.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::hhmm_to_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(hhmm_to_hours("-01:30"), Some(Decimal::from_str("-1.5").unwrap()));
/// assert_eq!(hhmm_to_hours("REST"), None);
/// ```
pub fn hhmm_to_hours(rendered: &str) -> Option<Decimal> {
    let (negative, body) = match rendered.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rendered),
    };
    let (hh, mm) = body.split_once(':')?;
    if hh.len() < 2 || mm.len() != 2 {
        return None;
    }
    let hours: u64 = hh.parse().ok()?;
    let minutes: u64 = mm.parse().ok()?;
    if minutes > 59 {
        return None;
    }

    let value = Decimal::from(hours) + Decimal::from(minutes) / Decimal::new(60, 0);
    Some(if negative { -value } else { value })
}

/// Display value for a day-level column.
///
/// Rest days (zero worked hours) show the rest marker in every column;
/// otherwise `value` is rendered as `HH:MM`.
pub fn day_display(worked_hours: Decimal, value: Decimal) -> HoursDisplay {
    if worked_hours.is_zero() {
        HoursDisplay::Rest
    } else {
        HoursDisplay::Hours(hours_to_hhmm(value))
    }
}
