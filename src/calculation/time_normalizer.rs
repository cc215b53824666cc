//! Time-of-day normalization.
//!
//! Session times arrive as loosely formatted strings from the upstream store.
//! This module accepts `H:MM`, `HH:M` and `HH:MM`, validates the hour and
//! minute ranges, and produces the canonical zero-padded `HH:MM` form.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::error::{EngineError, EngineResult};

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{1,2})$").expect("valid time pattern"));

fn parse_components(input: &str) -> EngineResult<(u32, u32)> {
    let invalid = || EngineError::InvalidTime {
        value: input.to_string(),
    };

    let captures = TIME_PATTERN.captures(input.trim()).ok_or_else(invalid)?;
    let hour: u32 = captures[1].parse().map_err(|_| invalid())?;
    let minute: u32 = captures[2].parse().map_err(|_| invalid())?;

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

/// Normalizes a time-of-day string to `HH:MM`.
///
/// Surrounding whitespace is ignored. Anything other than one or two digits,
/// a colon, and one or two digits is rejected, as are hours above 23 and
/// minutes above 59.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] when the input is malformed or out of
/// range.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::normalize_time;
///
/// assert_eq!(normalize_time("8:05").unwrap(), "08:05");
/// assert_eq!(normalize_time("17:5").unwrap(), "17:05");
/// assert!(normalize_time("24:00").is_err());
/// assert!(normalize_time("8h30").is_err());
/// ```
pub fn normalize_time(input: &str) -> EngineResult<String> {
    let (hour, minute) = parse_components(input)?;
    Ok(format!("{:02}:{:02}", hour, minute))
}

/// Parses a time-of-day string into a [`NaiveTime`], with the same rules as
/// [`normalize_time`].
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::parse_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time(" 22:00 ").unwrap(), NaiveTime::from_hms_opt(22, 0, 0).unwrap());
/// ```
pub fn parse_time(input: &str) -> EngineResult<NaiveTime> {
    let (hour, minute) = parse_components(input)?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| EngineError::InvalidTime {
        value: input.to_string(),
    })
}
