//! Work session model.
//!
//! This module defines the [`WorkSession`] struct, the raw clock-in/clock-out
//! record the engine consumes. Times are kept as the strings the upstream store
//! holds; they are validated by the time normalizer during aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single clock-in/clock-out record for one employee on one date.
///
/// When `end_time` is not after `start_time` the session is treated as
/// crossing midnight, with the end on the following calendar date. All hours
/// are attributed to `date`.
///
/// # Example
///
/// ```
/// use overtime_engine::models::WorkSession;
/// use chrono::NaiveDate;
///
/// let session = WorkSession {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     start_time: "22:00".to_string(),
///     end_time: "02:00".to_string(),
///     had_lunch: false,
///     lunch_minutes: None,
/// };
/// assert!(!session.had_lunch);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSession {
    /// Identifier of the employee the session belongs to.
    pub employee_id: String,
    /// The calendar date the session starts on.
    pub date: NaiveDate,
    /// Clock-in time as "HH:MM".
    pub start_time: String,
    /// Clock-out time as "HH:MM".
    pub end_time: String,
    /// Whether a lunch break was taken.
    #[serde(default = "default_had_lunch")]
    pub had_lunch: bool,
    /// Lunch length in minutes, overriding the policy default.
    #[serde(default)]
    pub lunch_minutes: Option<u32>,
}

/// Sessions record a lunch break unless told otherwise.
pub(crate) fn default_had_lunch() -> bool {
    true
}

impl WorkSession {
    /// Returns the lunch minutes to deduct for this session.
    ///
    /// Zero when no lunch was taken, otherwise the session override or
    /// `default_minutes`.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_engine::models::WorkSession;
    /// use chrono::NaiveDate;
    ///
    /// let mut session = WorkSession {
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     start_time: "08:00".to_string(),
    ///     end_time: "17:00".to_string(),
    ///     had_lunch: true,
    ///     lunch_minutes: None,
    /// };
    /// assert_eq!(session.lunch_deduction_minutes(60), 60);
    ///
    /// session.lunch_minutes = Some(30);
    /// assert_eq!(session.lunch_deduction_minutes(60), 30);
    /// ```
    pub fn lunch_deduction_minutes(&self, default_minutes: u32) -> u32 {
        if !self.had_lunch {
            return 0;
        }
        self.lunch_minutes.unwrap_or(default_minutes)
    }
}
