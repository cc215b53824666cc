//! Query range model.
//!
//! This module contains the [`DateRange`] type, the validated closed interval
//! of calendar dates a report is computed over.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// A closed, validated range of calendar dates `[start, end]`.
///
/// # Example
///
/// ```
/// use overtime_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
/// ).unwrap();
///
/// assert_eq!(range.day_count(), 7);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, failing with [`EngineError::InvalidRange`] when `end`
    /// precedes `start`. A single-day range (`start == end`) is valid.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First date of the range (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the range (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a date falls within the range, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of dates in the range.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates every date in the range in ascending order, `end` included
    /// even when it is [`NaiveDate::MAX`].
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |date| {
            (*date < end).then(|| date.succ_opt()).flatten()
        })
    }

    /// Intersects `[start, end]` with this range.
    ///
    /// Returns `None` when the two windows do not overlap.
    pub fn clip(&self, start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let clipped_start = start.max(self.start);
        let clipped_end = end.min(self.end);
        (clipped_start <= clipped_end).then_some((clipped_start, clipped_end))
    }
}
