//! Core data models for the Overtime Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod computation_result;
mod date_range;
mod day_record;
mod policy;
mod week_record;
mod work_session;

pub use computation_result::{
    ComputationResult, DayReport, HoursDisplay, REST_MARKER, RangeTotals, WeekReport,
};
pub use date_range::DateRange;
pub use day_record::DayRecord;
pub use policy::{
    DEFAULT_BONUS_HOURS, DEFAULT_DAILY_BASE_HOURS, DEFAULT_LUNCH_MINUTES,
    DEFAULT_WEEKLY_TARGET_HOURS, MAX_POLICY_HOURS, PartialWeekRules, Policy, PolicyOverrides,
    validate_hours, validate_minutes,
};
pub use week_record::WeekRecord;
pub use work_session::WorkSession;
pub(crate) use work_session::default_had_lunch;
