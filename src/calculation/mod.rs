//! Calculation logic for the Overtime Computation Engine.
//!
//! This module contains the pipeline stages that turn raw work sessions into
//! an overtime/shortfall report: time normalization, daily aggregation with
//! overnight and lunch handling, calendar materialization, Monday-aligned
//! weekly grouping with the weekly policy, and totals with HH:MM formatting.
//! [`compute`] runs them in order.

mod calendar;
mod compute;
mod daily_aggregation;
mod formatting;
mod time_normalizer;
mod totals;
mod weekly_policy;

pub use calendar::materialize_calendar;
pub use compute::compute;
pub use daily_aggregation::{
    DailyAggregation, DailyWork, SkipReason, SkippedSession, aggregate_daily,
    session_worked_hours,
};
pub use formatting::{day_display, hhmm_to_hours, hours_to_hhmm, round_hours};
pub use time_normalizer::{normalize_time, parse_time};
pub use totals::{day_report, range_totals, week_report};
pub use weekly_policy::{WeekGroup, evaluate_week, evaluate_weeks, group_weeks, week_key};
