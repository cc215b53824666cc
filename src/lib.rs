//! Overtime Computation Engine
//!
//! This crate turns recorded work sessions into a daily and weekly
//! overtime/shortfall report: worked hours per calendar day, daily overtime
//! over a base, weekly extra or owed hours against a target, and range
//! totals rendered as signed `HH:MM` strings.
//!
//! The engine ([`calculation::compute`]) is pure and takes an explicit
//! [`models::Policy`]; [`config`] resolves the default policy and [`api`]
//! exposes the engine over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
