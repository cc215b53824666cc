//! Request types for the Overtime Computation Engine API.
//!
//! This module defines the JSON request structures for the
//! `/overtime/preview` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PolicyOverrides, WorkSession};

/// Request body for the `/overtime/preview` endpoint.
///
/// Carries the sessions of one or more employees together with the shared
/// date range and optional per-request policy overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// First day of the range (inclusive).
    pub range_start: NaiveDate,
    /// Last day of the range (inclusive).
    pub range_end: NaiveDate,
    /// Policy values overriding the configured defaults.
    #[serde(default)]
    pub policy: PolicyOverrides,
    /// Employees to compute, each with their own sessions.
    pub employees: Vec<EmployeeSessions>,
}

/// One employee's sessions in a preview request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSessions {
    /// Identifier of the employee.
    pub employee_id: String,
    /// Recorded work sessions, in any order.
    #[serde(default)]
    pub sessions: Vec<SessionRequest>,
}

/// A single work session in a preview request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Calendar day the session started on.
    pub date: NaiveDate,
    /// Start time as `H:MM` or `HH:MM`.
    pub start_time: String,
    /// End time as `H:MM` or `HH:MM`.
    pub end_time: String,
    /// Whether a lunch break should be deducted.
    #[serde(default = "crate::models::default_had_lunch")]
    pub had_lunch: bool,
    /// Lunch length overriding the policy default.
    #[serde(default)]
    pub lunch_minutes: Option<u32>,
}

impl EmployeeSessions {
    /// Converts the request sessions into engine work sessions.
    pub fn to_work_sessions(&self) -> Vec<WorkSession> {
        self.sessions
            .iter()
            .map(|session| WorkSession {
                employee_id: self.employee_id.clone(),
                date: session.date,
                start_time: session.start_time.clone(),
                end_time: session.end_time.clone(),
                had_lunch: session.had_lunch,
                lunch_minutes: session.lunch_minutes,
            })
            .collect()
    }
}
