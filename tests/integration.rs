//! Integration tests for the Overtime Computation Engine.
//!
//! This test suite drives the HTTP router end to end and covers:
//! - Complete Monday-to-Sunday weeks against the weekly target
//! - Partial first and last weeks scored day by day
//! - The partial-week variants (Sunday bonus, Sunday exemption, no-rest-day bonus)
//! - Overnight sessions and lunch deductions
//! - Sessions outside the range and malformed times
//! - Error cases
//!
//! It also exercises the library entry point with the shipped configuration.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use overtime_engine::api::{AppState, create_router};
use overtime_engine::calculation::compute;
use overtime_engine::config::ConfigLoader;
use overtime_engine::models::{HoursDisplay, WorkSession};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/engine.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads an hour quantity that may be serialized as a string or a number.
fn hours(value: &Value) -> Decimal {
    match value {
        Value::String(s) => decimal(s),
        Value::Number(n) => decimal(&n.to_string()),
        other => panic!("Expected an hour quantity, got {}", other),
    }
}

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

async fn post_preview(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/overtime/preview")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_session(date: &str, start_time: &str, end_time: &str, had_lunch: bool) -> Value {
    json!({
        "date": date,
        "start_time": start_time,
        "end_time": end_time,
        "had_lunch": had_lunch
    })
}

fn create_request(range_start: &str, range_end: &str, sessions: Vec<Value>) -> Value {
    json!({
        "range_start": range_start,
        "range_end": range_end,
        "employees": [
            { "employee_id": "emp_001", "sessions": sessions }
        ]
    })
}

fn with_partial_week(mut request: Value, rules: Value) -> Value {
    request["policy"] = json!({ "partial_week": rules });
    request
}

/// Eight hours of work (08:00 to 17:00 with the default lunch) on each date.
fn standard_days(dates: &[&str]) -> Vec<Value> {
    dates
        .iter()
        .map(|date| create_session(date, "08:00", "17:00", true))
        .collect()
}

/// Returns the single employee's result from a preview response.
fn first_result(body: &Value) -> &Value {
    &body["results"][0]["result"]
}

// =============================================================================
// Complete weeks
// =============================================================================

#[tokio::test]
async fn test_complete_week_of_eight_hour_days() {
    let dates = [
        "2026-01-12", "2026-01-13", "2026-01-14", "2026-01-15", "2026-01-16", "2026-01-17",
        "2026-01-18",
    ];
    let request = create_request("2026-01-12", "2026-01-18", standard_days(&dates));

    let (status, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let result = first_result(&body);
    let week = &result["weeks"][0];
    assert_eq!(week["is_complete"], json!(true));
    assert_eq!(hours(&week["worked_hours"]), decimal("56"));
    assert_eq!(hours(&week["extra_hours"]), decimal("8"));
    assert_eq!(hours(&week["owed_hours"]), Decimal::ZERO);
    assert_eq!(week["net_display"], json!("08:00"));
    assert_eq!(result["totals"]["net_display"], json!("08:00"));
}

#[tokio::test]
async fn test_complete_week_short_of_target() {
    let dates = ["2026-01-12", "2026-01-13", "2026-01-14", "2026-01-15", "2026-01-16"];
    let request = create_request("2026-01-12", "2026-01-18", standard_days(&dates));

    let (status, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let result = first_result(&body);
    assert_eq!(hours(&result["weeks"][0]["owed_hours"]), decimal("8"));
    assert_eq!(result["totals"]["net_display"], json!("-08:00"));
    assert_eq!(result["days"][5]["worked_display"], json!("REST"));
    assert_eq!(result["days"][6]["owed_display"], json!("REST"));
}

#[tokio::test]
async fn test_variants_do_not_affect_complete_weeks() {
    let dates = [
        "2026-01-12", "2026-01-13", "2026-01-14", "2026-01-15", "2026-01-16", "2026-01-17",
        "2026-01-18",
    ];
    let request = with_partial_week(
        create_request("2026-01-12", "2026-01-18", standard_days(&dates)),
        json!({ "sunday_bonus": true, "no_rest_day_bonus": true }),
    );

    let (_, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(hours(&first_result(&body)["weeks"][0]["extra_hours"]), decimal("8"));
}

// =============================================================================
// Partial weeks
// =============================================================================

#[tokio::test]
async fn test_range_starting_wednesday_is_partial() {
    let sessions = vec![
        create_session("2026-01-14", "08:00", "19:00", true),
        create_session("2026-01-15", "08:00", "19:00", true),
        create_session("2026-01-16", "08:00", "19:00", true),
    ];
    let request = create_request("2026-01-14", "2026-01-25", sessions);

    let (status, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let result = first_result(&body);
    let first_week = &result["weeks"][0];
    assert_eq!(first_week["week_start"], json!("2026-01-14"));
    assert_eq!(first_week["canonical_start"], json!("2026-01-12"));
    assert_eq!(first_week["is_complete"], json!(false));
    assert_eq!(first_week["day_count"], json!(5));
    assert_eq!(hours(&first_week["extra_hours"]), decimal("6"));
    assert_eq!(hours(&first_week["owed_hours"]), decimal("16"));
    assert_eq!(first_week["net_display"], json!("-10:00"));

    let second_week = &result["weeks"][1];
    assert_eq!(second_week["is_complete"], json!(true));
    assert_eq!(hours(&second_week["owed_hours"]), decimal("48"));

    assert_eq!(hours(&result["totals"]["daily_overtime_hours"]), decimal("6"));
    assert_eq!(hours(&result["totals"]["owed_hours"]), decimal("64"));
}

#[tokio::test]
async fn test_partial_week_sunday_bonus() {
    let sessions = vec![create_session("2026-01-18", "08:00", "12:00", false)];
    let request = with_partial_week(
        create_request("2026-01-14", "2026-01-18", sessions),
        json!({ "sunday_bonus": true }),
    );

    let (_, body) = post_preview(create_router_for_test(), request).await;

    let week = &first_result(&body)["weeks"][0];
    assert_eq!(hours(&week["extra_hours"]), decimal("8"));
    assert_eq!(hours(&week["owed_hours"]), decimal("32"));
    assert_eq!(week["net_display"], json!("-24:00"));
}

#[tokio::test]
async fn test_partial_week_sunday_exempt_with_rest_day() {
    let sessions = vec![create_session("2026-01-18", "08:00", "12:00", false)];
    let request = with_partial_week(
        create_request("2026-01-14", "2026-01-18", sessions),
        json!({ "sunday_exempt_with_rest_day": true, "sunday_bonus": true }),
    );

    let (_, body) = post_preview(create_router_for_test(), request).await;

    let week = &first_result(&body)["weeks"][0];
    assert_eq!(hours(&week["extra_hours"]), Decimal::ZERO);
    assert_eq!(hours(&week["owed_hours"]), decimal("32"));
}

#[tokio::test]
async fn test_partial_week_without_rest_day_bonus() {
    let dates = ["2026-01-14", "2026-01-15", "2026-01-16", "2026-01-17", "2026-01-18"];
    let request = with_partial_week(
        create_request("2026-01-14", "2026-01-18", standard_days(&dates)),
        json!({ "no_rest_day_bonus": true, "bonus_hours": 4 }),
    );

    let (_, body) = post_preview(create_router_for_test(), request).await;

    let week = &first_result(&body)["weeks"][0];
    assert_eq!(week["rest_days"], json!(0));
    assert_eq!(hours(&week["extra_hours"]), decimal("4"));
    assert_eq!(hours(&week["owed_hours"]), Decimal::ZERO);
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn test_overnight_session_on_last_day() {
    let sessions = vec![create_session("2026-01-20", "22:00", "02:00", false)];
    let request = create_request("2026-01-19", "2026-01-20", sessions);

    let (_, body) = post_preview(create_router_for_test(), request).await;

    let result = first_result(&body);
    assert_eq!(result["days"].as_array().unwrap().len(), 2);
    assert_eq!(hours(&result["days"][1]["worked_hours"]), decimal("4"));
    assert_eq!(result["days"][1]["worked_display"], json!("04:00"));
    assert_eq!(result["days"][1]["first_start"], json!("22:00:00"));
}

#[tokio::test]
async fn test_custom_lunch_minutes() {
    let mut session = create_session("2026-01-14", "08:00", "17:00", true);
    session["lunch_minutes"] = json!(30);
    let request = create_request("2026-01-14", "2026-01-14", vec![session]);

    let (_, body) = post_preview(create_router_for_test(), request).await;

    let day = &first_result(&body)["days"][0];
    assert_eq!(hours(&day["worked_hours"]), decimal("8.5"));
    assert_eq!(day["overtime_display"], json!("00:30"));
}

#[tokio::test]
async fn test_out_of_range_and_malformed_sessions_are_skipped() {
    let sessions = vec![
        create_session("2026-01-14", "08:00", "17:00", true),
        create_session("2026-01-13", "08:00", "17:00", true),
        create_session("2026-01-14", "25:00", "17:00", true),
    ];
    let request = create_request("2026-01-14", "2026-01-14", sessions);

    let (status, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let result = first_result(&body);
    assert_eq!(result["skipped_sessions"], json!(2));
    assert_eq!(hours(&result["days"][0]["worked_hours"]), decimal("8"));
}

#[tokio::test]
async fn test_multiple_employees() {
    let request = json!({
        "range_start": "2026-01-12",
        "range_end": "2026-01-18",
        "employees": [
            { "employee_id": "emp_001", "sessions": [] },
            {
                "employee_id": "emp_002",
                "sessions": [create_session("2026-01-12", "08:00", "17:00", true)]
            }
        ]
    });

    let (status, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["employee_id"], json!("emp_001"));
    assert_eq!(body["results"][0]["result"]["totals"]["net_display"], json!("-48:00"));
    assert_eq!(body["results"][1]["result"]["totals"]["net_display"], json!("-40:00"));
}

#[tokio::test]
async fn test_ranges_at_calendar_limits() {
    let request = create_request("-262143-01-01", "-262143-01-02", vec![]);
    let (status, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first_result(&body)["days"].as_array().unwrap().len(), 2);

    let sessions = vec![create_session("+262142-12-31", "08:00", "17:00", true)];
    let request = create_request("+262142-12-29", "+262142-12-31", sessions);
    let (status, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let result = first_result(&body);
    let days = result["days"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[2]["date"], json!("+262142-12-31"));
    assert_eq!(hours(&days[2]["worked_hours"]), decimal("8"));
    assert_eq!(result["weeks"].as_array().unwrap().len(), 2);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_reversed_range_returns_400() {
    let request = create_request("2026-01-31", "2026-01-01", vec![]);

    let (status, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("INVALID_RANGE"));
}

#[tokio::test]
async fn test_invalid_date_returns_400() {
    let request = create_request("2026-02-30", "2026-03-01", vec![]);

    let (status, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("MALFORMED_JSON"));
}

#[tokio::test]
async fn test_missing_employees_returns_validation_error() {
    let request = json!({ "range_start": "2026-01-01", "range_end": "2026-01-31" });

    let (status, body) = post_preview(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("VALIDATION_ERROR"));
}

// =============================================================================
// Library entry point
// =============================================================================

#[test]
fn test_compute_with_shipped_policy() {
    let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
    let sessions: Vec<WorkSession> = ["2026-01-14", "2026-01-15"]
        .iter()
        .map(|date| WorkSession {
            employee_id: "emp_001".to_string(),
            date: make_date(date),
            start_time: "7:30".to_string(),
            end_time: "18:00".to_string(),
            had_lunch: true,
            lunch_minutes: None,
        })
        .collect();

    let result = compute(
        &sessions,
        loader.policy(),
        make_date("2026-01-14"),
        make_date("2026-01-15"),
    )
    .unwrap();

    assert_eq!(result.days[0].record.worked_hours, decimal("9.5"));
    assert_eq!(result.days[0].overtime_display, HoursDisplay::Hours("01:30".to_string()));
    assert_eq!(result.weeks.len(), 1);
    assert_eq!(result.weeks[0].record.extra_hours, decimal("3"));
    assert_eq!(result.totals.net_display, "03:00");
}
