//! HTTP request handlers for the Overtime Computation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::compute;
use crate::error::EngineResult;
use crate::models::DateRange;

use super::request::PreviewRequest;
use super::response::{
    ApiError, ApiErrorResponse, EmployeeResult, HealthResponse, PreviewResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/overtime/preview", post(preview_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Handler for POST /overtime/preview.
///
/// Computes one report per employee over the shared range, using the
/// configured policy with the request's overrides applied on top.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime preview request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match run_preview(&state, &request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employees = response.results.len(),
                range_start = %request.range_start,
                range_end = %request.range_end,
                duration_us = start_time.elapsed().as_micros(),
                "Overtime preview completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Overtime preview failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Maps a JSON extraction failure to an API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Resolves the request policy and computes every employee's report.
fn run_preview(state: &AppState, request: &PreviewRequest) -> EngineResult<PreviewResponse> {
    DateRange::new(request.range_start, request.range_end)?;
    let policy = request.policy.resolve(state.config().policy());

    let results = request
        .employees
        .iter()
        .map(|employee| {
            let sessions = employee.to_work_sessions();
            let result = compute(&sessions, &policy, request.range_start, request.range_end)?;
            debug!(
                employee_id = %employee.employee_id,
                sessions = sessions.len(),
                skipped_sessions = result.skipped_sessions,
                net_hours = %result.totals.net_hours,
                "Computed employee report"
            );
            Ok(EmployeeResult {
                employee_id: employee.employee_id.clone(),
                result,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(PreviewResponse { results })
}
