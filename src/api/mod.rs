//! HTTP API module for the Overtime Computation Engine.
//!
//! A thin JSON transport over [`crate::calculation::compute`]: callers post
//! sessions for one or more employees and receive one report per employee.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeSessions, PreviewRequest, SessionRequest};
pub use response::{ApiError, ApiErrorResponse, EmployeeResult, HealthResponse, PreviewResponse};
pub use state::AppState;
