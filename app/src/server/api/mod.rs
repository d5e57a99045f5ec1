//! REST API handlers grouped by domain.

pub mod cards;
pub mod form;
pub mod status;

use axum::Json;
use serde_json::{json, Value};

use crate::services::actions::ActionError;

pub type ApiError = (axum::http::StatusCode, Json<Value>);

/// Standard error response.
pub fn err_json(status: u16, message: &str) -> ApiError {
    (
        axum::http::StatusCode::from_u16(status).unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({ "status": "error", "error": message })),
    )
}

/// Error response for a failed action, carrying the user-facing message.
pub fn action_err(e: ActionError) -> ApiError {
    err_json(e.status_code(), e.user_message())
}
