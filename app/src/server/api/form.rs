//! Form fields, generation and the record set.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::app::SharedState;
use crate::services::actions;
use crate::services::generator::{FormState, FormUpdate};

use super::{action_err, ApiError};

/// GET /api/form – Current form fields
pub async fn get_form(State(state): State<SharedState>) -> Json<FormState> {
    Json(state.generator().await.form())
}

/// PUT /api/form – Update username and/or amount (amount is sanitized)
pub async fn update_form(
    State(state): State<SharedState>,
    Json(update): Json<FormUpdate>,
) -> Json<FormState> {
    let mut generator = state.generator_mut().await;
    generator.apply(update);
    Json(generator.form())
}

/// POST /api/generate – Build a new record set from the submitted form fields
pub async fn generate(
    State(state): State<SharedState>,
    Json(form): Json<FormUpdate>,
) -> Result<Json<Value>, ApiError> {
    let records = actions::generate(&state, form).await.map_err(action_err)?;
    Ok(Json(json!({ "success": true, "records": records })))
}

/// GET /api/records – Current record set and capture state
pub async fn get_records(State(state): State<SharedState>) -> Json<Value> {
    let records = state.generator().await.records().clone();
    Json(json!({ "records": records, "busy": state.gate().is_busy() }))
}
