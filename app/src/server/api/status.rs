//! Current status message.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::app::SharedState;

/// GET /api/status/current – Active status message, or null
pub async fn current_status(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({ "status": state.status().current().await }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_state;

    #[tokio::test]
    async fn reports_null_then_latest_message() {
        let state = test_state();
        let Json(body) = current_status(State(state.clone())).await;
        assert!(body["status"].is_null());

        state.status().error("Failed to generate image").await;
        let Json(body) = current_status(State(state)).await;
        assert_eq!(body["status"]["level"], "error");
        assert_eq!(body["status"]["text"], "Failed to generate image");
    }
}
