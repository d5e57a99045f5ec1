use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::app::SharedState;
use super::{api, assets, websocket};

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        .route("/ws", get(websocket::ws_handler))
        // --- Form & records ---
        .route("/api/form", get(api::form::get_form).put(api::form::update_form))
        .route("/api/generate", post(api::form::generate))
        .route("/api/records", get(api::form::get_records))
        // --- Cards ---
        .route("/api/cards/{slot}/image", get(api::cards::card_image))
        .route("/api/cards/{slot}/download", post(api::cards::download_card))
        .route("/api/cards/{slot}/copy", post(api::cards::copy_card))
        // --- Status ---
        .route("/api/status/current", get(api::status::current_status))
        // --- Generator page ---
        .route("/", get(assets::page_index))
        .fallback(assets::page_fallback)
        // --- Middleware ---
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn status_reports_version() {
        let axum::Json(body) = status_handler().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], "1.0.0");
    }

    #[tokio::test]
    async fn router_builds_and_serves_page() {
        use axum::response::IntoResponse;

        let _router = create_router(crate::app::tests::test_state());
        let response = assets::page_index().await.into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("You got paid"));
    }
}
