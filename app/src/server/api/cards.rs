//! Card previews, downloads and clipboard copies.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::Response;
use axum::Json;
use serde_json::{json, Value};

use crate::app::SharedState;
use crate::services::actions;

use super::{action_err, err_json, ApiError};

/// GET /api/cards/{slot}/image – Preview PNG
pub async fn card_image(
    State(state): State<SharedState>,
    Path(slot): Path<usize>,
) -> Result<Response, ApiError> {
    let capture = actions::preview(&state, slot).await.map_err(action_err)?;
    Response::builder()
        .header(header::CONTENT_TYPE, "image/png")
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from(capture.png))
        .map_err(|e| err_json(500, &e.to_string()))
}

/// POST /api/cards/{slot}/download – PNG attachment
pub async fn download_card(
    State(state): State<SharedState>,
    Path(slot): Path<usize>,
) -> Result<Response, ApiError> {
    let download = actions::download(&state, slot).await.map_err(action_err)?;
    Response::builder()
        .header(header::CONTENT_TYPE, "image/png")
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition(&download.filename, &download.unicode_filename),
        )
        .body(Body::from(download.png))
        .map_err(|e| err_json(500, &e.to_string()))
}

/// `attachment` with an ASCII `filename` and an RFC 5987 `filename*`.
fn content_disposition(ascii: &str, unicode: &str) -> String {
    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(unicode)
    )
}

/// POST /api/cards/{slot}/copy – Write PNG to the system clipboard
pub async fn copy_card(
    State(state): State<SharedState>,
    Path(slot): Path<usize>,
) -> Result<Json<Value>, ApiError> {
    actions::copy(&state, slot).await.map_err(action_err)?;
    Ok(Json(json!({ "success": true })))
}
