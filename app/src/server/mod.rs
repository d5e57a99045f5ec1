pub mod api;
pub mod assets;
pub mod router;
pub mod websocket;

use crate::app::SharedState;
use anyhow::Result;

/// Start the axum HTTP + WebSocket server.
pub async fn start_server(state: SharedState) -> Result<()> {
    let addr = state.config().listen_addr();
    let app = router::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Generator listening on http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
