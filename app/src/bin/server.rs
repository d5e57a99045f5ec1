//! Server binary: serves the generator page and its API.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use got_paid_lib::app::SharedState;
use got_paid_lib::server;
use got_paid_lib::services::clipboard::SystemClipboard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting got-paid generator");

    let (config, glyphs) = got_paid_lib::init_foundation();
    let clipboard = Arc::new(SystemClipboard::new(&config.clipboard_command));
    let state = SharedState::new(config, glyphs, clipboard);

    let server_state = state.clone();
    let mut server_handle = tokio::spawn(async move {
        if let Err(e) = server::start_server(server_state).await {
            tracing::error!("Server failed: {e}");
        }
    });

    tracing::info!(
        port = state.server_port(),
        "Generator running. Press Ctrl+C to stop."
    );

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            tracing::info!("Shutting down...");
            server_handle.abort();
        }
        _ = &mut server_handle => {}
    }
    Ok(())
}
