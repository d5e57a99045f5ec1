//! Payment notification generator: shared state, services and HTTP server.

pub mod app;
pub mod config;
pub mod events;
pub mod server;
pub mod services;

use std::sync::Arc;

use card_render::Glyphs;

use config::AppConfig;
use services::font;

/// Load .env from multiple candidate paths.
pub fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load config and the card font.
///
/// A missing font is not fatal: the server still starts and every capture
/// reports a failure.
pub fn init_foundation() -> (AppConfig, Option<Arc<dyn Glyphs>>) {
    load_dotenv();
    let config = AppConfig::from_env();

    let glyphs: Option<Arc<dyn Glyphs>> = match font::load_glyphs(&config.font_path) {
        Ok(glyphs) => Some(Arc::new(glyphs)),
        Err(e) => {
            tracing::warn!("{e}; image capture is unavailable");
            None
        }
    };

    tracing::info!(
        addr = %config.listen_addr(),
        scale = config.capture_scale,
        "Settings loaded"
    );
    (config, glyphs)
}
