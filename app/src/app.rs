use std::sync::Arc;
use std::time::Duration;

use card_render::Glyphs;
use tokio::sync::{broadcast, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::AppConfig;
use crate::services::clipboard::ClipboardSink;
use crate::services::gate::CaptureGate;
use crate::services::generator::Generator;
use crate::services::status::StatusBoard;

/// Application shared state accessible from every axum handler.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Broadcast channel for WebSocket messages
    ws_tx: broadcast::Sender<String>,
    config: AppConfig,
    /// Form fields and the active record set
    generator: RwLock<Generator>,
    status: StatusBoard,
    gate: CaptureGate,
    clipboard: Arc<dyn ClipboardSink>,
    /// `None` when no font could be loaded; every capture then fails.
    glyphs: Option<Arc<dyn Glyphs>>,
}

impl SharedState {
    pub fn new(
        config: AppConfig,
        glyphs: Option<Arc<dyn Glyphs>>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Self {
        let (ws_tx, _) = broadcast::channel(256);
        let status = StatusBoard::new(
            ws_tx.clone(),
            Duration::from_secs(config.status_duration_secs),
        );
        let gate = CaptureGate::new(ws_tx.clone());

        Self {
            inner: Arc::new(SharedStateInner {
                ws_tx,
                config,
                generator: RwLock::new(Generator::default()),
                status,
                gate,
                clipboard,
                glyphs,
            }),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn ws_sender(&self) -> &broadcast::Sender<String> {
        &self.inner.ws_tx
    }

    pub fn subscribe_ws(&self) -> broadcast::Receiver<String> {
        self.inner.ws_tx.subscribe()
    }

    pub async fn generator(&self) -> RwLockReadGuard<'_, Generator> {
        self.inner.generator.read().await
    }

    pub async fn generator_mut(&self) -> RwLockWriteGuard<'_, Generator> {
        self.inner.generator.write().await
    }

    pub fn status(&self) -> &StatusBoard {
        &self.inner.status
    }

    pub fn gate(&self) -> &CaptureGate {
        &self.inner.gate
    }

    pub fn clipboard(&self) -> Arc<dyn ClipboardSink> {
        self.inner.clipboard.clone()
    }

    pub fn glyphs(&self) -> Option<Arc<dyn Glyphs>> {
        self.inner.glyphs.clone()
    }
}
