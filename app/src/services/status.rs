//! The single transient status message shown to the user.
//!
//! Showing a message replaces the current one; each message dismisses itself
//! after the configured duration unless a newer one replaced it first.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{broadcast, RwLock};

use crate::events::{self, StatusClearedPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub id: u64,
    pub level: StatusLevel,
    pub text: String,
}

struct StatusInner {
    current: RwLock<Option<StatusMessage>>,
    next_id: AtomicU64,
    duration: Duration,
    ws_tx: broadcast::Sender<String>,
}

#[derive(Clone)]
pub struct StatusBoard {
    inner: Arc<StatusInner>,
}

impl StatusBoard {
    pub fn new(ws_tx: broadcast::Sender<String>, duration: Duration) -> Self {
        Self {
            inner: Arc::new(StatusInner {
                current: RwLock::new(None),
                next_id: AtomicU64::new(1),
                duration,
                ws_tx,
            }),
        }
    }

    /// Replace the current message and schedule its dismissal.
    pub async fn show(&self, level: StatusLevel, text: impl Into<String>) -> StatusMessage {
        let msg = StatusMessage {
            id: self.inner.next_id.fetch_add(1, Ordering::Relaxed),
            level,
            text: text.into(),
        };
        *self.inner.current.write().await = Some(msg.clone());
        events::emit(&self.inner.ws_tx, events::STATUS, &msg);

        let board = self.clone();
        let id = msg.id;
        tokio::spawn(async move {
            tokio::time::sleep(board.inner.duration).await;
            board.dismiss(id).await;
        });

        msg
    }

    pub async fn success(&self, text: impl Into<String>) -> StatusMessage {
        self.show(StatusLevel::Success, text).await
    }

    pub async fn error(&self, text: impl Into<String>) -> StatusMessage {
        self.show(StatusLevel::Error, text).await
    }

    /// Clear message `id` if it is still the current one.
    pub async fn dismiss(&self, id: u64) -> bool {
        let mut current = self.inner.current.write().await;
        if current.as_ref().is_some_and(|m| m.id == id) {
            *current = None;
            events::emit(&self.inner.ws_tx, events::STATUS_CLEARED, StatusClearedPayload { id });
            true
        } else {
            false
        }
    }

    pub async fn current(&self) -> Option<StatusMessage> {
        self.inner.current.read().await.clone()
    }
}
