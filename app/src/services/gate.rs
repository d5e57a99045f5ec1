//! Single-flight gate around image captures.
//!
//! At most one capture runs per user action. A second action while one is
//! in flight is rejected, never queued. The gate reopens when the
//! [`BusyGuard`] drops, whichever way the action exits.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

use crate::events::{self, BusyPayload};

#[derive(Clone)]
pub struct CaptureGate {
    busy: Arc<AtomicBool>,
    ws_tx: broadcast::Sender<String>,
}

/// Held while a capture is in flight.
#[must_use = "the gate reopens as soon as the guard is dropped"]
pub struct BusyGuard {
    busy: Arc<AtomicBool>,
    ws_tx: broadcast::Sender<String>,
}

impl CaptureGate {
    pub fn new(ws_tx: broadcast::Sender<String>) -> Self {
        Self {
            busy: Arc::new(AtomicBool::new(false)),
            ws_tx,
        }
    }

    /// Move `Idle -> Busy`, or `None` when already busy.
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        events::emit(&self.ws_tx, events::BUSY, BusyPayload { busy: true });
        Some(BusyGuard {
            busy: self.busy.clone(),
            ws_tx: self.ws_tx.clone(),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
        events::emit(&self.ws_tx, events::BUSY, BusyPayload { busy: false });
    }
}
