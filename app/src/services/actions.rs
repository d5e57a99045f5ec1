//! User actions: generate, download, copy.
//!
//! Every terminal outcome replaces the status message. Download and copy run
//! behind the capture gate and never touch the record set.

use std::sync::Arc;

use card_render::Capture;
use paid_records::{AmountError, RecordSet};

use crate::app::SharedState;
use crate::events;

use super::capture::capture_slot;
use super::clipboard::{ClipboardError, ClipboardSink};
use super::generator::FormUpdate;

pub const MSG_INVALID_AMOUNT: &str = "Please enter a valid amount";
pub const MSG_CAPTURE_FAILED: &str = "Failed to generate image";
pub const MSG_COPY_FAILED: &str = "Failed to copy to clipboard";
pub const MSG_BUSY: &str = "Another image is still being generated";
pub const MSG_GENERATED: &str = "Notifications generated";
pub const MSG_DOWNLOADED: &str = "Image downloaded";
pub const MSG_COPIED: &str = "Copied to clipboard!";

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
    #[error("no card rendered for slot {slot}")]
    RenderTargetMissing { slot: usize },
    #[error("capture failed: {0}")]
    CaptureFailure(String),
    #[error("clipboard write failed: {0}")]
    ClipboardFailure(#[from] ClipboardError),
    #[error("a capture is already in progress")]
    Busy,
}

impl ActionError {
    /// Message shown to the user for this outcome.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => MSG_INVALID_AMOUNT,
            Self::RenderTargetMissing { .. } | Self::CaptureFailure(_) => MSG_CAPTURE_FAILED,
            Self::ClipboardFailure(_) => MSG_COPY_FAILED,
            Self::Busy => MSG_BUSY,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount(_) => 400,
            Self::RenderTargetMissing { .. } => 404,
            Self::CaptureFailure(_) => 500,
            Self::ClipboardFailure(_) => 502,
            Self::Busy => 409,
        }
    }
}

/// A capture ready to be saved by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// ASCII-only name, safe as a plain `filename` parameter.
    pub filename: String,
    pub unicode_filename: String,
    pub png: Vec<u8>,
}

async fn report(state: &SharedState, err: ActionError) -> ActionError {
    tracing::warn!("Action failed: {err}");
    state.status().error(err.user_message()).await;
    err
}

/// Apply `form`, validate, and replace the record set.
///
/// The update and the generation happen under one lock, so the records are
/// built from exactly the fields the caller submitted.
pub async fn generate(state: &SharedState, form: FormUpdate) -> Result<RecordSet, ActionError> {
    let result = {
        let mut generator = state.generator_mut().await;
        generator.apply(form);
        generator.generate().cloned()
    };
    match result {
        Ok(records) => {
            events::emit(state.ws_sender(), events::RECORDS, &records);
            state.status().success(MSG_GENERATED).await;
            tracing::info!(amount = %records[0].amount, "Record set generated");
            Ok(records)
        }
        Err(e) => Err(report(state, e.into()).await),
    }
}

/// Capture slot `slot` and return it as a named PNG.
pub async fn download(state: &SharedState, slot: usize) -> Result<Download, ActionError> {
    let Some(_guard) = state.gate().try_acquire() else {
        return Err(report(state, ActionError::Busy).await);
    };

    match capture_slot(state, slot).await {
        Ok((record, capture)) => {
            state.status().success(MSG_DOWNLOADED).await;
            Ok(Download {
                filename: record.download_filename(),
                unicode_filename: record.unicode_filename(),
                png: capture.png,
            })
        }
        Err(e) => Err(report(state, e).await),
    }
}

/// Capture slot `slot` and place it on the clipboard.
pub async fn copy(state: &SharedState, slot: usize) -> Result<(), ActionError> {
    let Some(_guard) = state.gate().try_acquire() else {
        return Err(report(state, ActionError::Busy).await);
    };

    let result = match capture_slot(state, slot).await {
        Ok((_, capture)) => write_clipboard(state.clipboard(), capture).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => {
            state.status().success(MSG_COPIED).await;
            Ok(())
        }
        Err(e) => Err(report(state, e).await),
    }
}

/// Capture slot `slot` for display only: no gate, no status message.
pub async fn preview(state: &SharedState, slot: usize) -> Result<Capture, ActionError> {
    capture_slot(state, slot).await.map(|(_, capture)| capture)
}

async fn write_clipboard(clipboard: Arc<dyn ClipboardSink>, capture: Capture) -> Result<(), ActionError> {
    tokio::task::spawn_blocking(move || clipboard.write_png(&capture.png))
        .await
        .map_err(|e| ActionError::CaptureFailure(format!("clipboard task failed: {e}")))?
        .map_err(ActionError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{test_state, test_state_with_clipboard, RecordingClipboard, RejectingClipboard};
    use crate::services::status::StatusLevel;

    async fn status_text(state: &SharedState) -> Option<(StatusLevel, String)> {
        state.status().current().await.map(|m| (m.level, m.text))
    }

    #[tokio::test]
    async fn generate_with_invalid_amount_keeps_records() {
        let state = test_state();
        let before = state.generator().await.records().clone();

        state.generator_mut().await.set_amount("0");
        let err = generate(&state, FormUpdate::default()).await.unwrap_err();
        assert!(matches!(err, ActionError::InvalidAmount(_)));
        assert_eq!(state.generator().await.records(), &before);
        assert_eq!(
            status_text(&state).await,
            Some((StatusLevel::Error, MSG_INVALID_AMOUNT.to_string()))
        );
    }

    #[tokio::test]
    async fn generate_broadcasts_new_records() {
        let state = test_state();
        let mut rx = state.subscribe_ws();
        {
            let mut generator = state.generator_mut().await;
            generator.set_username("sam");
            generator.set_amount("12.5");
        }
        let records = generate(&state, FormUpdate::default()).await.unwrap();
        assert!(records.iter().all(|r| r.amount == "12.5"));

        let msg: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(msg["type"], "records");
        assert_eq!(msg["data"][1]["username"], "sam");
    }

    #[tokio::test]
    async fn generate_uses_submitted_fields_over_stored_ones() {
        let state = test_state();
        state.generator_mut().await.set_amount("12");
        let records = generate(
            &state,
            FormUpdate {
                username: Some("jordan".into()),
                amount: Some("123".into()),
            },
        )
        .await
        .unwrap();
        assert!(records.iter().all(|r| r.amount == "123"));
        assert_eq!(records[1].username.as_deref(), Some("jordan"));
        assert_eq!(state.generator().await.form().amount, "123");
    }

    #[tokio::test]
    async fn download_names_file_after_record() {
        let state = test_state();
        let download = download(&state, 2).await.unwrap();
        assert_eq!(download.filename, "got-paid-user-310.61.png");
        assert_eq!(&download.png[1..4], b"PNG");
        assert!(!state.gate().is_busy());
        assert_eq!(
            status_text(&state).await,
            Some((StatusLevel::Success, MSG_DOWNLOADED.to_string()))
        );
    }

    #[tokio::test]
    async fn download_of_missing_slot_reports_generic_failure() {
        let state = test_state();
        let err = download(&state, 7).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(status_text(&state).await.unwrap().1, MSG_CAPTURE_FAILED);
        assert!(!state.gate().is_busy());
    }

    #[tokio::test]
    async fn copy_writes_png_to_clipboard() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let state = test_state_with_clipboard(clipboard.clone());
        copy(&state, 0).await.unwrap();

        let written = clipboard.written();
        assert_eq!(written.len(), 1);
        assert_eq!(&written[0][1..4], b"PNG");
        assert_eq!(status_text(&state).await.unwrap().1, MSG_COPIED);
    }

    #[tokio::test]
    async fn rejected_clipboard_reports_copy_failure_and_clears_busy() {
        let state = test_state_with_clipboard(Arc::new(RejectingClipboard));
        let err = copy(&state, 1).await.unwrap_err();
        assert!(matches!(err, ActionError::ClipboardFailure(_)));
        assert_eq!(
            status_text(&state).await,
            Some((StatusLevel::Error, MSG_COPY_FAILED.to_string()))
        );
        assert!(!state.gate().is_busy());
    }

    #[tokio::test]
    async fn actions_while_busy_are_rejected() {
        let state = test_state();
        let _held = state.gate().try_acquire().unwrap();
        assert!(matches!(download(&state, 0).await, Err(ActionError::Busy)));
        assert!(matches!(copy(&state, 0).await, Err(ActionError::Busy)));
        assert_eq!(status_text(&state).await.unwrap().1, MSG_BUSY);
        // Preview bypasses the gate.
        assert!(preview(&state, 0).await.is_ok());
    }

    #[tokio::test]
    async fn record_set_survives_download_and_copy() {
        let state = test_state();
        let before = state.generator().await.records().clone();
        download(&state, 0).await.unwrap();
        copy(&state, 3).await.unwrap();
        assert_eq!(state.generator().await.records(), &before);
    }

    #[test]
    fn error_messages_are_distinct_for_clipboard() {
        let copy_err = ActionError::ClipboardFailure(ClipboardError::Unsupported);
        let capture_err = ActionError::CaptureFailure("boom".into());
        assert_ne!(copy_err.user_message(), capture_err.user_message());
        assert_eq!(
            ActionError::RenderTargetMissing { slot: 0 }.user_message(),
            capture_err.user_message()
        );
    }
}
