//! Capturing one slot's card off the async runtime.

use std::sync::Arc;

use card_render::{capture_background, locate_card, render_png, Capture, Element, Glyphs};
use paid_records::DisplayRecord;

use crate::app::SharedState;

use super::actions::ActionError;

/// Everything a capture needs, detached from the generator lock.
pub struct CaptureJob {
    pub slot: usize,
    pub record: DisplayRecord,
    pub page: Element,
}

impl CaptureJob {
    /// Snapshot slot `slot` of the current record set.
    pub async fn snapshot(state: &SharedState, slot: usize) -> Result<Self, ActionError> {
        let generator = state.generator().await;
        let record = generator
            .record(slot)
            .cloned()
            .ok_or(ActionError::RenderTargetMissing { slot })?;
        Ok(Self {
            slot,
            record,
            page: generator.page(),
        })
    }

    /// Rasterize the card on a blocking worker and wait for the PNG.
    pub async fn run(self, glyphs: Option<Arc<dyn Glyphs>>, scale: u32) -> Result<Capture, ActionError> {
        tokio::task::spawn_blocking(move || self.render(glyphs.as_deref(), scale))
            .await
            .map_err(|e| ActionError::CaptureFailure(format!("capture task failed: {e}")))?
    }

    fn render(&self, glyphs: Option<&dyn Glyphs>, scale: u32) -> Result<Capture, ActionError> {
        let card = locate_card(&self.page, self.slot, self.record.kind)
            .ok_or(ActionError::RenderTargetMissing { slot: self.slot })?;
        let glyphs = glyphs.ok_or_else(|| ActionError::CaptureFailure("no usable font loaded".into()))?;
        let background = capture_background(self.record.kind, self.record.variant);

        let capture = render_png(card, background, scale, glyphs)
            .map_err(|e| ActionError::CaptureFailure(e.to_string()))?;
        tracing::info!(
            slot = self.slot,
            kind = ?self.record.kind,
            variant = ?self.record.variant,
            bytes = capture.png.len(),
            "Card captured"
        );
        Ok(capture)
    }
}

/// Capture slot `slot` of the current record set.
pub async fn capture_slot(state: &SharedState, slot: usize) -> Result<(DisplayRecord, Capture), ActionError> {
    let job = CaptureJob::snapshot(state, slot).await?;
    let record = job.record.clone();
    let capture = job.run(state.glyphs(), state.config().capture_scale).await?;
    Ok((record, capture))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_state;

    #[tokio::test]
    async fn captures_every_default_slot() {
        let state = test_state();
        for slot in 0..4 {
            let (record, capture) = capture_slot(&state, slot).await.unwrap();
            assert_eq!(&record, &state.generator().await.records()[slot]);
            assert_eq!(&capture.png[1..4], b"PNG");
            assert!(capture.width > 0 && capture.height > 0);
        }
    }

    #[tokio::test]
    async fn capture_is_deterministic() {
        let state = test_state();
        let (_, first) = capture_slot(&state, 1).await.unwrap();
        let (_, second) = capture_slot(&state, 1).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_slot_is_missing_target() {
        let state = test_state();
        assert!(matches!(
            capture_slot(&state, 4).await,
            Err(ActionError::RenderTargetMissing { slot: 4 })
        ));
    }

    #[tokio::test]
    async fn missing_font_is_capture_failure() {
        let state = crate::app::tests::test_state_without_font();
        assert!(matches!(
            capture_slot(&state, 0).await,
            Err(ActionError::CaptureFailure(_))
        ));
    }
}
