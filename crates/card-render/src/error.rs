use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid font data (only TTF/OTF supported)")]
    InvalidFont,
    #[error("nothing to capture: laid out frame is {width}x{height}")]
    EmptyFrame { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
