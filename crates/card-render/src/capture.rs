//! One-shot element capture: layout, rasterize, encode.

use crate::error::RenderError;
use crate::glyphs::Glyphs;
use crate::layout;
use crate::raster;
use crate::scene::{Color, Element};

/// A rasterized element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Rasterize `element` onto a `background` canvas and encode it as PNG.
pub fn render_png(
    element: &Element,
    background: Color,
    scale: u32,
    glyphs: &dyn Glyphs,
) -> Result<Capture, RenderError> {
    let frame = layout::layout(element, glyphs);
    if frame.width == 0 || frame.height == 0 {
        return Err(RenderError::EmptyFrame {
            width: frame.width,
            height: frame.height,
        });
    }

    let img = raster::rasterize(&frame, background, scale, glyphs);
    let (width, height) = img.dimensions();
    let png = raster::encode_png(img)?;
    tracing::debug!(width, height, bytes = png.len(), "Element captured");

    Ok(Capture { width, height, png })
}
