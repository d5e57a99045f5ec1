//! Text measurement and drawing.
//!
//! Layout only needs widths and line heights; the rasterizer additionally
//! draws glyphs. Both go through [`Glyphs`] so layout can be exercised with
//! fixed metrics and rasterization with a real font.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::error::RenderError;

pub trait Glyphs: Send + Sync {
    /// Pixel width of `text` rendered at `size` px.
    fn text_width(&self, text: &str, size: f32) -> u32;

    /// Distance between baselines of consecutive lines at `size` px.
    fn line_height(&self, size: f32) -> u32;

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&self, canvas: &mut RgbaImage, x: i32, y: i32, size: f32, color: Rgba<u8>, text: &str);
}

/// [`Glyphs`] backed by a TTF/OTF font.
#[derive(Clone)]
pub struct FontGlyphs {
    font: FontArc,
}

impl FontGlyphs {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RenderError> {
        let font = FontArc::try_from_vec(data).map_err(|_| RenderError::InvalidFont)?;
        Ok(Self { font })
    }
}

impl Glyphs for FontGlyphs {
    fn text_width(&self, text: &str, size: f32) -> u32 {
        measure_text_width(&self.font, PxScale::from(size), text)
    }

    fn line_height(&self, size: f32) -> u32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
    }

    fn draw_text(&self, canvas: &mut RgbaImage, x: i32, y: i32, size: f32, color: Rgba<u8>, text: &str) {
        draw_text_mut(canvas, color, x, y, PxScale::from(size), &self.font, text);
    }
}

/// Measure the pixel width of a string at the given font and scale.
pub fn measure_text_width(font: &impl Font, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// Wrap text to fit within `max_width` pixels.
///
/// Breaks at whitespace; a single word wider than `max_width` is broken
/// character by character. Always returns at least one line.
pub fn wrap_text(glyphs: &dyn Glyphs, size: f32, text: &str, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width: u32 = 0;

    for word in text.split_inclusive(|c: char| c.is_whitespace()) {
        let word_width = glyphs.text_width(word, size);

        if current_width + word_width > max_width && !current_line.is_empty() {
            lines.push(current_line.trim_end().to_string());
            current_line = String::new();
            current_width = 0;
        }

        if word_width > max_width && current_line.is_empty() {
            let mut char_line = String::new();
            let mut char_width: u32 = 0;
            for ch in word.chars() {
                let ch_w = glyphs.text_width(ch.encode_utf8(&mut [0; 4]), size);
                if char_width + ch_w > max_width && !char_line.is_empty() {
                    lines.push(char_line);
                    char_line = String::new();
                    char_width = 0;
                }
                char_line.push(ch);
                char_width += ch_w;
            }
            if !char_line.is_empty() {
                current_line = char_line;
                current_width = char_width;
            }
            continue;
        }

        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line.trim_end().to_string());
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Fixed-metric glyphs for tests: every character is a `size / 2` wide block.
#[cfg(any(test, feature = "test-util"))]
pub struct BlockGlyphs;

#[cfg(any(test, feature = "test-util"))]
impl Glyphs for BlockGlyphs {
    fn text_width(&self, text: &str, size: f32) -> u32 {
        (text.chars().count() as f32 * size / 2.0).ceil() as u32
    }

    fn line_height(&self, size: f32) -> u32 {
        (size * 1.25).ceil() as u32
    }

    fn draw_text(&self, canvas: &mut RgbaImage, x: i32, y: i32, size: f32, color: Rgba<u8>, text: &str) {
        let w = self.text_width(text.trim_end(), size) as i32;
        let h = size as i32;
        for py in y.max(0)..(y + h).min(canvas.height() as i32) {
            for px in x.max(0)..(x + w).min(canvas.width() as i32) {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
