//! Rasterize a laid out [`Frame`] into an RGBA canvas and encode PNG.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};

use crate::error::RenderError;
use crate::glyphs::Glyphs;
use crate::layout::{Frame, PaintCommand, Rect};
use crate::scene::Color;

/// Paint `frame` onto a canvas filled with `background`.
///
/// `scale` multiplies every coordinate and font size (device pixel ratio).
pub fn rasterize(frame: &Frame, background: Color, scale: u32, glyphs: &dyn Glyphs) -> RgbaImage {
    let s = scale.max(1);
    let mut img = RgbaImage::from_pixel(frame.width * s, frame.height * s, background);

    for cmd in &frame.commands {
        match cmd {
            PaintCommand::Fill { rect, color, radius } => {
                fill_rounded_rect(&mut img, scale_rect(rect, s), radius * s, *color);
            }
            PaintCommand::Disc { cx, cy, radius, color } => {
                draw_filled_circle_mut(
                    &mut img,
                    (cx * s as i32, cy * s as i32),
                    (radius * s) as i32,
                    *color,
                );
            }
            PaintCommand::Text { x, y, size, color, text } => {
                glyphs.draw_text(&mut img, x * s as i32, y * s as i32, size * s as f32, *color, text);
            }
        }
    }

    img
}

/// Encode an RGBA canvas as PNG bytes.
pub fn encode_png(img: RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img).write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

fn scale_rect(rect: &Rect, s: u32) -> Rect {
    Rect {
        x: rect.x * s as i32,
        y: rect.y * s as i32,
        width: rect.width * s,
        height: rect.height * s,
    }
}

fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, width: u32, height: u32, color: Color) {
    if width == 0 || height == 0 {
        return;
    }
    draw_filled_rect_mut(img, imageproc::rect::Rect::at(x, y).of_size(width, height), color);
}

/// Rectangle with quarter-circle corners of `radius`.
fn fill_rounded_rect(img: &mut RgbaImage, rect: Rect, radius: u32, color: Color) {
    let r = radius.min(rect.width / 2).min(rect.height / 2);
    if r == 0 {
        fill_rect(img, rect.x, rect.y, rect.width, rect.height, color);
        return;
    }

    let ri = r as i32;
    fill_rect(img, rect.x + ri, rect.y, rect.width - 2 * r, rect.height, color);
    fill_rect(img, rect.x, rect.y + ri, rect.width, rect.height - 2 * r, color);

    let left = rect.x + ri;
    let right = rect.x + rect.width as i32 - 1 - ri;
    let top = rect.y + ri;
    let bottom = rect.y + rect.height as i32 - 1 - ri;
    for center in [(left, top), (right, top), (left, bottom), (right, bottom)] {
        draw_filled_circle_mut(img, center, ri, color);
    }
}
