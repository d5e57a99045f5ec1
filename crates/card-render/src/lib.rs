//! Rendering of payment notification cards into PNG images.
//!
//! Templates build a scene tree, layout turns it into paint commands, and
//! the rasterizer paints those onto an RGBA canvas that is encoded as PNG.

pub mod capture;
pub mod error;
pub mod glyphs;
pub mod layout;
pub mod page;
pub mod palette;
pub mod raster;
pub mod scene;
pub mod templates;

// Re-exports for convenience
pub use capture::{render_png, Capture};
pub use error::RenderError;
pub use glyphs::{FontGlyphs, Glyphs};
pub use page::{locate_card, render_page};
pub use palette::capture_background;
pub use scene::Element;
pub use templates::render_record;
