//! Font lookup for card text.

use std::path::Path;

use card_render::FontGlyphs;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Failed to read font {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid font format in {0} (only TTF/OTF supported)")]
    InvalidFormat(String),
    #[error("No usable font found (set FONT_PATH or install system fonts)")]
    NotFound,
}

/// Load the configured font, or the first usable system font.
///
/// An explicit `font_path` that fails to load is an error; it does not fall
/// back to system fonts.
pub fn load_glyphs(font_path: &str) -> Result<FontGlyphs, FontError> {
    if !font_path.is_empty() {
        return load_file(Path::new(font_path));
    }

    for path in system_font_candidates() {
        match load_file(Path::new(path)) {
            Ok(glyphs) => {
                tracing::info!(path = %path, "Using system font for cards");
                return Ok(glyphs);
            }
            Err(e) => tracing::debug!("Skipping font candidate: {e}"),
        }
    }
    Err(FontError::NotFound)
}

fn load_file(path: &Path) -> Result<FontGlyphs, FontError> {
    let display = path.display().to_string();
    let data = std::fs::read(path).map_err(|source| FontError::Io {
        path: display.clone(),
        source,
    })?;
    FontGlyphs::from_bytes(data).map_err(|_| FontError::InvalidFormat(display))
}

fn system_font_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Helvetica.ttf",
            "/Library/Fonts/Arial.ttf",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &[
            "C:\\Windows\\Fonts\\segoeui.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
            "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        ]
    }
}
