//! Font registration for the `ab_glyph` text path, which does not discover OS fonts.

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Regular sans fonts shipped by common Linux distributions, macOS and Windows.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<PathBuf> = OnceLock::new();

/// First system font that exists on this machine.
pub fn find_system_font() -> Option<PathBuf> {
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Register `preferred` (or the first system font found) as "sans-serif".
///
/// Only the first successful call registers anything; later calls return the
/// font already in use.
pub fn ensure_fonts_registered(preferred: Option<&Path>) -> Result<&'static Path> {
    if let Some(path) = REGISTERED.get() {
        return Ok(path.as_path());
    }
    let path = match preferred {
        Some(p) => p.to_path_buf(),
        None => find_system_font()
            .ok_or_else(|| anyhow!("no usable TrueType font found; pass --font <file.ttf>"))?,
    };
    let bytes = std::fs::read(&path).with_context(|| format!("read font {}", path.display()))?;
    // plotters keeps the font for the life of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    plotters::style::register_font("sans-serif", plotters::style::FontStyle::Normal, bytes)
        .map_err(|_| anyhow!("invalid font {}", path.display()))?;
    log::debug!("registered font {}", path.display());
    Ok(REGISTERED.get_or_init(|| path).as_path())
}
