//! Public types and constants for the visualization module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

/// Most x tick labels drawn; dates are dense so most are skipped.
pub const MAX_X_LABELS: usize = 10;

/// How and where charts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub out_dir: PathBuf,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    /// Locale tag for y tick labels (`en`, `de`, ...).
    pub locale: String,
    /// TrueType font to register instead of searching the system font directories.
    pub font: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            format: ImageFormat::Svg,
            width: 1000,
            height: 600,
            locale: "en".to_string(),
            font: None,
        }
    }
}
