//! # Render Interface
//!
//! The request handed to the bitmap renderer, plus the session-wide render
//! settings. The renderer itself lives in [`bitmap`]; everything here is
//! plain data so the orchestration layer stays pure and testable.

pub mod bitmap;

use image::{DynamicImage, Rgba};
use serde::{Deserialize, Serialize};

use crate::overlay::OverlayBox;

/// Default canvas edge in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 256;

/// QR error-correction tier.
///
/// The session always requests `H`: the overlay excavates modules, and the
/// highest tier is what makes that survivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorLevel {
    L,
    M,
    Q,
    #[default]
    H,
}

/// Session-wide render settings. Lives for one editing session; nothing is
/// persisted across sessions.
///
/// Colors are kept as `#RRGGBB` strings and parsed leniently at render time:
/// a malformed foreground falls back to black, a malformed background to
/// white, so a half-typed color never blocks the preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_canvas_size")]
    pub canvas_size: u32,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default)]
    pub error_level: ErrorLevel,
}

fn default_canvas_size() -> u32 {
    DEFAULT_CANVAS_SIZE
}

fn default_foreground() -> String {
    "#000000".into()
}

fn default_background() -> String {
    "#FFFFFF".into()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            foreground: default_foreground(),
            background: default_background(),
            error_level: ErrorLevel::H,
        }
    }
}

impl RenderConfig {
    /// Foreground color, black on parse failure.
    pub fn foreground_rgba(&self) -> Rgba<u8> {
        parse_hex_color(&self.foreground).unwrap_or(Rgba([0, 0, 0, 255]))
    }

    /// Background color, white on parse failure.
    pub fn background_rgba(&self) -> Rgba<u8> {
        parse_hex_color(&self.background).unwrap_or(Rgba([255, 255, 255, 255]))
    }
}

/// Overlay portion of a render request.
#[derive(Debug, Clone)]
pub struct OverlayRequest {
    /// Decoded logo pixels.
    pub image: DynamicImage,
    /// Target box from the geometry calculator; rounded to pixels by the
    /// renderer.
    pub fit: OverlayBox,
    /// Clear the code modules beneath the overlay.
    pub excavate: bool,
}

/// Everything the bitmap renderer needs for one frame.
///
/// `overlay` is `None` when no logo is present or the geometry produced the
/// zero box, so the renderer never sees a degenerate overlay.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub payload: String,
    pub canvas_size: u32,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
    pub error_level: ErrorLevel,
    pub overlay: Option<OverlayRequest>,
}

/// Parse a `#RRGGBB` hex color. Case-insensitive; anything else is `None`.
pub fn parse_hex_color(s: &str) -> Option<Rgba<u8>> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgba([r, g, b, 255]))
}
