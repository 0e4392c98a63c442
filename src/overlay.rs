//! # Logo Overlay Geometry
//!
//! A logo stamped on the middle of a QR code eats error-correction budget, so
//! its footprint is bounded by a user-chosen capacity fraction of the canvas.
//! This module derives the pixel box for the overlay: aspect-ratio preserving,
//! longer side pinned to `canvas_size * capacity_fraction`.
//!
//! The box is a size only. Centering and excavation (clearing the modules
//! under the logo) are the bitmap renderer's job.

use image::DynamicImage;

use crate::error::MatrizError;

/// Lowest capacity fraction the UI offers (10% of the canvas edge).
pub const CAPACITY_MIN: f64 = 0.10;
/// Hard ceiling on the overlay footprint (30% of the canvas edge).
pub const CAPACITY_MAX: f64 = 0.30;
/// Starting fraction for a freshly attached logo.
pub const CAPACITY_DEFAULT: f64 = 0.12;

/// Overlay box in pixels. `{0.0, 0.0}` signals "no overlay".
///
/// Dimensions stay fractional; the geometry is pure math and rounding is
/// deferred to the renderer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayBox {
    pub width: f64,
    pub height: f64,
}

impl OverlayBox {
    /// The zero box: nothing to draw.
    pub const ZERO: OverlayBox = OverlayBox {
        width: 0.0,
        height: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// A decoded logo image plus the state the geometry needs.
#[derive(Debug, Clone)]
pub struct LogoOverlay {
    /// Decoded pixel data, ready for resizing and compositing.
    pub image: DynamicImage,
    /// Natural width in pixels, as reported by the decoder.
    pub natural_width: u32,
    /// Natural height in pixels, as reported by the decoder.
    pub natural_height: u32,
    /// Fraction of the canvas edge allotted to the logo.
    ///
    /// Callers clamp to `[CAPACITY_MIN, CAPACITY_MAX]` before storing;
    /// the geometry itself does not re-clamp.
    pub capacity_fraction: f64,
}

impl LogoOverlay {
    /// Decode uploaded bytes into an overlay.
    ///
    /// This is the decoder collaborator boundary: until it returns, the
    /// session treats the overlay as absent.
    pub fn decode(bytes: &[u8]) -> Result<Self, MatrizError> {
        let image = image::load_from_memory(bytes)?;
        let natural_width = image.width();
        let natural_height = image.height();
        Ok(Self {
            image,
            natural_width,
            natural_height,
            capacity_fraction: CAPACITY_DEFAULT,
        })
    }

    /// Compute the overlay box for this logo on a `canvas_size` canvas.
    ///
    /// The longer natural side is pinned to `canvas_size * capacity_fraction`
    /// and the shorter side follows the natural aspect ratio. Square logos
    /// come out square at exactly the pinned size.
    pub fn fit_box(&self, canvas_size: u32) -> OverlayBox {
        if self.natural_width == 0 || self.natural_height == 0 {
            return OverlayBox::ZERO;
        }
        let max_dim = canvas_size as f64 * self.capacity_fraction;
        if self.natural_width > self.natural_height {
            OverlayBox {
                width: max_dim,
                height: self.natural_height as f64 / self.natural_width as f64 * max_dim,
            }
        } else {
            OverlayBox {
                width: self.natural_width as f64 / self.natural_height as f64 * max_dim,
                height: max_dim,
            }
        }
    }
}

/// Overlay box for an optional logo: absent logo means the zero box.
pub fn overlay_box(logo: Option<&LogoOverlay>, canvas_size: u32) -> OverlayBox {
    match logo {
        Some(logo) => logo.fit_box(canvas_size),
        None => OverlayBox::ZERO,
    }
}

/// Clamp a requested capacity fraction into the supported band.
pub fn clamp_capacity(fraction: f64) -> f64 {
    fraction.clamp(CAPACITY_MIN, CAPACITY_MAX)
}
