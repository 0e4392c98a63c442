//! Bitmap rendering: payload string in, RGBA canvas out.
//!
//! Uses the qrcode crate for module placement, error correction and masking,
//! then scales the module matrix onto a square canvas with integer-sized
//! cells, centered inside the leftover margin. The optional logo overlay is
//! resized to its fit box, the modules beneath it are excavated to the
//! background color, and the logo is alpha-composited on top.

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode};

use crate::error::MatrizError;
use crate::render::{ErrorLevel, OverlayRequest, RenderRequest};

/// Suggested filename for the export sink.
pub const SUGGESTED_FILENAME: &str = "qr-code.png";

impl ErrorLevel {
    fn ec_level(self) -> EcLevel {
        match self {
            ErrorLevel::L => EcLevel::L,
            ErrorLevel::M => EcLevel::M,
            ErrorLevel::Q => EcLevel::Q,
            ErrorLevel::H => EcLevel::H,
        }
    }
}

/// Render a request to an RGBA canvas.
///
/// The only failure mode is the payload itself (too long for any QR version
/// at the requested error-correction level); everything after symbol
/// generation is total.
pub fn render(request: &RenderRequest) -> Result<RgbaImage, MatrizError> {
    let code = QrCode::with_error_correction_level(&request.payload, request.error_level.ec_level())
        .map_err(|e| MatrizError::Render(format!("QR code generation failed: {}", e)))?;

    let canvas = request.canvas_size as usize;
    let qr_size = code.width();
    let cell = (canvas / qr_size).max(1);
    let pixel_size = qr_size * cell;
    let origin = canvas.saturating_sub(pixel_size) / 2;

    let mut img = RgbaImage::from_pixel(
        request.canvas_size,
        request.canvas_size,
        request.background,
    );

    for qy in 0..qr_size {
        for qx in 0..qr_size {
            if code[(qx, qy)] != qrcode::Color::Dark {
                continue;
            }
            for cy in 0..cell {
                for cx in 0..cell {
                    let px = origin + qx * cell + cx;
                    let py = origin + qy * cell + cy;
                    if px < canvas && py < canvas {
                        img.put_pixel(px as u32, py as u32, request.foreground);
                    }
                }
            }
        }
    }

    if let Some(overlay) = &request.overlay {
        composite_overlay(&mut img, overlay, request.background);
    }

    Ok(img)
}

/// Render straight to PNG bytes (the export sink's input).
pub fn render_png(request: &RenderRequest) -> Result<Vec<u8>, MatrizError> {
    encode_png(&render(request)?)
}

/// Encode a rendered canvas as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, MatrizError> {
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )?;
    Ok(bytes)
}

/// Resize the logo to its fit box, excavate the rectangle beneath it, and
/// composite it centered on the canvas.
fn composite_overlay(img: &mut RgbaImage, overlay: &OverlayRequest, background: Rgba<u8>) {
    let w = overlay.fit.width.round() as u32;
    let h = overlay.fit.height.round() as u32;
    if w == 0 || h == 0 {
        return;
    }

    let resized = overlay
        .image
        .resize_exact(w, h, FilterType::Lanczos3)
        .to_rgba8();
    let x = img.width().saturating_sub(w) / 2;
    let y = img.height().saturating_sub(h) / 2;

    if overlay.excavate {
        for py in y..(y + h).min(img.height()) {
            for px in x..(x + w).min(img.width()) {
                img.put_pixel(px, py, background);
            }
        }
    }

    image::imageops::overlay(img, &resized, x as i64, y as i64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::OverlayBox;
    use image::DynamicImage;

    fn request(payload: &str) -> RenderRequest {
        RenderRequest {
            payload: payload.into(),
            canvas_size: 256,
            foreground: Rgba([0, 0, 0, 255]),
            background: Rgba([255, 0, 0, 255]),
            error_level: ErrorLevel::H,
            overlay: None,
        }
    }

    fn solid_logo(color: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 64, color))
    }

    #[test]
    fn test_canvas_dimensions() {
        let img = render(&request("https://example.com")).unwrap();
        assert_eq!(img.width(), 256);
        assert_eq!(img.height(), 256);
    }

    #[test]
    fn test_margin_is_background() {
        // The module grid is centered; the outermost pixel ring belongs to
        // the leftover margin and keeps the background color.
        let img = render(&request("https://example.com")).unwrap();
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(255, 255), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_foreground_present() {
        let img = render(&request("https://example.com")).unwrap();
        assert!(img.pixels().any(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_opaque_logo_lands_in_center() {
        let mut req = request("https://example.com");
        req.overlay = Some(OverlayRequest {
            image: solid_logo(Rgba([0, 0, 255, 255])),
            fit: OverlayBox {
                width: 51.2,
                height: 51.2,
            },
            excavate: true,
        });
        let img = render(&req).unwrap();
        assert_eq!(*img.get_pixel(128, 128), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_excavation_clears_under_transparent_logo() {
        let mut req = request("https://example.com");
        req.overlay = Some(OverlayRequest {
            image: solid_logo(Rgba([0, 0, 0, 0])),
            fit: OverlayBox {
                width: 51.2,
                height: 51.2,
            },
            excavate: true,
        });
        let img = render(&req).unwrap();
        // Fully transparent logo over an excavated region: the background
        // shows through where modules used to be.
        assert_eq!(*img.get_pixel(128, 128), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_zero_fit_box_is_a_noop() {
        let mut req = request("https://example.com");
        let plain = render(&request("https://example.com")).unwrap();
        req.overlay = Some(OverlayRequest {
            image: solid_logo(Rgba([0, 0, 255, 255])),
            fit: OverlayBox::ZERO,
            excavate: true,
        });
        let img = render(&req).unwrap();
        assert_eq!(img.as_raw(), plain.as_raw());
    }

    #[test]
    fn test_png_roundtrip() {
        let bytes = render_png(&request("hello")).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 256);
        assert_eq!(decoded.height(), 256);
    }

    #[test]
    fn test_oversized_payload_is_a_render_error() {
        let huge = "x".repeat(8000);
        let err = render(&request(&huge)).unwrap_err();
        assert!(matches!(err, MatrizError::Render(_)));
    }
}
