//! # Editing Session
//!
//! The orchestration layer: one in-memory editing session owning the current
//! content, render settings and logo. Every change re-derives the payload
//! and overlay box from scratch, so there is no incremental state to get
//! out of sync, and nothing survives the session.

use crate::content::ContentSpec;
use crate::error::MatrizError;
use crate::overlay::{self, LogoOverlay, OverlayBox};
use crate::render::{OverlayRequest, RenderConfig, RenderRequest};

/// One editing session: content + render settings + optional logo.
#[derive(Debug, Clone, Default)]
pub struct Session {
    content: ContentSpec,
    config: RenderConfig,
    logo: Option<LogoOverlay>,
}

impl Session {
    pub fn new(content: ContentSpec, config: RenderConfig) -> Self {
        Self {
            content,
            config,
            logo: None,
        }
    }

    pub fn content(&self) -> &ContentSpec {
        &self.content
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn logo(&self) -> Option<&LogoOverlay> {
        self.logo.as_ref()
    }

    /// Replace the active content.
    ///
    /// An empty payload means there is nothing to overlay either, so the
    /// logo is dropped with it.
    pub fn set_content(&mut self, content: ContentSpec) {
        self.content = content;
        if self.content.is_empty() {
            self.logo = None;
        }
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    /// Decode uploaded bytes and attach the logo.
    ///
    /// The session treats the overlay as absent until the decode succeeds;
    /// attaching to an empty payload is rejected the same way the UI hides
    /// the upload control without content.
    pub fn attach_logo(&mut self, bytes: &[u8]) -> Result<(), MatrizError> {
        if self.content.is_empty() {
            return Err(MatrizError::InvalidContent(
                "cannot attach a logo without content to encode".into(),
            ));
        }
        self.logo = Some(LogoOverlay::decode(bytes)?);
        Ok(())
    }

    pub fn remove_logo(&mut self) {
        self.logo = None;
    }

    /// Adjust the logo's capacity fraction, clamped to the supported band.
    /// No-op while no logo is attached (the slider only exists with one).
    pub fn set_capacity_fraction(&mut self, fraction: f64) {
        if let Some(logo) = &mut self.logo {
            logo.capacity_fraction = overlay::clamp_capacity(fraction);
        }
    }

    /// The encoded payload for the current content.
    pub fn payload(&self) -> String {
        self.content.payload()
    }

    /// The overlay box for the current logo on the configured canvas.
    pub fn overlay_box(&self) -> OverlayBox {
        overlay::overlay_box(self.logo.as_ref(), self.config.canvas_size)
    }

    /// Build the request for the bitmap renderer.
    ///
    /// `None` when the payload is empty: the caller shows a "please provide
    /// data" placeholder instead of invoking the renderer. The overlay is
    /// omitted entirely when no logo is present or its box is zero.
    pub fn render_request(&self) -> Option<RenderRequest> {
        let payload = self.payload();
        if payload.is_empty() {
            return None;
        }

        let fit = self.overlay_box();
        let overlay = self.logo.as_ref().filter(|_| !fit.is_zero()).map(|logo| {
            OverlayRequest {
                image: logo.image.clone(),
                fit,
                excavate: true,
            }
        });

        Some(RenderRequest {
            payload,
            canvas_size: self.config.canvas_size,
            foreground: self.config.foreground_rgba(),
            background: self.config.background_rgba(),
            error_level: self.config.error_level,
            overlay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Text, Url, Wifi};
    use crate::overlay::{CAPACITY_MAX, CAPACITY_MIN};

    fn png_logo(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([0, 0, 255, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        bytes
    }

    fn session_with_content() -> Session {
        Session::new(
            ContentSpec::Url(Url::new("https://example.com")),
            RenderConfig::default(),
        )
    }

    #[test]
    fn test_empty_payload_no_request() {
        let session = Session::default();
        assert!(session.render_request().is_none());
    }

    #[test]
    fn test_request_without_logo_has_no_overlay() {
        let req = session_with_content().render_request().unwrap();
        assert_eq!(req.payload, "https://example.com");
        assert!(req.overlay.is_none());
    }

    #[test]
    fn test_attach_logo_populates_overlay() {
        let mut session = session_with_content();
        session.attach_logo(&png_logo(200, 100)).unwrap();
        let logo = session.logo().unwrap();
        assert_eq!(logo.natural_width, 200);
        assert_eq!(logo.natural_height, 100);

        let req = session.render_request().unwrap();
        let overlay = req.overlay.unwrap();
        assert!(overlay.excavate);
        assert_eq!(overlay.fit, session.overlay_box());
    }

    #[test]
    fn test_attach_logo_needs_content() {
        let mut session = Session::default();
        let err = session.attach_logo(&png_logo(10, 10)).unwrap_err();
        assert!(matches!(err, MatrizError::InvalidContent(_)));
    }

    #[test]
    fn test_logo_cleared_when_payload_empties() {
        let mut session = session_with_content();
        session.attach_logo(&png_logo(10, 10)).unwrap();
        session.set_content(ContentSpec::Text(Text::default()));
        assert!(session.logo().is_none());
        assert!(session.overlay_box().is_zero());
    }

    #[test]
    fn test_logo_survives_content_switch() {
        let mut session = session_with_content();
        session.attach_logo(&png_logo(10, 10)).unwrap();
        session.set_content(ContentSpec::Wifi(Wifi::new("Home", "secret1")));
        assert!(session.logo().is_some());
    }

    #[test]
    fn test_capacity_fraction_clamped() {
        let mut session = session_with_content();
        session.attach_logo(&png_logo(10, 10)).unwrap();

        session.set_capacity_fraction(0.99);
        assert_eq!(session.logo().unwrap().capacity_fraction, CAPACITY_MAX);

        session.set_capacity_fraction(0.01);
        assert_eq!(session.logo().unwrap().capacity_fraction, CAPACITY_MIN);
    }

    #[test]
    fn test_capacity_fraction_noop_without_logo() {
        let mut session = session_with_content();
        session.set_capacity_fraction(0.25);
        assert!(session.logo().is_none());
    }

    #[test]
    fn test_remove_logo_drops_overlay() {
        let mut session = session_with_content();
        session.attach_logo(&png_logo(10, 10)).unwrap();
        session.remove_logo();
        assert!(session.logo().is_none());
        assert!(session.render_request().unwrap().overlay.is_none());
    }

    #[test]
    fn test_set_config_changes_canvas() {
        let mut session = session_with_content();
        session.set_config(RenderConfig {
            canvas_size: 512,
            ..Default::default()
        });
        assert_eq!(session.config().canvas_size, 512);
        assert_eq!(session.render_request().unwrap().canvas_size, 512);
    }

    #[test]
    fn test_rederivation_is_stable() {
        let mut session = session_with_content();
        session.attach_logo(&png_logo(64, 64)).unwrap();
        assert_eq!(session.payload(), session.payload());
        assert_eq!(session.overlay_box(), session.overlay_box());
    }
}
