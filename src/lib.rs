//! # Matriz - QR Code Builder Library
//!
//! Matriz turns structured intent (a URL, free text, Wi-Fi credentials, a
//! calendar event, or a menu link) into a scannable QR code PNG, with an
//! optional logo overlay excavated into the symbol. It provides:
//!
//! - **Payload encoding**: the five content variants and their string grammars
//! - **Overlay geometry**: aspect-preserving logo fit boxes with a capacity ceiling
//! - **Bitmap rendering**: module placement via the qrcode crate, colors, logo compositing
//! - **Help markup**: a restricted markdown-to-HTML renderer for static help content
//!
//! ## Quick Start
//!
//! ```no_run
//! use matriz::{
//!     content::{ContentSpec, Wifi},
//!     render::{RenderConfig, bitmap},
//!     session::Session,
//! };
//!
//! // Describe the content and open an editing session
//! let content = ContentSpec::Wifi(Wifi::new("Home", "secret1"));
//! let mut session = Session::new(content, RenderConfig::default());
//!
//! // Attach a logo from decoded upload bytes
//! let logo_bytes = std::fs::read("logo.png")?;
//! session.attach_logo(&logo_bytes)?;
//! session.set_capacity_fraction(0.2);
//!
//! // Render: empty payloads yield no request instead of a broken preview
//! if let Some(request) = session.render_request() {
//!     let png = bitmap::render_png(&request)?;
//!     std::fs::write(bitmap::SUGGESTED_FILENAME, png)?;
//! }
//!
//! # Ok::<(), matriz::MatrizError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`content`] | Content variants and payload encoding |
//! | [`overlay`] | Logo overlay geometry |
//! | [`markup`] | Restricted markup renderer |
//! | [`help`] | Built-in help topics |
//! | [`render`] | Render configuration and the bitmap renderer |
//! | [`session`] | Editing-session orchestration |
//! | [`error`] | Error types |

pub mod content;
pub mod error;
pub mod help;
pub mod markup;
pub mod overlay;
pub mod render;
pub mod session;

// Re-exports for convenience
pub use content::ContentSpec;
pub use error::MatrizError;
pub use session::Session;
