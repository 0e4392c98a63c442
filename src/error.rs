//! # Error Types
//!
//! This module defines error types used throughout the matriz library.

use thiserror::Error;

/// Main error type for matriz operations
#[derive(Debug, Error)]
pub enum MatrizError {
    /// QR symbol or bitmap rendering error
    #[error("Render error: {0}")]
    Render(String),

    /// Logo decoding or compositing error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Malformed content document (JSON input)
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
