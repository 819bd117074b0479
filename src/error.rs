//! Error types for nyth-morph.
//!
//! The animation math itself cannot fail. Errors come from two places:
//! a drawing surface rejecting a call while a frame is presented, and
//! configuration that cannot describe a valid logo.

use crate::element::ElementId;
use thiserror::Error;

/// Errors raised by a [`Surface`](crate::surface::Surface) implementation.
///
/// A surface error is fatal to the frame being presented only; the next
/// present starts from a clean slate.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The surface refused to draw an element.
    #[error("surface rejected {kind} element: {reason}")]
    Rejected {
        /// Element kind, e.g. `"line"` or `"text"`.
        kind: &'static str,
        reason: String,
    },

    /// An element handle that was never issued, or was already removed.
    #[error("unknown element {0}")]
    UnknownElement(ElementId),

    /// Encoding or writing a rasterized frame failed.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors in a [`LogoConfig`](crate::config::LogoConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("morph speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),

    #[error("target frame rate must be at least 1")]
    InvalidFrameRate,

    #[error("viewport half-extent must be positive on both axes, got ({0}, {1})")]
    InvalidViewport(f32, f32),

    #[error("word must contain at least one glyph")]
    EmptyWord,

    #[error("emphasis index {index} is out of range for a {len}-glyph word")]
    EmphasisOutOfRange { index: usize, len: usize },

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for operations spanning configuration and presentation.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::EmphasisOutOfRange { index: 7, len: 4 };
        assert_eq!(
            err.to_string(),
            "emphasis index 7 is out of range for a 4-glyph word"
        );

        let err: Error = SurfaceError::Rejected {
            kind: "text",
            reason: "no font".into(),
        }
        .into();
        assert_eq!(err.to_string(), "surface rejected text element: no font");
    }
}
