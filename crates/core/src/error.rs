//! Error types for the portfolio-fx core.

use thiserror::Error;

/// Errors produced while building scenes, effects, and snapshots.
///
/// Running scenes never fail: `advance`, `render`, and `resize` are total.
/// Errors only arise from configuration (bad params, unknown scene names)
/// and from the offline output path (image encoding, file writes).
#[derive(Debug, Error)]
pub enum FxError {
    /// Width or height was zero (or overflowed) where a raster is required.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A requested scene name is not registered.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A parameter had a value the scene or effect cannot work with.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// Writing an output file failed.
    #[error("i/o error: {0}")]
    Io(String),
}
