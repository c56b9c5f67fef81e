//! Error types for the renderer.

use thiserror::Error;

/// Errors produced while rendering images.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// PNG encoding failed.
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// Histogram has no outcomes to draw.
    #[error("Histogram has no outcomes")]
    EmptyHistogram,
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
