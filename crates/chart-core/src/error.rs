// File: crates/chart-core/src/error.rs
// Summary: Error types for payload decoding and chart rendering.

use thiserror::Error;

/// Why a serialized payload could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload attribute is missing")]
    Missing,
    #[error("payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Faults raised by a rendering backend while creating, redrawing or destroying a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("element `{element}` has no 2d drawing context")]
    NoContext { element: String },
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("failed to create drawing surface: {0}")]
    Surface(String),
    #[error("failed to encode frame: {0}")]
    Encode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("rendering backend error: {0}")]
    Backend(String),
}
