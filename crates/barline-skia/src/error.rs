// File: crates/barline-skia/src/error.rs
// Summary: Errors raised by the Skia raster backend.

use barline_core::ChartError;
use thiserror::Error;

pub type SkiaResult<T> = Result<T, SkiaError>;

#[derive(Debug, Error)]
pub enum SkiaError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("reading back raster pixels failed")]
    ReadPixels,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
