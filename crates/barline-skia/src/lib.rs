// File: crates/barline-skia/src/lib.rs
// Summary: Skia renderer crate; replays barline-core draw lists onto CPU raster surfaces.

pub mod canvas;
pub mod error;
pub mod raster;
pub mod text;

pub use canvas::SkiaCanvas;
pub use error::{SkiaError, SkiaResult};
pub use raster::{render_to_png, render_to_png_bytes, render_to_rgba8, RasterOptions};
pub use text::SkiaTextMeasurer;
