// File: crates/barline-skia/src/raster.rs
// Summary: Headless PNG/RGBA rendering pipeline using Skia CPU raster surfaces.

use barline_core::types::{HEIGHT, WIDTH};
use barline_core::{Chart, Color, Surface, Theme};
use skia_safe as skia;
use tracing::debug;

use crate::canvas::{to_skia, SkiaCanvas};
use crate::error::{SkiaError, SkiaResult};
use crate::text::SkiaTextMeasurer;

pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    pub background: Color,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { width: WIDTH as i32, height: HEIGHT as i32, background: Color::WHITE }
    }
}

impl RasterOptions {
    pub fn themed(theme: &Theme) -> Self {
        Self { background: theme.background, ..Self::default() }
    }

    pub fn surface(&self) -> Surface {
        Surface::new(self.width as f32, self.height as f32)
    }
}

/// Lay out first, then allocate and paint, so a bad config never touches pixels.
fn paint(chart: &Chart, opts: &RasterOptions) -> SkiaResult<skia::Surface> {
    let text = SkiaTextMeasurer::new();
    let list = chart.render(opts.surface(), &text)?;

    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(SkiaError::Surface { width: opts.width, height: opts.height })?;
    {
        let canvas = surface.canvas();
        canvas.clear(to_skia(opts.background));
        list.replay(&mut SkiaCanvas::new(canvas, &text));
    }
    debug!(commands = list.len(), width = opts.width, height = opts.height, "rasterized chart");
    Ok(surface)
}

pub fn render_to_png_bytes(chart: &Chart, opts: &RasterOptions) -> SkiaResult<Vec<u8>> {
    let mut surface = paint(chart, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(SkiaError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    chart: &Chart,
    opts: &RasterOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> SkiaResult<()> {
    let bytes = render_to_png_bytes(chart, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), "wrote png");
    Ok(())
}

/// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_stride)`.
pub fn render_to_rgba8(chart: &Chart, opts: &RasterOptions) -> SkiaResult<(Vec<u8>, u32, u32, usize)> {
    let mut surface = paint(chart, opts)?;
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(SkiaError::ReadPixels);
    }
    Ok((pixels, opts.width as u32, opts.height as u32, stride))
}
