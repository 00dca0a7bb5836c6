// File: crates/barline-skia/src/text.rs
// Summary: Text measurement and font selection backed by the system font manager.

use barline_core::{Font, TextMeasurer, TextMetrics};
use skia_safe as skia;

const FAMILIES: [&str; 6] = ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Resolves one sans typeface up front and reuses it for every label.
pub struct SkiaTextMeasurer {
    typeface: Option<skia::Typeface>,
}

impl SkiaTextMeasurer {
    pub fn new() -> Self {
        let mgr = skia::FontMgr::default();
        let typeface = FAMILIES
            .iter()
            .find_map(|family| mgr.match_family_style(*family, skia::FontStyle::normal()))
            .or_else(|| mgr.legacy_make_typeface(None::<&str>, skia::FontStyle::normal()));
        if typeface.is_none() {
            tracing::warn!("no system typeface found; labels may not render");
        }
        Self { typeface }
    }

    pub fn font(&self, font: &Font) -> skia::Font {
        let size = font.size.max(1.0);
        match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size);
                f
            }
        }
    }

    /// Horizontal advance of `text`, used for alignment.
    pub fn advance(&self, text: &str, font: &Font) -> f32 {
        self.font(font).measure_str(text, None).0
    }
}

impl Default for SkiaTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for SkiaTextMeasurer {
    /// Ink bounds, matching what a platform `getTextBounds` reports.
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        let (_, bounds) = self.font(font).measure_str(text, None);
        TextMetrics { width: bounds.width(), height: bounds.height() }
    }
}
