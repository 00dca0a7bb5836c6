// File: crates/barline-core/src/text.rs
// Summary: Text measurement seam used for label placement, plus a font-free estimator.

/// Font request for a label. Backends pick the family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub size: f32,
}

impl Font {
    pub const fn new(size: f32) -> Self {
        Self { size }
    }
}

/// Horizontal anchor of a text run relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Ink bounds of a text run, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Measures label text. One measurer is built per paint and reused for every label.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        (**self).measure(text, font)
    }
}

/// Fixed-advance estimate: every glyph is `advance_ratio * size` wide and
/// `height_ratio * size` tall. Deterministic across platforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxTextMeasurer {
    pub advance_ratio: f32,
    pub height_ratio: f32,
}

impl Default for ApproxTextMeasurer {
    fn default() -> Self {
        // roughly the digit advance and cap height of common sans fonts
        Self { advance_ratio: 0.6, height_ratio: 0.72 }
    }
}

impl TextMeasurer for ApproxTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        let glyphs = text.chars().count();
        if glyphs == 0 {
            return TextMetrics::default();
        }
        TextMetrics {
            width: glyphs as f32 * font.size * self.advance_ratio,
            height: font.size * self.height_ratio,
        }
    }
}
