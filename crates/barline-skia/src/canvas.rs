// File: crates/barline-skia/src/canvas.rs
// Summary: DrawSurface implementation over a borrowed Skia canvas.

use barline_core::{Color, DrawSurface, Font, Point, Rect, TextAlign};
use skia_safe as skia;

use crate::text::SkiaTextMeasurer;

pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    text: &'a SkiaTextMeasurer,
}

impl<'a> SkiaCanvas<'a> {
    /// `text` must be the measurer the draw list was laid out with.
    pub fn new(canvas: &'a skia::Canvas, text: &'a SkiaTextMeasurer) -> Self {
        Self { canvas, text }
    }

    fn fill(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        paint
    }

    fn stroke(stroke_width: f32, color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke_width);
        paint.set_color(to_skia(color));
        paint
    }
}

impl DrawSurface for SkiaCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.canvas.draw_rect(r, &Self::fill(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke_width: f32, color: Color) {
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &Self::stroke(stroke_width, color));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.canvas.draw_circle((center.x, center.y), radius, &Self::fill(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke_width: f32, color: Color) {
        self.canvas.draw_circle((center.x, center.y), radius, &Self::stroke(stroke_width, color));
    }

    fn draw_text(&mut self, text: &str, at: Point, align: TextAlign, font: &Font, color: Color) {
        let sk_font = self.text.font(font);
        let x = match align {
            TextAlign::Left => at.x,
            TextAlign::Center => at.x - self.text.advance(text, font) / 2.0,
            TextAlign::Right => at.x - self.text.advance(text, font),
        };
        self.canvas.draw_str(text, (x, at.y), &sk_font, &Self::fill(color));
    }
}
