// File: crates/barline-core/src/svg.rs
// Summary: Vector backend writing draw commands as a standalone SVG document.

use crate::draw::{DrawList, DrawSurface};
use crate::geometry::Rect;
use crate::text::{Font, TextAlign};
use crate::types::{Color, Point, Surface};

/// Accumulates SVG elements; `finish` closes the document.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    background: Option<Color>,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(surface: Surface) -> Self {
        Self { width: surface.width, height: surface.height, background: None, elements: Vec::new() }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn finish(self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        if let Some(bg) = self.background {
            svg.push_str(&format!("  <rect width=\"100%\" height=\"100%\" {}/>\n", fill_attr(bg)));
        }
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

/// Replay `list` into a new SVG document of `surface` size.
pub fn to_svg(list: &DrawList, surface: Surface, background: Option<Color>) -> String {
    let mut svg = SvgSurface::new(surface);
    svg.background = background;
    list.replay(&mut svg);
    svg.finish()
}

fn fill_attr(c: Color) -> String {
    if c.a == 255 {
        format!("fill=\"{}\"", c.to_hex_rgb())
    } else {
        format!("fill=\"{}\" fill-opacity=\"{:.3}\"", c.to_hex_rgb(), c.alpha_f())
    }
}

fn stroke_attr(c: Color, width: f32) -> String {
    let mut s = format!("stroke=\"{}\" stroke-width=\"{}\"", c.to_hex_rgb(), width);
    if c.a != 255 {
        s.push_str(&format!(" stroke-opacity=\"{:.3}\"", c.alpha_f()));
    }
    s
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

impl DrawSurface for SvgSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.elements.push(format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
            rect.left,
            rect.top,
            rect.width(),
            rect.height(),
            fill_attr(color)
        ));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke_width: f32, color: Color) {
        self.elements.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_attr(color, stroke_width)
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.elements.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
            center.x,
            center.y,
            radius,
            fill_attr(color)
        ));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke_width: f32, color: Color) {
        self.elements.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" {}/>",
            center.x,
            center.y,
            radius,
            stroke_attr(color, stroke_width)
        ));
    }

    fn draw_text(&mut self, text: &str, at: Point, align: TextAlign, font: &Font, color: Color) {
        let anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        self.elements.push(format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"sans-serif\" text-anchor=\"{}\" {}>{}</text>",
            at.x,
            at.y,
            font.size,
            anchor,
            fill_attr(color),
            escape(text)
        ));
    }
}
