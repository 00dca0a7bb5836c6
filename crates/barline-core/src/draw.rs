// File: crates/barline-core/src/draw.rs
// Summary: Drawing surface trait and the recorded draw-command list produced by a paint.

use crate::geometry::Rect;
use crate::text::{Font, TextAlign};
use crate::types::{Color, Point};

/// Primitive drawing operations a backend must provide.
///
/// Text is positioned by its baseline; `align` anchors it horizontally.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_line(&mut self, from: Point, to: Point, stroke_width: f32, color: Color);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    /// Circle outline; the stroke is centered on `radius`.
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke_width: f32, color: Color);
    fn draw_text(&mut self, text: &str, at: Point, align: TextAlign, font: &Font, color: Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    Line { from: Point, to: Point, stroke_width: f32, color: Color },
    FillCircle { center: Point, radius: f32, color: Color },
    StrokeCircle { center: Point, radius: f32, stroke_width: f32, color: Color },
    Text { text: String, at: Point, align: TextAlign, font: Font, color: Color },
}

impl DrawCommand {
    /// Send this command to `surface`.
    pub fn apply<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            DrawCommand::FillRect { rect, color } => surface.fill_rect(*rect, *color),
            DrawCommand::Line { from, to, stroke_width, color } => {
                surface.draw_line(*from, *to, *stroke_width, *color)
            }
            DrawCommand::FillCircle { center, radius, color } => {
                surface.fill_circle(*center, *radius, *color)
            }
            DrawCommand::StrokeCircle { center, radius, stroke_width, color } => {
                surface.stroke_circle(*center, *radius, *stroke_width, *color)
            }
            DrawCommand::Text { text, at, align, font, color } => {
                surface.draw_text(text, *at, *align, font, *color)
            }
        }
    }
}

/// Ordered draw commands of one paint. Later commands paint over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// Play every command, in order, onto `surface`.
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for cmd in &self.commands {
            cmd.apply(surface);
        }
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (&Point, f32, &Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillCircle { center, radius, color } => Some((center, *radius, color)),
            _ => None,
        })
    }

    /// Outlined points, as `(center, radius, stroke_width, color)`.
    pub fn stroked_circles(&self) -> impl Iterator<Item = (&Point, f32, f32, &Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokeCircle { center, radius, stroke_width, color } => {
                Some((center, *radius, *stroke_width, color))
            }
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point, &Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, color, .. } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, .. } => Some((text.as_str(), at)),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;
    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

// Recording surface: renderers draw straight into the list.
impl DrawSurface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }
    fn draw_line(&mut self, from: Point, to: Point, stroke_width: f32, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, stroke_width, color });
    }
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke_width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, stroke_width, color });
    }
    fn draw_text(&mut self, text: &str, at: Point, align: TextAlign, font: &Font, color: Color) {
        self.commands.push(DrawCommand::Text { text: text.to_owned(), at, align, font: *font, color });
    }
}
