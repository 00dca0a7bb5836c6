// File: crates/barline-core/src/marks.rs
// Summary: Mark strategies: filled bars, or points joined by line segments.

use crate::config::RenderConfig;
use crate::draw::DrawSurface;
use crate::geometry::Rect;
use crate::layout::Layout;
use crate::series::DataPoint;
use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    pub fn marks(self) -> &'static dyn Marks {
        match self {
            ChartKind::Bar => &BarMarks,
            ChartKind::Line => &LineMarks,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

/// How line-chart points are painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointStyle {
    #[default]
    Fill,
    /// Outline only, stroked with `axis_stroke_width`.
    Stroke,
}

/// Draws the data mark of one item. Layout is shared; only the shape differs.
pub trait Marks: Sync {
    fn draw_item(
        &self,
        layout: &Layout,
        config: &RenderConfig,
        points: &[DataPoint],
        index: usize,
        out: &mut dyn DrawSurface,
    );
}

pub struct BarMarks;

impl Marks for BarMarks {
    /// Rectangle from the value's top y down to the floor. Negative values
    /// hang below the floor.
    fn draw_item(
        &self,
        layout: &Layout,
        _config: &RenderConfig,
        points: &[DataPoint],
        index: usize,
        out: &mut dyn DrawSurface,
    ) {
        let p = &points[index];
        let slot = layout.slot(index);
        let rect = Rect::from_ltwh(slot.x, layout.value_y(p.value), slot.width, layout.pixel_height(p.value));
        out.fill_rect(rect.sorted(), p.color);
    }
}

pub struct LineMarks;

impl LineMarks {
    fn point_at(layout: &Layout, points: &[DataPoint], index: usize) -> Point {
        Point::new(layout.slot(index).center_x(), layout.value_y(points[index].value))
    }
}

impl Marks for LineMarks {
    /// Segment to the next point first, then the point itself on top.
    fn draw_item(
        &self,
        layout: &Layout,
        config: &RenderConfig,
        points: &[DataPoint],
        index: usize,
        out: &mut dyn DrawSurface,
    ) {
        let here = Self::point_at(layout, points, index);
        if index + 1 < points.len() {
            let next = Self::point_at(layout, points, index + 1);
            out.draw_line(here, next, config.axis_stroke_width, config.line_color);
        }
        let color = points[index].color;
        match config.point_style {
            PointStyle::Fill => out.fill_circle(here, config.point_radius, color),
            PointStyle::Stroke => {
                out.stroke_circle(here, config.point_radius, config.axis_stroke_width, color)
            }
        }
    }
}
