// File: crates/barline-core/src/chart.rs
// Summary: Chart struct and the paint pipeline producing an ordered draw list.

use tracing::{debug, trace, warn};

use crate::axis::{draw_axis_lines, draw_guidelines, draw_value_labels, draw_x_label};
use crate::config::RenderConfig;
use crate::draw::{DrawList, DrawSurface};
use crate::error::ChartResult;
use crate::layout::Layout;
use crate::marks::ChartKind;
use crate::scale::ValuePolicy;
use crate::series::{count_out_of_range, validate_points, DataPoint};
use crate::text::TextMeasurer;
use crate::types::Surface;

/// Paint one chart into a fresh draw list.
///
/// Order: guidelines and y labels, then each item's mark followed by its x
/// label, then the axis lines on top. Errors come back before anything is
/// recorded. A zero-area surface yields an empty list.
pub fn render(
    surface: Surface,
    config: &RenderConfig,
    points: &[DataPoint],
    kind: ChartKind,
    measurer: &dyn TextMeasurer,
) -> ChartResult<DrawList> {
    let layout = Layout::compute(surface, config, points.len())?;
    validate_points(points)?;

    let mut out = DrawList::new();
    if surface.is_empty() {
        debug!(width = surface.width, height = surface.height, "empty surface, nothing to paint");
        return Ok(out);
    }

    debug!(
        kind = kind.name(),
        items = points.len(),
        plot_width = layout.plot_width,
        plot_height = layout.plot_height,
        margin_left = layout.margin_left,
        item_width = layout.item_width,
        padding = layout.padding_unit,
        "paint"
    );
    if config.value_policy == ValuePolicy::Overflow {
        let outside = count_out_of_range(points, config.min_value, config.max_value);
        if outside > 0 {
            warn!(outside, min = config.min_value, max = config.max_value, "values outside range are drawn unclamped");
        }
    }

    draw_guidelines(&layout, config, measurer, &mut out);
    draw_value_labels(&layout, config, measurer, &mut out);

    let marks = kind.marks();
    for slot in layout.slots() {
        let p = &points[slot.index];
        trace!(index = slot.index, x = slot.x, value = p.value, "item");
        marks.draw_item(&layout, config, points, slot.index, &mut out);
        if config.x_label {
            draw_x_label(&layout, config, measurer, &slot, &p.label, &mut out);
        }
    }

    draw_axis_lines(&layout, config, &mut out);
    Ok(out)
}

/// A bar or line chart: configuration plus the items to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub config: RenderConfig,
    pub points: Vec<DataPoint>,
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        Self { kind, config: RenderConfig::default(), points: Vec::new() }
    }

    pub fn bar() -> Self {
        Self::new(ChartKind::Bar)
    }

    pub fn line() -> Self {
        Self::new(ChartKind::Line)
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        self.points = points;
        self
    }

    pub fn add_point(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn layout(&self, surface: Surface) -> ChartResult<Layout> {
        Layout::compute(surface, &self.config, self.points.len())
    }

    pub fn render(&self, surface: Surface, measurer: &dyn TextMeasurer) -> ChartResult<DrawList> {
        render(surface, &self.config, &self.points, self.kind, measurer)
    }

    /// Render, then replay onto `target`. On error `target` is left untouched.
    pub fn render_into<S: DrawSurface + ?Sized>(
        &self,
        surface: Surface,
        measurer: &dyn TextMeasurer,
        target: &mut S,
    ) -> ChartResult<()> {
        let list = self.render(surface, measurer)?;
        list.replay(target);
        Ok(())
    }
}
