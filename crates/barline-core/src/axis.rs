// File: crates/barline-core/src/axis.rs
// Summary: Axis lines, guidelines, y-axis value labels and x labels.

use tracing::warn;

use crate::config::RenderConfig;
use crate::draw::DrawSurface;
use crate::layout::{Layout, Slot};
use crate::text::{Font, TextAlign, TextMeasurer};
use crate::types::Point;

/// Gap between the surface top and the max label's ink.
const TOP_LABEL_OFFSET: f32 = 4.0;

fn label_font(config: &RenderConfig) -> Font {
    Font::new(config.label_size)
}

/// Horizontal center for y-axis labels inside the left margin.
fn y_label_x(layout: &Layout, config: &RenderConfig) -> f32 {
    layout.margin_left / 2.0 - config.axis_stroke_width
}

/// Guideline strokes across the plot width, each with its value label.
pub fn draw_guidelines(
    layout: &Layout,
    config: &RenderConfig,
    measurer: &dyn TextMeasurer,
    out: &mut dyn DrawSurface,
) {
    let font = label_font(config);
    let label_x = y_label_x(layout, config);
    for g in layout.guidelines(config.count_of_guidelines) {
        out.draw_line(
            Point::new(layout.margin_left, g.y),
            Point::new(layout.surface.width, g.y),
            config.guideline_stroke_width,
            config.guideline_color,
        );
        if config.y_label {
            let text = g.value.to_string();
            let m = measurer.measure(&text, &font);
            out.draw_text(
                &text,
                Point::new(label_x, g.y + m.height / 2.0),
                TextAlign::Center,
                &font,
                config.y_label_color,
            );
        }
    }
}

/// Max label near the top, min label on the plot floor.
pub fn draw_value_labels(
    layout: &Layout,
    config: &RenderConfig,
    measurer: &dyn TextMeasurer,
    out: &mut dyn DrawSurface,
) {
    if !config.y_label {
        return;
    }
    let font = label_font(config);
    let x = y_label_x(layout, config);

    let max_text = config.max_value.to_string();
    let max_m = measurer.measure(&max_text, &font);
    out.draw_text(
        &max_text,
        Point::new(x, max_m.height + TOP_LABEL_OFFSET),
        TextAlign::Center,
        &font,
        config.y_label_color,
    );

    let min_text = config.min_value.to_string();
    let min_m = measurer.measure(&min_text, &font);
    out.draw_text(&min_text, Point::new(x, layout.floor_y()), TextAlign::Center, &font, config.y_label_color);

    let widest = max_m.width.max(min_m.width);
    if widest > layout.margin_left {
        warn!(
            label_width = widest,
            margin = layout.margin_left,
            "y-axis label wider than the left margin; it will clip"
        );
    }
}

/// Item label centered under its slot, below the x axis.
pub fn draw_x_label(
    layout: &Layout,
    config: &RenderConfig,
    measurer: &dyn TextMeasurer,
    slot: &Slot,
    label: &str,
    out: &mut dyn DrawSurface,
) {
    let font = label_font(config);
    let m = measurer.measure(label, &font);
    let baseline = layout.floor_y() + m.height + config.axis_stroke_width + config.label_vertical_padding;
    out.draw_text(label, Point::new(slot.center_x(), baseline), TextAlign::Center, &font, config.x_label_color);
}

/// X axis along the floor and Y axis along the margin edge.
/// Drawn after the marks so they stay on top.
pub fn draw_axis_lines(layout: &Layout, config: &RenderConfig, out: &mut dyn DrawSurface) {
    let s = config.axis_stroke_width;
    let half = s / 2.0;
    let floor = layout.floor_y();

    if config.x_axis {
        out.draw_line(
            Point::new(layout.margin_left - half, floor + half),
            Point::new(layout.surface.width, floor + half),
            s,
            config.x_axis_color,
        );
    }
    if config.y_axis {
        let x = layout.margin_left - s;
        out.draw_line(Point::new(x, 0.0), Point::new(x, floor + s), s, config.y_axis_color);
    }
}
