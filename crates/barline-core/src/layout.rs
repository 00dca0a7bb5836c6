// File: crates/barline-core/src/layout.rs
// Summary: Layout engine shared by bar and line charts: plot area, item slots, guidelines.
// Notes:
// - The plot area sits at the top-right of the surface. The left margin holds
//   y labels and the bottom margin holds x labels.
// - The left margin is sized from `space_ratio` alone, never from label
//   widths, so long labels can clip.

use crate::config::RenderConfig;
use crate::error::ChartResult;
use crate::geometry::Rect;
use crate::grid::{guidelines, Guideline};
use crate::scale::{Value, ValueScale};
use crate::types::Surface;

/// Horizontal span allocated to one data item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub x: f32,
    pub width: f32,
}

impl Slot {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Geometry of one paint. Recomputed from scratch every time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub surface: Surface,
    pub plot_width: f32,
    pub plot_height: f32,
    pub margin_left: f32,
    pub margin_bottom: f32,
    /// Gap before each item (and after the last).
    pub padding_unit: f32,
    pub item_width: f32,
    pub item_count: usize,
    pub scale: ValueScale,
}

impl Layout {
    /// Validate `config` and `surface`, then compute geometry for `item_count` items.
    pub fn compute(surface: Surface, config: &RenderConfig, item_count: usize) -> ChartResult<Self> {
        config.validate()?;
        surface.validate()?;

        let plot_width = surface.width * config.space_ratio;
        let plot_height = surface.height * config.space_ratio;
        let margin_left = surface.width - plot_width;
        let margin_bottom = surface.height - plot_height;

        let (padding_unit, item_width) = if item_count > 0 {
            let n = item_count as f32;
            (
                plot_width * config.padding_ratio / (n + 1.0),
                plot_width * (1.0 - config.padding_ratio) / n,
            )
        } else {
            (0.0, 0.0)
        };

        let scale = ValueScale::new(plot_height, config.min_value, config.max_value, config.value_policy);

        Ok(Self {
            surface,
            plot_width,
            plot_height,
            margin_left,
            margin_bottom,
            padding_unit,
            item_width,
            item_count,
            scale,
        })
    }

    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltrb(self.margin_left, 0.0, self.surface.width, self.plot_height)
    }

    /// Y of the plot floor (value zero).
    pub fn floor_y(&self) -> f32 {
        self.plot_height
    }

    pub fn value_to_pixel_ratio(&self) -> f64 {
        self.scale.value_to_pixel_ratio()
    }

    /// Slot of item `index`, for `index < item_count`.
    pub fn slot(&self, index: usize) -> Slot {
        let i = index as f32;
        let x = (i + 1.0) * self.padding_unit + i * self.item_width + self.margin_left;
        Slot { index, x, width: self.item_width }
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.item_count).map(move |i| self.slot(i))
    }

    pub fn pixel_height(&self, value: Value) -> f32 {
        self.scale.pixel_height(value)
    }

    /// Top y of a mark with `value`.
    pub fn value_y(&self, value: Value) -> f32 {
        self.scale.to_px(value)
    }

    pub fn guidelines(&self, count: u32) -> Vec<Guideline> {
        guidelines(count, self.scale.max, self.plot_height)
    }
}
