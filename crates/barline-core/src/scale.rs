// File: crates/barline-core/src/scale.rs
// Summary: Value (Y) scale mapping data values to pixel heights over the plot area.

use crate::geometry::clamp;

/// Data value (Y axis).
pub type Value = f64;

/// What happens to values outside `[min_value, max_value]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValuePolicy {
    /// Project as-is: values above the max rise past the plot top, negative
    /// values hang below the floor. Keeping them inside the surface is the
    /// caller's job.
    #[default]
    Overflow,
    /// Clamp into `[min_value, max_value]` before projecting.
    Clamp,
}

/// Vertical scale anchored at the plot floor.
///
/// Pixel height is proportional to the value itself, `plot_height / max_value`
/// pixels per unit; `min_value` only bounds clamping and labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub floor_px: f32,
    pub min: i64,
    pub max: i64,
    pub policy: ValuePolicy,
}

impl ValueScale {
    /// `max` must be non-zero; `RenderConfig::validate` guarantees it.
    pub fn new(floor_px: f32, min: i64, max: i64, policy: ValuePolicy) -> Self {
        Self { floor_px, min, max, policy }
    }

    /// Pixels per value unit.
    #[inline]
    pub fn value_to_pixel_ratio(&self) -> f64 {
        self.floor_px as f64 / self.max as f64
    }

    #[inline]
    pub fn effective(&self, v: Value) -> Value {
        match self.policy {
            ValuePolicy::Overflow => v,
            ValuePolicy::Clamp => clamp(v, self.min as f64, self.max as f64),
        }
    }

    /// Height in pixels above the floor; negative for negative values.
    /// `max` maps exactly to the floor offset and `0` to zero.
    #[inline]
    pub fn pixel_height(&self, v: Value) -> f32 {
        (self.floor_px as f64 * (self.effective(v) / self.max as f64)) as f32
    }

    /// Top y (surface coordinates) of a mark with value `v`.
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        self.floor_px - self.pixel_height(v)
    }
}
