// File: crates/barline-core/src/config.rs
// Summary: Render configuration shared by bar and line charts, with defaults and validation.

use crate::error::ConfigError;
use crate::marks::PointStyle;
use crate::scale::ValuePolicy;
use crate::theme::Theme;
use crate::types::Color;

/// Options recognized by both chart kinds.
///
/// `padding_ratio` is the bar padding ratio for bar charts and the point
/// padding ratio for line charts; `space_ratio` is the share of the surface
/// given to the plot area in both.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub min_value: i64,
    pub max_value: i64,
    pub count_of_guidelines: u32,

    pub axis_stroke_width: f32,
    pub guideline_stroke_width: f32,
    pub point_radius: f32,
    pub label_size: f32,
    pub label_vertical_padding: f32,

    /// Share of the plot width spent on gaps between items, in `[0, 1)`.
    pub padding_ratio: f32,
    /// Share of the surface reserved for the plot area, in `(0, 1]`.
    pub space_ratio: f32,

    pub x_axis: bool,
    pub y_axis: bool,
    pub x_label: bool,
    /// Min/max and guideline value labels.
    pub y_label: bool,

    pub x_axis_color: Color,
    pub y_axis_color: Color,
    pub guideline_color: Color,
    pub line_color: Color,
    pub x_label_color: Color,
    pub y_label_color: Color,

    pub value_policy: ValuePolicy,
    /// Line charts only.
    pub point_style: PointStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::themed(&Theme::light())
    }
}

impl RenderConfig {
    /// Defaults with every color option taken from `theme`.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            min_value: 0,
            max_value: 100,
            count_of_guidelines: 0,
            axis_stroke_width: 2.0,
            guideline_stroke_width: 1.0,
            point_radius: 5.0,
            label_size: 16.0,
            label_vertical_padding: 8.0,
            padding_ratio: 0.5,
            space_ratio: 0.9,
            x_axis: true,
            y_axis: true,
            x_label: true,
            y_label: true,
            x_axis_color: theme.axis_line,
            y_axis_color: theme.axis_line,
            guideline_color: theme.guideline,
            line_color: theme.line_stroke,
            x_label_color: theme.axis_label,
            y_label_color: theme.axis_label,
            value_policy: ValuePolicy::Overflow,
            point_style: PointStyle::Fill,
        }
    }

    pub fn with_range(mut self, min_value: i64, max_value: i64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_guidelines(mut self, count: u32) -> Self {
        self.count_of_guidelines = count;
        self
    }

    pub fn with_space_ratio(mut self, ratio: f32) -> Self {
        self.space_ratio = ratio;
        self
    }

    pub fn with_padding_ratio(mut self, ratio: f32) -> Self {
        self.padding_ratio = ratio;
        self
    }

    pub fn with_axis_stroke_width(mut self, width: f32) -> Self {
        self.axis_stroke_width = width;
        self
    }

    pub fn with_point_radius(mut self, radius: f32) -> Self {
        self.point_radius = radius;
        self
    }

    pub fn with_label_size(mut self, size: f32, vertical_padding: f32) -> Self {
        self.label_size = size;
        self.label_vertical_padding = vertical_padding;
        self
    }

    pub fn with_axes(mut self, x_axis: bool, y_axis: bool) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }

    pub fn with_labels(mut self, x_label: bool, y_label: bool) -> Self {
        self.x_label = x_label;
        self.y_label = y_label;
        self
    }

    pub fn with_axis_color(mut self, color: Color) -> Self {
        self.x_axis_color = color;
        self.y_axis_color = color;
        self
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_value_policy(mut self, policy: ValuePolicy) -> Self {
        self.value_policy = policy;
        self
    }

    pub fn with_point_style(mut self, style: PointStyle) -> Self {
        self.point_style = style;
        self
    }

    /// Check every option; the first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_value <= self.min_value {
            return Err(ConfigError::EmptyRange { min: self.min_value, max: self.max_value });
        }
        if self.max_value == 0 {
            return Err(ConfigError::ZeroMaxValue);
        }

        let pr = self.padding_ratio;
        if !(pr.is_finite() && (0.0..1.0).contains(&pr)) {
            return Err(ConfigError::RatioOutOfRange { name: "padding_ratio", range: "[0, 1)", value: pr });
        }
        let sr = self.space_ratio;
        if !(sr.is_finite() && sr > 0.0 && sr <= 1.0) {
            return Err(ConfigError::RatioOutOfRange { name: "space_ratio", range: "(0, 1]", value: sr });
        }

        for (name, value) in [
            ("axis_stroke_width", self.axis_stroke_width),
            ("guideline_stroke_width", self.guideline_stroke_width),
            ("point_radius", self.point_radius),
            ("label_size", self.label_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        let lvp = self.label_vertical_padding;
        if !(lvp.is_finite() && lvp >= 0.0) {
            return Err(ConfigError::Negative { name: "label_vertical_padding", value: lvp });
        }
        Ok(())
    }
}
