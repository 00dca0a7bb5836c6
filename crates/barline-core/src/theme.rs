// File: crates/barline-core/src/theme.rs
// Summary: Light/Dark color presets for axes, guidelines, labels and marks.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub guideline: Color,
    pub axis_label: Color,
    pub line_stroke: Color,
    /// Suggested fill for data points that do not pick their own color.
    pub mark: Color,
}

impl Theme {
    /// Axis and line colors are the on-surface color at 20% alpha.
    pub fn light() -> Self {
        let on_surface = Color::BLACK;
        Self {
            name: "light",
            background: Color::WHITE,
            axis_line: on_surface.with_alpha(0.2),
            guideline: on_surface.with_alpha(0.1),
            axis_label: on_surface,
            line_stroke: on_surface.with_alpha(0.2),
            mark: Color::from_rgb(0x62, 0x00, 0xee), // material primary
        }
    }

    pub fn dark() -> Self {
        let on_surface = Color::WHITE;
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            axis_line: on_surface.with_alpha(0.2),
            guideline: on_surface.with_alpha(0.1),
            axis_label: Color::from_rgb(235, 235, 245),
            line_stroke: on_surface.with_alpha(0.2),
            mark: Color::from_rgb(0xbb, 0x86, 0xfc),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::BLACK,
            axis_line: Color::WHITE,
            guideline: Color::from_rgb(0x44, 0x44, 0x44),
            axis_label: Color::WHITE,
            line_stroke: Color::from_rgb(0x00, 0xff, 0xff),
            mark: Color::from_rgb(0xff, 0xff, 0x00),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
