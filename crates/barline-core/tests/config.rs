// File: crates/barline-core/tests/config.rs
// Purpose: Configuration defaults, validation failures and theme lookup.

use barline_core::theme::{self, Theme};
use barline_core::{Color, ConfigError, PointStyle, RenderConfig, Surface, ValuePolicy};

#[test]
fn defaults_match_widget_defaults() {
    let c = RenderConfig::default();
    assert_eq!((c.min_value, c.max_value), (0, 100));
    assert_eq!(c.count_of_guidelines, 0);
    assert_eq!(c.axis_stroke_width, 2.0);
    assert_eq!(c.point_radius, 5.0);
    assert_eq!(c.label_size, 16.0);
    assert_eq!(c.label_vertical_padding, 8.0);
    assert_eq!(c.padding_ratio, 0.5);
    assert_eq!(c.space_ratio, 0.9);
    assert!(c.x_axis && c.y_axis && c.x_label && c.y_label);
    assert_eq!(c.value_policy, ValuePolicy::Overflow);
    assert_eq!(c.point_style, PointStyle::Fill);
    assert!(c.validate().is_ok());
}

#[test]
fn rejects_inverted_or_empty_range() {
    let err = RenderConfig::default().with_range(10, 10).validate().unwrap_err();
    assert_eq!(err, ConfigError::EmptyRange { min: 10, max: 10 });
    let err = RenderConfig::default().with_range(50, 5).validate().unwrap_err();
    assert_eq!(err, ConfigError::EmptyRange { min: 50, max: 5 });
}

#[test]
fn rejects_zero_max() {
    let err = RenderConfig::default().with_range(-5, 0).validate().unwrap_err();
    assert_eq!(err, ConfigError::ZeroMaxValue);
}

#[test]
fn rejects_ratios_out_of_range() {
    for bad in [1.0, 1.5, -0.1, f32::NAN] {
        let err = RenderConfig::default().with_padding_ratio(bad).validate().unwrap_err();
        assert!(matches!(err, ConfigError::RatioOutOfRange { name: "padding_ratio", .. }), "{bad}");
    }
    for bad in [0.0, 1.01, -1.0, f32::INFINITY] {
        let err = RenderConfig::default().with_space_ratio(bad).validate().unwrap_err();
        assert!(matches!(err, ConfigError::RatioOutOfRange { name: "space_ratio", .. }), "{bad}");
    }
    assert!(RenderConfig::default().with_padding_ratio(0.0).validate().is_ok());
    assert!(RenderConfig::default().with_space_ratio(1.0).validate().is_ok());
}

#[test]
fn rejects_non_positive_sizes() {
    let err = RenderConfig::default().with_axis_stroke_width(0.0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { name: "axis_stroke_width", .. }));
    let err = RenderConfig::default().with_point_radius(-1.0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { name: "point_radius", .. }));
    let err = RenderConfig::default().with_label_size(0.0, 8.0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { name: "label_size", .. }));
    let err = RenderConfig::default().with_label_size(16.0, -2.0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::Negative { name: "label_vertical_padding", .. }));
}

#[test]
fn surface_validation() {
    assert!(Surface::new(0.0, 10.0).validate().is_ok());
    assert!(Surface::new(0.0, 10.0).is_empty());
    assert!(Surface::new(-1.0, 10.0).validate().is_err());
    assert!(Surface::new(10.0, f32::NAN).validate().is_err());
}

#[test]
fn themed_config_takes_theme_colors() {
    let t = Theme::dark();
    let c = RenderConfig::themed(&t);
    assert_eq!(c.x_axis_color, t.axis_line);
    assert_eq!(c.guideline_color, t.guideline);
    assert_eq!(c.line_color, t.line_stroke);
    assert_eq!(c.y_label_color, t.axis_label);
}

#[test]
fn theme_lookup_is_case_insensitive_with_fallback() {
    assert_eq!(theme::find("DARK").name, "dark");
    assert_eq!(theme::find("high-contrast-dark").name, "high-contrast-dark");
    assert_eq!(theme::find("no-such-theme").name, "light");
    assert_eq!(theme::presets().len(), 3);
}

#[test]
fn light_axis_is_translucent_on_surface() {
    assert_eq!(Theme::light().axis_line, Color::from_argb(51, 0, 0, 0));
}

#[test]
fn parses_hex_colors() {
    assert_eq!(Color::parse_hex("#ff0080"), Some(Color::from_rgb(255, 0, 128)));
    assert_eq!(Color::parse_hex("f08"), Some(Color::from_rgb(255, 0, 136)));
    assert_eq!(Color::parse_hex("#11223344"), Some(Color::from_argb(0x44, 0x11, 0x22, 0x33)));
    assert_eq!(Color::parse_hex("#zzzzzz"), None);
    assert_eq!(Color::parse_hex(""), None);
}
