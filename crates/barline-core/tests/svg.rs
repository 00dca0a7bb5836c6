// File: crates/barline-core/tests/svg.rs
// Purpose: SVG backend output for a small bar and line chart.

use barline_core::{to_svg, ApproxTextMeasurer, Chart, Color, DataPoint, PointStyle, RenderConfig, Surface};

fn chart_svg(chart: &Chart) -> String {
    let surface = Surface::new(200.0, 200.0);
    let list = chart.render(surface, &ApproxTextMeasurer::default()).expect("render");
    to_svg(&list, surface, Some(Color::WHITE))
}

#[test]
fn bar_chart_svg_elements() {
    let chart = Chart::bar()
        .with_config(RenderConfig::default().with_range(0, 100))
        .with_points(vec![
            DataPoint::new(50.0, "a<b", Color::from_rgb(255, 0, 0)),
            DataPoint::new(100.0, "c&d", Color::from_rgb(0, 0, 255)),
        ]);
    let svg = chart_svg(&chart);

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"200\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    // background + 2 bars
    assert_eq!(svg.matches("<rect ").count(), 3);
    assert!(svg.contains("fill=\"#ff0000\""));
    assert!(svg.contains("fill=\"#0000ff\""));
    // axis color carries alpha
    assert!(svg.contains("stroke-opacity=\"0.200\""));
    assert!(svg.contains(">a&lt;b</text>"));
    assert!(svg.contains(">c&amp;d</text>"));
    assert!(svg.contains("text-anchor=\"middle\""));
}

#[test]
fn line_chart_svg_elements() {
    let chart = Chart::line().with_points(vec![
        DataPoint::new(10.0, "1", Color::BLACK),
        DataPoint::new(20.0, "2", Color::BLACK),
        DataPoint::new(30.0, "3", Color::BLACK),
    ]);
    let svg = chart_svg(&chart);
    assert_eq!(svg.matches("<circle ").count(), 3);
    // 2 segments + x axis + y axis
    assert_eq!(svg.matches("<line ").count(), 4);
    assert_eq!(svg.matches("<rect ").count(), 1);
}

#[test]
fn stroked_points_have_no_fill() {
    let chart = Chart::line()
        .with_config(RenderConfig::default().with_point_style(PointStyle::Stroke))
        .with_points(vec![DataPoint::new(10.0, "1", Color::from_rgb(255, 0, 0)), DataPoint::new(20.0, "2", Color::BLACK)]);
    let svg = chart_svg(&chart);
    assert_eq!(svg.matches("<circle ").count(), 2);
    assert_eq!(svg.matches("fill=\"none\" stroke=").count(), 2);
    assert!(svg.contains("fill=\"none\" stroke=\"#ff0000\" stroke-width=\"2\""));
}
