// File: crates/barline-core/tests/properties.rs
// Purpose: Property checks over random surfaces, ratios and datasets.

use barline_core::grid::guidelines;
use barline_core::{render, ApproxTextMeasurer, ChartKind, Color, DataPoint, Layout, RenderConfig, Surface};
use proptest::prelude::*;

fn config(space: f32, padding: f32, max: i64) -> RenderConfig {
    RenderConfig::default().with_space_ratio(space).with_padding_ratio(padding).with_range(0, max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn slots_and_gaps_fill_plot_width(
        width in 10.0f32..4000.0,
        height in 10.0f32..4000.0,
        space in 0.05f32..=1.0,
        padding in 0.0f32..0.99,
        n in 1usize..200,
    ) {
        let layout = Layout::compute(Surface::new(width, height), &config(space, padding, 100), n).unwrap();
        let total = n as f32 * layout.item_width + (n as f32 + 1.0) * layout.padding_unit;
        prop_assert!((total - layout.plot_width).abs() <= layout.plot_width * 1e-4 + 1e-3,
            "total {} vs plot {}", total, layout.plot_width);
    }

    #[test]
    fn slots_stay_on_surface(
        width in 10.0f32..4000.0,
        space in 0.05f32..=1.0,
        padding in 0.0f32..0.99,
        n in 1usize..200,
    ) {
        let layout = Layout::compute(Surface::new(width, 300.0), &config(space, padding, 100), n).unwrap();
        let tol = width * 1e-5;
        for slot in layout.slots() {
            prop_assert!(slot.x >= 0.0);
            prop_assert!(slot.x + slot.width <= width + tol, "slot {} ends at {}", slot.index, slot.right());
        }
    }

    #[test]
    fn max_value_reaches_plot_top(height in 1.0f32..4000.0, space in 0.05f32..=1.0, max in 1i64..1_000_000) {
        let layout = Layout::compute(Surface::new(100.0, height), &config(space, 0.5, max), 1).unwrap();
        prop_assert_eq!(layout.pixel_height(max as f64), layout.plot_height);
        prop_assert_eq!(layout.value_y(max as f64), 0.0);
        prop_assert_eq!(layout.value_y(0.0), layout.plot_height);
    }

    #[test]
    fn guideline_count_is_exact(count in 0u32..500, max in 1i64..1000, plot_height in 1.0f32..2000.0) {
        let g = guidelines(count, max, plot_height);
        prop_assert_eq!(g.len(), count as usize);
    }

    #[test]
    fn render_is_pure(values in prop::collection::vec(-50.0f64..150.0, 0..40), guides in 0u32..6) {
        let pts = values
            .iter()
            .enumerate()
            .map(|(i, &v)| DataPoint::new(v, i.to_string(), Color::BLACK))
            .collect::<Vec<_>>();
        let cfg = config(0.9, 0.5, 100).with_guidelines(guides);
        let m = ApproxTextMeasurer::default();
        for kind in [ChartKind::Bar, ChartKind::Line] {
            let a = render(Surface::new(320.0, 240.0), &cfg, &pts, kind, &m).unwrap();
            let b = render(Surface::new(320.0, 240.0), &cfg, &pts, kind, &m).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
