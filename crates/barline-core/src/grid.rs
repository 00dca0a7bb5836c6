// File: crates/barline-core/src/grid.rs
// Summary: Horizontal guideline layout (values and y positions).

/// One horizontal reference line between the plot top and floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guideline {
    /// 1-based, counted from the top.
    pub index: u32,
    pub value: i64,
    pub y: f32,
}

/// Evenly spaced guidelines for `count` lines over a plot of `plot_height`.
///
/// The value step is `max_value / (count + 1)` with floor division, so small
/// ranges may repeat or reach zero; exactly `count` entries come back either way.
pub fn guidelines(count: u32, max_value: i64, plot_height: f32) -> Vec<Guideline> {
    if count == 0 {
        return Vec::new();
    }
    let parts = count as i64 + 1;
    let value_step = max_value.div_euclid(parts);
    let y_step = plot_height / parts as f32;
    (1..=count)
        .map(|k| Guideline {
            index: k,
            value: max_value - k as i64 * value_step,
            y: k as f32 * y_step,
        })
        .collect()
}
