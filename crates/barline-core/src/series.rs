// File: crates/barline-core/src/series.rs
// Summary: Data model for one chart item (value, label, color) plus dataset checks.

use crate::error::{ChartError, ChartResult};
use crate::types::Color;

/// One labeled value. The dataset order is the left-to-right drawing order.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub value: f64,
    pub label: String,
    pub color: Color,
}

impl DataPoint {
    pub fn new(value: f64, label: impl Into<String>, color: Color) -> Self {
        Self { value, label: label.into(), color }
    }

    /// Construct a point rejecting NaN and infinite values.
    pub fn try_new(value: f64, label: impl Into<String>, color: Color) -> ChartResult<Self> {
        let label = label.into();
        if !value.is_finite() {
            return Err(ChartError::NonFinitePoint { label, value });
        }
        Ok(Self { value, label, color })
    }
}

/// Reject datasets containing non-finite values; the error carries the offending index.
pub fn validate_points(points: &[DataPoint]) -> ChartResult<()> {
    match points.iter().position(|p| !p.value.is_finite()) {
        Some(index) => Err(ChartError::NonFiniteValue {
            index,
            label: points[index].label.clone(),
            value: points[index].value,
        }),
        None => Ok(()),
    }
}

/// Number of points whose value falls outside `[min, max]`.
pub fn count_out_of_range(points: &[DataPoint], min: i64, max: i64) -> usize {
    let (lo, hi) = (min as f64, max as f64);
    points.iter().filter(|p| p.value < lo || p.value > hi).count()
}
