// File: crates/barline-core/src/error.rs
// Summary: Error types for configuration, surface and data validation.

use thiserror::Error;

/// Result alias used across the core crate.
pub type ChartResult<T> = Result<T, ChartError>;

/// Rejected `RenderConfig` values. Reported before anything is drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_value ({max}) must be greater than min_value ({min})")]
    EmptyRange { min: i64, max: i64 },

    #[error("max_value must not be zero (value-to-pixel ratio would be infinite)")]
    ZeroMaxValue,

    #[error("{name} must lie in {range}, got {value}")]
    RatioOutOfRange { name: &'static str, range: &'static str, value: f32 },

    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },

    #[error("data point {index} ({label:?}) has non-finite value {value}")]
    NonFiniteValue { index: usize, label: String, value: f64 },

    /// A single point rejected on construction, before it belongs to a dataset.
    #[error("data point {label:?} has non-finite value {value}")]
    NonFinitePoint { label: String, value: f64 },
}
