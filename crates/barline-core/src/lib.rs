// File: crates/barline-core/src/lib.rs
// Summary: Core library entry point; bar/line chart layout and backend-agnostic rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod marks;
pub mod scale;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{render, Chart};
pub use config::RenderConfig;
pub use draw::{DrawCommand, DrawList, DrawSurface};
pub use error::{ChartError, ChartResult, ConfigError};
pub use geometry::Rect;
pub use grid::Guideline;
pub use layout::{Layout, Slot};
pub use marks::{BarMarks, ChartKind, LineMarks, Marks, PointStyle};
pub use scale::{ValuePolicy, ValueScale};
pub use series::DataPoint;
pub use svg::{to_svg, SvgSurface};
pub use text::{ApproxTextMeasurer, Font, TextAlign, TextMeasurer, TextMetrics};
pub use theme::Theme;
pub use types::{Color, Point, Surface};
