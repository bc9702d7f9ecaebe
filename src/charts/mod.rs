//! Charts module - scales, scene building and rendering

pub mod color;
pub mod map_chart;
pub mod metric_chart;
pub mod projection;
mod renderer;
pub mod scale;
pub mod scene;
pub mod year_chart;

pub use renderer::{ChartRenderer, RenderError};
pub use scene::{Scene, TextRole};
