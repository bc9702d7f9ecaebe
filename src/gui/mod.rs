//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;

pub use app::{export_svgs, FootballChartsApp};
pub use chart_viewer::{ChartSlot, ChartViewer};
pub use control_panel::{ControlPanel, ControlPanelAction, METRICS};
