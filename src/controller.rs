//! Chart Controller
//! Runs load -> shape -> scale -> render for each chart on a background
//! thread and hands finished charts back to the UI thread over a channel.
//!
//! Loads are independent and unguarded: if `set_data` is called again before
//! an earlier load for the same chart finishes, both results are delivered
//! and whichever arrives last is what the viewer shows.

use crate::charts::{map_chart, metric_chart, year_chart, ChartRenderer, RenderError, Scene};
use crate::config::{AppConfig, LayoutConfig};
use crate::data::boundaries::{self, BoundaryFeature};
use crate::data::{
    top_ten, DataLoader, LoaderError, Resource, Row, SeriesShaper, ShapeError,
};
use image::RgbaImage;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tracing::{debug, error, info};

/// Metric shown when the window first opens.
pub const INITIAL_METRIC: (usize, &str) = (0, metric_chart::WIN_PERCENT_FIELD);

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("No metric resource at index {0}")]
    UnknownResource(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    Years,
    Map,
    Metric,
}

impl ChartId {
    pub const ALL: [ChartId; 3] = [ChartId::Years, ChartId::Map, ChartId::Metric];

    pub fn label(self) -> &'static str {
        match self {
            ChartId::Years => "Games by Year",
            ChartId::Map => "Top Nations Map",
            ChartId::Metric => "Nations by Metric",
        }
    }
}

/// A chart ready for display: its display list and a bitmap of it.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub scene: Scene,
    pub image: RgbaImage,
    /// Metric field, for the toggle chart.
    pub field: Option<String>,
}

#[derive(Debug)]
pub struct ChartUpdate {
    pub chart: ChartId,
    pub outcome: Result<RenderedChart, String>,
}

// Pipelines: pure from loaded data to scene.

pub fn years_scene(rows: &[Row], layout: &LayoutConfig, window_width: f64) -> Result<Scene, ShapeError> {
    let series = SeriesShaper::recent_years(rows)?;
    Ok(year_chart::build(&series, &year_chart::frame(layout, window_width)))
}

pub fn metric_scene(
    rows: &[Row],
    field: &str,
    layout: &LayoutConfig,
    window_width: f64,
) -> Result<Scene, ShapeError> {
    let metric = SeriesShaper::metric(rows, field)?;
    debug!(field, extent = metric.extent, teams = metric.series.len(), "shaped metric");
    Ok(metric_chart::build(&metric, &metric_chart::frame(layout, window_width)))
}

pub fn map_scene(boundaries: &[BoundaryFeature], layout: &LayoutConfig, window_width: f64) -> Scene {
    let frame = map_chart::frame(layout, window_width);
    let projection = map_chart::projection(layout, &frame);
    map_chart::build(boundaries, top_ten(), &projection, &frame)
}

fn rendered(scene: Scene, field: Option<String>) -> Result<RenderedChart, ControllerError> {
    let image = ChartRenderer::render_rgba(&scene)?;
    Ok(RenderedChart { scene, image, field })
}

pub struct ChartController {
    config: Arc<AppConfig>,
    window_width: f64,
    tx: Sender<ChartUpdate>,
    rx: Receiver<ChartUpdate>,
}

impl ChartController {
    pub fn new(config: AppConfig) -> Self {
        let (tx, rx) = channel();
        let window_width = config.initial_window_width;
        Self {
            config: Arc::new(config),
            window_width,
            tx,
            rx,
        }
    }

    /// Width used by loads started from now on.
    pub fn set_window_width(&mut self, width: f64) {
        self.window_width = width;
    }

    /// Start all three charts.
    pub fn load_all(&self) {
        self.load_years();
        self.load_map();
        self.set_data(INITIAL_METRIC.0, INITIAL_METRIC.1);
    }

    pub fn load_years(&self) {
        let resource = Resource::parse(&self.config.sources.year_counts);
        let config = Arc::clone(&self.config);
        let width = self.window_width;
        self.spawn(ChartId::Years, move || {
            let rows = DataLoader::load_rows(&resource)?;
            let scene = years_scene(&rows, &config.layout, width)?;
            rendered(scene, None)
        });
    }

    pub fn load_map(&self) {
        let resource = Resource::parse(&self.config.sources.world_boundaries);
        let config = Arc::clone(&self.config);
        let width = self.window_width;
        self.spawn(ChartId::Map, move || {
            let features = boundaries::load_boundaries(&resource)?;
            rendered(map_scene(&features, &config.layout, width), None)
        });
    }

    /// Reload the toggle chart from metric resource `index`, plotting `attr`.
    pub fn set_data(&self, index: usize, attr: &str) {
        info!(index, attr, "switching metric");
        let resource = self
            .config
            .sources
            .metric_tables
            .get(index)
            .map(|location| Resource::parse(location));
        let config = Arc::clone(&self.config);
        let width = self.window_width;
        let attr = attr.to_string();
        self.spawn(ChartId::Metric, move || {
            let resource = resource.ok_or(ControllerError::UnknownResource(index))?;
            let rows = DataLoader::load_rows(&resource)?;
            let scene = metric_scene(&rows, &attr, &config.layout, width)?;
            rendered(scene, Some(attr))
        });
    }

    fn spawn<F>(&self, chart: ChartId, job: F)
    where
        F: FnOnce() -> Result<RenderedChart, ControllerError> + Send + 'static,
    {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = job().map_err(|e| {
                error!(chart = chart.label(), error = %e, "chart failed");
                e.to_string()
            });
            // The receiver is gone only when the window has closed.
            let _ = tx.send(ChartUpdate { chart, outcome });
        });
    }

    /// Drain updates delivered since the last call.
    pub fn poll(&self) -> Vec<ChartUpdate> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::TextRole;
    use std::time::Duration;

    fn rows(pairs: &[(&str, &str)]) -> Vec<Row> {
        pairs
            .iter()
            .map(|(y, c)| Row::from_pairs([("year", *y), ("count", *c)]))
            .collect()
    }

    #[test]
    fn years_pipeline_shapes_before_drawing() {
        let layout = LayoutConfig::default();
        let scene = years_scene(
            &rows(&[("2022", "5"), ("2021", "8"), ("2020", "3")]),
            &layout,
            1200.0,
        )
        .unwrap();
        let keys: Vec<&str> = scene.bars().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["2020", "2021"]);
        let values: Vec<&str> = scene.texts(TextRole::Value).map(|t| t.content.as_str()).collect();
        assert_eq!(values, vec!["3", "8"]);
    }

    #[test]
    fn unknown_metric_index_fails_the_chart() {
        let controller = ChartController::new(AppConfig::default());
        controller.set_data(7, "pct");
        let update = controller.rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(update.chart, ChartId::Metric);
        assert_eq!(update.outcome.unwrap_err(), "No metric resource at index 7");
    }

    #[test]
    fn missing_year_resource_reports_error() {
        let mut config = AppConfig::default();
        config.sources.year_counts = "no/such/file.csv".to_string();
        let controller = ChartController::new(config);
        controller.load_years();
        let update = controller.rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(update.chart, ChartId::Years);
        assert!(update.outcome.unwrap_err().contains("no/such/file.csv"));
    }
}
