//! Football Charts - World Cup statistics viewer
//!
//! Desktop window showing games per year, the top ten nations on a world map
//! and a per-nation metric chart.

use eframe::egui;
use football_charts::config::AppConfig;
use football_charts::gui::FootballChartsApp;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    info!(
        years = %config.sources.year_counts,
        boundaries = %config.sources.world_boundaries,
        "starting football charts"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.initial_window_width as f32, 800.0])
            .with_min_inner_size([config.layout.min_viewport_width as f32, 700.0])
            .with_title("Football Charts"),
        ..Default::default()
    };

    eframe::run_native(
        "Football Charts",
        options,
        Box::new(move |cc| Ok(Box::new(FootballChartsApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run window: {}", e))
}
