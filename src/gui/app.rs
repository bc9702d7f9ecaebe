//! Football Charts Main Application
//! Main window with control panel and the three chart mount points.

use crate::charts::ChartRenderer;
use crate::config::AppConfig;
use crate::controller::{ChartController, ChartId, RenderedChart};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, METRICS};
use egui::SidePanel;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Main application window.
pub struct FootballChartsApp {
    controller: ChartController,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl FootballChartsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let chart_viewer = ChartViewer::new(config.tooltip);
        let controller = ChartController::new(config);
        controller.load_all();

        Self {
            controller,
            control_panel: ControlPanel::new(),
            chart_viewer,
        }
    }

    /// Pick up charts finished by background loads.
    fn check_updates(&mut self) {
        for update in self.controller.poll() {
            match &update.outcome {
                Ok(_) => info!(chart = update.chart.label(), "chart ready"),
                Err(message) => self
                    .control_panel
                    .set_status(format!("{} failed: {}", update.chart.label(), message)),
            }
            self.chart_viewer.apply(update);
        }

        self.control_panel.export_enabled = !self.chart_viewer.ready_charts().is_empty();
        if !self.chart_viewer.is_loading() && self.control_panel.status.starts_with("Loading") {
            self.control_panel.set_status("Charts ready");
        }
    }

    fn handle_set_metric(&mut self, index: usize, field: &str) {
        self.chart_viewer.set_pending(ChartId::Metric);
        self.control_panel.set_status("Loading metric...");
        self.controller.set_data(index, field);
    }

    fn handle_reload(&mut self, window_width: f64) {
        self.controller.set_window_width(window_width);
        for id in ChartId::ALL {
            self.chart_viewer.set_pending(id);
        }
        self.control_panel.set_status("Loading charts...");
        self.controller.load_years();
        self.controller.load_map();
        let (index, field) = METRICS[self.control_panel.selected_metric];
        self.controller.set_data(index, field);
    }

    /// Handle SVG export - write every ready chart into a chosen folder
    fn handle_export_svg(&mut self) {
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return; // User cancelled
        };

        let charts = self.chart_viewer.ready_charts();
        match export_svgs(&charts, &dir) {
            Ok(written) => {
                self.control_panel
                    .set_status(format!("Exported {} charts to {}", written.len(), dir.display()));
                if let Err(e) = open::that(&dir) {
                    error!(error = %e, "could not open export folder");
                }
            }
            Err(e) => {
                error!(error = %e, "svg export failed");
                self.control_panel.set_status(format!("Export error: {}", e));
            }
        }
    }
}

fn export_file_name(id: ChartId, chart: &RenderedChart) -> String {
    match (id, chart.field.as_deref()) {
        (ChartId::Years, _) => "games_by_year.svg".to_string(),
        (ChartId::Map, _) => "top_nations_map.svg".to_string(),
        (ChartId::Metric, Some(field)) => format!("nations_by_{}.svg", field),
        (ChartId::Metric, None) => "nations_by_metric.svg".to_string(),
    }
}

/// Render charts to SVG in parallel and write them into `dir`.
pub fn export_svgs(charts: &[(ChartId, &RenderedChart)], dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    charts
        .par_iter()
        .map(|(id, chart)| {
            let svg = ChartRenderer::render_svg(&chart.scene)?;
            let path = dir.join(export_file_name(*id, chart));
            std::fs::write(&path, svg)?;
            Ok(path)
        })
        .collect()
}

impl eframe::App for FootballChartsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_updates();

        // Keep polling while loads are in flight
        if self.chart_viewer.is_loading() {
            ctx.request_repaint();
        }

        let window_width = ctx.screen_rect().width() as f64;

        SidePanel::left("control_panel")
            .min_width(220.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                match self.control_panel.show(ui) {
                    ControlPanelAction::SetMetric { index, field } => {
                        self.handle_set_metric(index, &field)
                    }
                    ControlPanelAction::Reload => self.handle_reload(window_width),
                    ControlPanelAction::ExportSvg => self.handle_export_svg(),
                    ControlPanelAction::None => {}
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ctx, ui);
        });
    }
}
