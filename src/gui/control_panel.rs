//! Control Panel Widget
//! Left side panel with the metric selector, reload and export controls.

use crate::charts::metric_chart::MetricLabels;
use egui::{Color32, RichText};

/// Selectable metrics: resource index and the field plotted from it.
pub const METRICS: [(usize, &str); 2] = [(0, "pct"), (1, "rpi")];

/// Left side control panel.
pub struct ControlPanel {
    /// Index into [`METRICS`].
    pub selected_metric: usize,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            selected_metric: 0,
            status: "Loading charts...".to_string(),
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("⚽ Football Charts")
                    .size(22.0)
                    .color(Color32::from_rgb(150, 120, 182)),
            );
            ui.label(
                RichText::new("World Cup statistics")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Metric Section =====
        ui.label(RichText::new("📊 Nation Metric").size(14.0).strong());
        ui.add_space(5.0);

        for (i, (index, field)) in METRICS.iter().enumerate() {
            let name = MetricLabels::for_field(field).name;
            if ui.radio(self.selected_metric == i, name).clicked() && self.selected_metric != i {
                self.selected_metric = i;
                action = ControlPanelAction::SetMetric {
                    index: *index,
                    field: field.to_string(),
                };
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Actions =====
        ui.horizontal(|ui| {
            if ui.button("🔄 Reload").clicked() {
                action = ControlPanelAction::Reload;
            }
            if ui
                .add_enabled(self.export_enabled, egui::Button::new("💾 Export SVG"))
                .clicked()
            {
                action = ControlPanelAction::ExportSvg;
            }
        });

        ui.add_space(10.0);
        ui.label(RichText::new(&self.status).size(12.0).color(Color32::GRAY));

        action
    }
}

/// Actions triggered by the control panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    SetMetric { index: usize, field: String },
    Reload,
    ExportSvg,
}
