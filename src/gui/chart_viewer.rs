//! Chart Viewer Widget
//! Hosts the three chart mount points and the map tooltip.

use crate::config::TooltipConfig;
use crate::controller::{ChartId, ChartUpdate, RenderedChart};
use crate::data::top_ten;
use crate::tooltip::{self, PointerEvent, TooltipDirective, TooltipLine};
use egui::{Color32, RichText, ScrollArea, TextureHandle, TextureOptions};
use std::collections::HashMap;

const CHART_SPACING: f32 = 15.0;

/// What a mount point currently shows.
pub enum ChartSlot {
    Pending,
    Ready {
        chart: RenderedChart,
        texture: Option<TextureHandle>,
    },
    Failed(String),
}

#[derive(Default)]
struct TooltipState {
    hovered: Option<usize>,
    lines: Vec<TooltipLine>,
    position: Option<egui::Pos2>,
}

impl TooltipState {
    fn apply(&mut self, directive: TooltipDirective) {
        match directive {
            TooltipDirective::Show { lines } => self.lines = lines,
            TooltipDirective::Reposition { x, y } => self.position = Some(egui::pos2(x, y)),
            TooltipDirective::Hide => *self = Self::default(),
        }
    }
}

pub struct ChartViewer {
    slots: HashMap<ChartId, ChartSlot>,
    tooltip: TooltipState,
    tooltip_config: TooltipConfig,
}

impl ChartViewer {
    pub fn new(tooltip_config: TooltipConfig) -> Self {
        let slots = ChartId::ALL
            .iter()
            .map(|&id| (id, ChartSlot::Pending))
            .collect();
        Self {
            slots,
            tooltip: TooltipState::default(),
            tooltip_config,
        }
    }

    pub fn set_pending(&mut self, chart: ChartId) {
        self.slots.insert(chart, ChartSlot::Pending);
    }

    /// Replace a mount point's content; the newest update always wins.
    pub fn apply(&mut self, update: ChartUpdate) {
        let slot = match update.outcome {
            Ok(chart) => ChartSlot::Ready {
                chart,
                texture: None,
            },
            Err(message) => ChartSlot::Failed(message),
        };
        if update.chart == ChartId::Map {
            self.tooltip = TooltipState::default();
        }
        self.slots.insert(update.chart, slot);
    }

    /// Charts that finished successfully, in display order.
    pub fn ready_charts(&self) -> Vec<(ChartId, &RenderedChart)> {
        ChartId::ALL
            .iter()
            .filter_map(|id| match self.slots.get(id) {
                Some(ChartSlot::Ready { chart, .. }) => Some((*id, chart)),
                _ => None,
            })
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.slots.values().any(|s| matches!(s, ChartSlot::Pending))
    }

    pub fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let mut map_hover: Option<(Option<usize>, egui::Pos2)> = None;

        ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            ui.horizontal_top(|ui| {
                Self::show_slot(ctx, ui, ChartId::Years, self.slots.get_mut(&ChartId::Years));
                ui.add_space(CHART_SPACING);
                Self::show_slot(ctx, ui, ChartId::Metric, self.slots.get_mut(&ChartId::Metric));
            });
            ui.add_space(CHART_SPACING);
            map_hover = Self::show_slot(ctx, ui, ChartId::Map, self.slots.get_mut(&ChartId::Map));
        });

        self.update_tooltip(map_hover);
        self.show_tooltip(ctx);
    }

    /// Draw one mount point. Returns the hovered circle and pointer position
    /// when the pointer is over the chart image.
    fn show_slot(
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        id: ChartId,
        slot: Option<&mut ChartSlot>,
    ) -> Option<(Option<usize>, egui::Pos2)> {
        match slot {
            None | Some(ChartSlot::Pending) => {
                ui.vertical(|ui| {
                    ui.label(RichText::new(id.label()).size(14.0).strong());
                    ui.spinner();
                });
                None
            }
            Some(ChartSlot::Failed(message)) => {
                ui.vertical(|ui| {
                    ui.label(RichText::new(id.label()).size(14.0).strong());
                    ui.label(
                        RichText::new(format!("Could not load chart: {}", message))
                            .color(Color32::from_rgb(220, 53, 69)),
                    );
                });
                None
            }
            Some(ChartSlot::Ready { chart, texture }) => {
                let handle = texture.get_or_insert_with(|| {
                    let size = [chart.image.width() as usize, chart.image.height() as usize];
                    let image = egui::ColorImage::from_rgba_unmultiplied(size, chart.image.as_raw());
                    ctx.load_texture(format!("chart_{:?}", id), image, TextureOptions::LINEAR)
                });

                let size = egui::vec2(chart.scene.width as f32, chart.scene.height as f32);
                let response = ui.add(
                    egui::Image::new((handle.id(), size)).sense(egui::Sense::hover()),
                );

                if id != ChartId::Map {
                    return None;
                }
                let pointer = response.hover_pos()?;
                let local = pointer - response.rect.min;
                let hit = tooltip::hit_test(&chart.scene, local.x as f64, local.y as f64);
                Some((hit, pointer))
            }
        }
    }

    /// Turn pointer movement over the map into tooltip events.
    fn update_tooltip(&mut self, hover: Option<(Option<usize>, egui::Pos2)>) {
        let points = top_ten();
        let config = self.tooltip_config;
        let (hit, pointer) = match hover {
            Some((Some(hit), pointer)) => (hit, pointer),
            _ => {
                if self.tooltip.hovered.is_some() {
                    self.tooltip
                        .apply(tooltip::directive(PointerEvent::Out, None, config));
                }
                return;
            }
        };

        let point = points.get(hit);
        if self.tooltip.hovered != Some(hit) {
            self.tooltip
                .apply(tooltip::directive(PointerEvent::Over, point, config));
            self.tooltip.hovered = Some(hit);
        }
        let moved = PointerEvent::Move {
            x: pointer.x,
            y: pointer.y,
        };
        self.tooltip.apply(tooltip::directive(moved, point, config));
    }

    fn show_tooltip(&self, ctx: &egui::Context) {
        let Some(position) = self.tooltip.position else {
            return;
        };
        if self.tooltip.lines.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("map_tooltip"))
            .order(egui::Order::Tooltip)
            .fixed_pos(position)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(Color32::WHITE)
                    .stroke(egui::Stroke::new(1.0, Color32::BLACK))
                    .rounding(5.0)
                    .show(ui, |ui| {
                        ui.set_min_width(160.0);
                        ui.vertical_centered(|ui| {
                            for line in &self.tooltip.lines {
                                let text = RichText::new(&line.text).color(Color32::BLACK);
                                ui.label(if line.strong { text.strong() } else { text });
                            }
                        });
                    });
            });
    }
}
