//! Horizontal bar chart of one team metric (win percent or RPI).

use super::color::OrdinalColors;
use super::scale::{BandScale, LinearScale, BAND_PADDING};
use super::scene::{left_band_axis, Anchor, Frame, Mark, RectMark, Scene, TextRole};
use crate::config::LayoutConfig;
use crate::data::MetricSeries;

pub const WIN_PERCENT_FIELD: &str = "pct";
pub const Y_LABEL: &str = "Nation";

/// Space below the bands reserved for the axis text and description.
const FOOTER: f64 = 50.0;

/// Human-readable names for a metric field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLabels {
    pub name: &'static str,
    pub description: &'static str,
}

impl MetricLabels {
    pub fn for_field(field: &str) -> Self {
        if field == WIN_PERCENT_FIELD {
            Self {
                name: "Win Percent",
                description: "* win percent - wins/games in the last 2 World Cups",
            }
        } else {
            Self {
                name: "Relative Percentage Index",
                description: "* relative percentage index - weighted computation of win percent & opponent strength",
            }
        }
    }

    pub fn title(&self) -> String {
        format!("Top 10 Nations by World Cup {}", self.name)
    }
}

pub fn frame(layout: &LayoutConfig, window_width: f64) -> Frame {
    Frame {
        width: layout.half_width(window_width),
        height: layout.metric_chart_height,
        margin: layout.margin,
    }
}

pub fn build(metric: &MetricSeries, frame: &Frame) -> Scene {
    let plot_width = frame.plot_width();
    let band_height = (frame.plot_height() - FOOTER).max(0.0);
    let labels = MetricLabels::for_field(&metric.field);

    let x = LinearScale::new((0.0, metric.extent), (0.0, plot_width));
    let y = BandScale::new(
        metric.series.iter().map(|m| m.team.clone()),
        (0.0, band_height),
        BAND_PADDING,
    );
    let colors = OrdinalColors::bar_ramp(metric.series.iter().map(|m| m.team.clone()));

    let mut scene = frame.scene();
    left_band_axis(&mut scene, frame, &y, band_height, 0.0, 10.0);

    for item in &metric.series {
        let (Some(top), Some(fill)) = (y.position(&item.team), colors.get(&item.team)) else {
            continue;
        };
        let width = x.apply(item.value).max(0.0);
        let (sx, sy) = frame.at(x.apply(0.0), top);
        scene.push(Mark::Rect(RectMark {
            x: sx,
            y: sy,
            width,
            height: y.bandwidth(),
            fill,
            key: item.team.clone(),
        }));
        scene.push(
            frame
                .text(width + 10.0, top + 15.0, item.label.as_str(), TextRole::Value)
                .anchor(Anchor::Start)
                .size(12.0)
                .build(),
        );
    }

    scene.push(
        frame
            .text(plot_width / 2.0, band_height + 30.0, labels.name, TextRole::AxisTitle)
            .build(),
    );
    scene.push(
        frame
            .text(-100.0, band_height / 2.0 + 15.0, Y_LABEL, TextRole::AxisTitle)
            .rotated()
            .build(),
    );
    scene.push(
        frame
            .text(plot_width / 2.0, -5.0, labels.title(), TextRole::Title)
            .size(15.0)
            .build(),
    );
    scene.push(
        frame
            .text(plot_width / 2.0, band_height + 70.0, labels.description, TextRole::Caption)
            .size(11.0)
            .italic()
            .build(),
    );

    scene
}
