//! Games-by-year bar chart.

use super::color::OrdinalColors;
use super::scale::{BandScale, LinearScale, BAND_PADDING};
use super::scene::{bottom_band_axis, Anchor, Frame, Mark, RectMark, Scene, TextRole};
use crate::config::LayoutConfig;
use crate::data::{Series, YearCount};

pub const TITLE: &str = "Number of Football Games by Year";
pub const X_LABEL: &str = "Year";
pub const Y_LABEL: &str = "Number of Games";

/// Vertical space above the tallest bar kept free for its label.
const HEADROOM: f64 = 100.0;

pub fn frame(layout: &LayoutConfig, window_width: f64) -> Frame {
    Frame {
        width: layout.half_width(window_width),
        height: layout.year_chart_height,
        margin: layout.margin,
    }
}

pub fn build(series: &Series<YearCount>, frame: &Frame) -> Scene {
    let plot_width = frame.plot_width();
    let axis_y = frame.plot_height();
    let keys: Vec<String> = series.iter().map(|r| r.year.to_string()).collect();
    let max_count = series.iter().map(|r| r.count).max().unwrap_or(0) as f64;

    let y = LinearScale::new((0.0, max_count), (0.0, (axis_y - HEADROOM).max(0.0)));
    let x = BandScale::new(keys.iter().cloned(), (0.0, plot_width), BAND_PADDING);
    let colors = OrdinalColors::bar_ramp(keys.iter().cloned());

    let mut scene = frame.scene();
    bottom_band_axis(&mut scene, frame, &x, axis_y, plot_width);

    for (record, key) in series.iter().zip(&keys) {
        let (Some(left), Some(fill)) = (x.position(key), colors.get(key)) else {
            continue;
        };
        let height = y.apply(record.count as f64);
        let (sx, sy) = frame.at(left, axis_y - height);
        scene.push(Mark::Rect(RectMark {
            x: sx,
            y: sy,
            width: x.bandwidth(),
            height,
            fill,
            key: key.clone(),
        }));
        scene.push(
            frame
                .text(left + 13.0, axis_y - height - 20.0, record.count.to_string(), TextRole::Value)
                .anchor(Anchor::Start)
                .size(12.0)
                .build(),
        );
    }

    scene.push(frame.text(plot_width / 2.0, axis_y + 40.0, X_LABEL, TextRole::AxisTitle).build());
    scene.push(
        frame
            .text(-40.0, axis_y / 2.0 + 15.0, Y_LABEL, TextRole::AxisTitle)
            .rotated()
            .build(),
    );
    scene.push(frame.text(plot_width / 2.0, 0.0, TITLE, TextRole::Title).size(15.0).build());

    scene
}
