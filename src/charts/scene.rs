//! Scene: the display list a chart builder produces and a renderer draws.
//!
//! All coordinates are surface pixels with the origin at the top-left.

use super::color::{Rgb, BLACK};
use super::scale::BandScale;
use crate::config::Margin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// What a piece of text is for; lets callers and tests find labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    AxisTitle,
    Tick,
    /// The rounded value printed next to a bar.
    Value,
    Caption,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextMark {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: Anchor,
    pub size: f64,
    /// Reads bottom-to-top.
    pub rotated: bool,
    pub italic: bool,
    pub role: TextRole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectMark {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    /// Category the bar represents.
    pub key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineMark {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleMark {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Rgb,
    pub fill_opacity: f64,
    pub stroke: Rgb,
    pub stroke_width: f64,
}

/// A filled outline (one polygon exterior).
#[derive(Debug, Clone, PartialEq)]
pub struct AreaMark {
    pub points: Vec<(f64, f64)>,
    pub fill: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Area(AreaMark),
    Rect(RectMark),
    Line(LineMark),
    Circle(CircleMark),
    Text(TextMark),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    marks: Vec<Mark>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0).round() as u32,
            height: height.max(1.0).round() as u32,
            marks: Vec::new(),
        }
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn bars(&self) -> impl Iterator<Item = &RectMark> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Rect(r) => Some(r),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CircleMark> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Circle(c) => Some(c),
            _ => None,
        })
    }

    pub fn areas(&self) -> impl Iterator<Item = &AreaMark> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Area(a) => Some(a),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineMark> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn texts(&self, role: TextRole) -> impl Iterator<Item = &TextMark> {
        self.marks.iter().filter_map(move |m| match m {
            Mark::Text(t) if t.role == role => Some(t),
            _ => None,
        })
    }

    /// First text with the given role, if any.
    pub fn text(&self, role: TextRole) -> Option<&str> {
        self.texts(role).next().map(|t| t.content.as_str())
    }
}

/// A drawing surface with margins; builders place marks relative to the
/// top-left corner of the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Frame {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    pub fn scene(&self) -> Scene {
        Scene::new(self.width, self.height)
    }

    /// Plot-area coordinates to surface coordinates.
    pub fn at(&self, x: f64, y: f64) -> (f64, f64) {
        (self.margin.left + x, self.margin.top + y)
    }

    pub fn text(&self, x: f64, y: f64, content: impl Into<String>, role: TextRole) -> TextBuilder {
        let (x, y) = self.at(x, y);
        TextBuilder(TextMark {
            x,
            y,
            content: content.into(),
            anchor: Anchor::Middle,
            size: 14.0,
            rotated: false,
            italic: false,
            role,
        })
    }

    pub fn line(&self, from: (f64, f64), to: (f64, f64)) -> Mark {
        Mark::Line(LineMark {
            from: self.at(from.0, from.1),
            to: self.at(to.0, to.1),
            color: BLACK,
        })
    }
}

pub struct TextBuilder(TextMark);

impl TextBuilder {
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.0.anchor = anchor;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.0.size = size;
        self
    }

    pub fn rotated(mut self) -> Self {
        self.0.rotated = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.0.italic = true;
        self
    }

    pub fn build(self) -> Mark {
        Mark::Text(self.0)
    }
}

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const TICK_FONT: f64 = 10.0;

/// Axis along the bottom of a band scale, with its line at plot `y`.
pub fn bottom_band_axis(scene: &mut Scene, frame: &Frame, band: &BandScale, y: f64, width: f64) {
    scene.push(frame.line((0.0, y), (width, y)));
    for key in band.keys() {
        let Some(x) = band.center(key) else { continue };
        scene.push(frame.line((x, y), (x, y + TICK_SIZE)));
        scene.push(
            frame
                .text(x, y + TICK_SIZE + TICK_PADDING + TICK_FONT, key.as_str(), TextRole::Tick)
                .size(TICK_FONT)
                .build(),
        );
    }
}

/// Axis along the left of a band scale.
pub fn left_band_axis(
    scene: &mut Scene,
    frame: &Frame,
    band: &BandScale,
    height: f64,
    tick_size: f64,
    padding: f64,
) {
    scene.push(frame.line((0.0, 0.0), (0.0, height)));
    for key in band.keys() {
        let Some(y) = band.center(key) else { continue };
        if tick_size > 0.0 {
            scene.push(frame.line((-tick_size, y), (0.0, y)));
        }
        scene.push(
            frame
                .text(-(tick_size + padding), y + TICK_FONT / 2.0, key.as_str(), TextRole::Tick)
                .anchor(Anchor::End)
                .size(TICK_FONT)
                .build(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::scale::BAND_PADDING;

    fn frame() -> Frame {
        Frame {
            width: 590.0,
            height: 350.0,
            margin: Margin::default(),
        }
    }

    #[test]
    fn frame_offsets_by_margin() {
        let f = frame();
        assert_eq!(f.plot_width(), 315.0);
        assert_eq!(f.plot_height(), 270.0);
        assert_eq!(f.at(0.0, 0.0), (175.0, 40.0));
    }

    #[test]
    fn band_axis_emits_one_tick_label_per_key() {
        let f = frame();
        let band = BandScale::new(["2019", "2020"], (0.0, f.plot_width()), BAND_PADDING);
        let mut scene = f.scene();
        bottom_band_axis(&mut scene, &f, &band, 270.0, f.plot_width());
        let ticks: Vec<&str> = scene.texts(TextRole::Tick).map(|t| t.content.as_str()).collect();
        assert_eq!(ticks, vec!["2019", "2020"]);
        assert_eq!(scene.lines().count(), 3);
    }
}
