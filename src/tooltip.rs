//! Map tooltip: a stateless mapping from pointer events to what the floating
//! tooltip should do.

use crate::charts::Scene;
use crate::config::TooltipConfig;
use crate::data::PointOfInterest;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Over,
    Move { x: f32, y: f32 },
    Out,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLine {
    pub text: String,
    pub strong: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipDirective {
    Show { lines: Vec<TooltipLine> },
    Reposition { x: f32, y: f32 },
    Hide,
}

/// Lines shown for a point of interest: country, win percentage, rank.
pub fn content(point: &PointOfInterest) -> Vec<TooltipLine> {
    vec![
        TooltipLine {
            text: point.country.to_string(),
            strong: true,
        },
        TooltipLine {
            text: format!("win pct: {}%", point.win_pct),
            strong: false,
        },
        TooltipLine {
            text: format!("rank: {}", point.rank),
            strong: false,
        },
    ]
}

pub fn directive(
    event: PointerEvent,
    hovered: Option<&PointOfInterest>,
    offset: TooltipConfig,
) -> TooltipDirective {
    match (event, hovered) {
        (PointerEvent::Over, Some(point)) => TooltipDirective::Show {
            lines: content(point),
        },
        (PointerEvent::Move { x, y }, Some(_)) => TooltipDirective::Reposition {
            x: x + offset.offset_x,
            y: y + offset.offset_y,
        },
        (PointerEvent::Out, _) | (_, None) => TooltipDirective::Hide,
    }
}

/// Index of the topmost circle in `scene` containing the surface point.
pub fn hit_test(scene: &Scene, x: f64, y: f64) -> Option<usize> {
    scene
        .circles()
        .enumerate()
        .filter(|(_, c)| {
            let (dx, dy) = (x - c.cx, y - c.cy);
            dx * dx + dy * dy <= c.r * c.r
        })
        .map(|(i, _)| i)
        .last()
}
