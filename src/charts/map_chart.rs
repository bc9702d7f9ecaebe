//! World map with the top-ten nations marked.

use super::color::{BLACK, LAND, MARKER};
use super::projection::NaturalEarth;
use super::scene::{AreaMark, CircleMark, Frame, Mark, Scene, TextRole};
use crate::config::LayoutConfig;
use crate::data::boundaries::BoundaryFeature;
use crate::data::PointOfInterest;

pub const TITLE: &str = "Top 10 Nations By Win Percentage";
pub const HINT: &str = "mouse over each datapoint to see country name, win %, and rank";

pub const MARKER_RADIUS: f64 = 10.0;

/// Plot-space point the projection centres the map on.
const MAP_ORIGIN: (f64, f64) = (480.0, 250.0);
/// Horizontal anchor of the title and hint, in plot space.
const TITLE_X: f64 = 500.0;
const TITLE_Y: f64 = -20.0;
const HINT_Y: f64 = 520.0;

pub fn frame(layout: &LayoutConfig, window_width: f64) -> Frame {
    Frame {
        width: layout.viewport_width(window_width),
        height: layout.map_chart_height,
        margin: layout.margin,
    }
}

/// Projection placing the map inside `frame`'s plot area.
pub fn projection(layout: &LayoutConfig, frame: &Frame) -> NaturalEarth {
    let (x, y) = frame.at(MAP_ORIGIN.0, MAP_ORIGIN.1);
    NaturalEarth::with_scale(layout.map_scale).translate(x, y)
}

/// Circles are pushed in `points` order, so circle `i` is `points[i]`.
pub fn build(
    boundaries: &[BoundaryFeature],
    points: &[PointOfInterest],
    projection: &NaturalEarth,
    frame: &Frame,
) -> Scene {
    let mut scene = frame.scene();

    for feature in boundaries {
        for polygon in &feature.shape.0 {
            let outline: Vec<(f64, f64)> = polygon
                .exterior()
                .coords()
                .map(|c| projection.project(c.x, c.y))
                .collect();
            if outline.len() < 3 {
                continue;
            }
            scene.push(Mark::Area(AreaMark {
                points: outline,
                fill: LAND,
            }));
        }
    }

    for point in points {
        let (cx, cy) = projection.project(point.longitude, point.latitude);
        scene.push(Mark::Circle(CircleMark {
            cx,
            cy,
            r: MARKER_RADIUS,
            fill: MARKER,
            fill_opacity: 0.8,
            stroke: BLACK,
            stroke_width: 2.0,
        }));
    }

    scene.push(frame.text(TITLE_X, TITLE_Y, TITLE, TextRole::Title).size(15.0).build());
    scene.push(
        frame
            .text(TITLE_X, HINT_Y, HINT, TextRole::Caption)
            .italic()
            .build(),
    );

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::top_ten;
    use geo::{LineString, MultiPolygon, Polygon};

    fn square(name: &str, lon: f64, lat: f64) -> BoundaryFeature {
        let ring = LineString::from(vec![
            (lon, lat),
            (lon + 5.0, lat),
            (lon + 5.0, lat + 5.0),
            (lon, lat + 5.0),
            (lon, lat),
        ]);
        BoundaryFeature {
            name: Some(name.to_string()),
            shape: MultiPolygon::new(vec![Polygon::new(ring, vec![])]),
        }
    }

    #[test]
    fn one_area_per_polygon_and_one_circle_per_point() {
        let layout = LayoutConfig::default();
        let frame = frame(&layout, 1200.0);
        let projection = projection(&layout, &frame);
        let scene = build(
            &[square("A", 0.0, 0.0), square("B", 20.0, 20.0)],
            top_ten(),
            &projection,
            &frame,
        );
        assert_eq!(scene.areas().count(), 2);
        assert_eq!(scene.circles().count(), 10);
        assert_eq!(scene.text(TextRole::Title), Some(TITLE));
        assert_eq!(scene.text(TextRole::Caption), Some(HINT));
    }

    #[test]
    fn title_and_hint_share_a_fixed_column() {
        let layout = LayoutConfig::default();
        let frame = frame(&layout, 1600.0);
        let scene = build(&[], top_ten(), &projection(&layout, &frame), &frame);
        let title = scene.texts(TextRole::Title).next().unwrap();
        let hint = scene.texts(TextRole::Caption).next().unwrap();
        assert_eq!(title.x, layout.margin.left + 500.0);
        assert_eq!(title.y, layout.margin.top - 20.0);
        assert_eq!(hint.x, title.x);
        assert_eq!(hint.y, layout.margin.top + 520.0);
    }

    #[test]
    fn circles_are_drawn_after_land() {
        let layout = LayoutConfig::default();
        let frame = frame(&layout, 1200.0);
        let projection = projection(&layout, &frame);
        let scene = build(&[square("A", 0.0, 0.0)], top_ten(), &projection, &frame);
        let first_circle = scene
            .marks()
            .iter()
            .position(|m| matches!(m, Mark::Circle(_)))
            .unwrap();
        let last_area = scene
            .marks()
            .iter()
            .rposition(|m| matches!(m, Mark::Area(_)))
            .unwrap();
        assert!(last_area < first_circle);
    }

    #[test]
    fn brazil_is_south_west_of_germany() {
        let layout = LayoutConfig::default();
        let frame = frame(&layout, 1200.0);
        let scene = build(&[], top_ten(), &projection(&layout, &frame), &frame);
        let circles: Vec<_> = scene.circles().collect();
        let (brazil, germany) = (circles[0], circles[2]);
        assert!(brazil.cx < germany.cx);
        assert!(brazil.cy > germany.cy);
    }
}
