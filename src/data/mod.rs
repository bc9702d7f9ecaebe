//! Data module - resource loading and series shaping

pub mod boundaries;
mod loader;
pub mod reference;
mod shaper;

pub use loader::{DataLoader, LoaderError, Resource, Row};
pub use reference::{top_ten, PointOfInterest};
pub use shaper::{
    round_metric, MetricSeries, Series, SeriesShaper, ShapeError, TeamMetric, YearCount,
    COUNT_FIELD, RECENT_YEAR_WINDOW, TEAM_FIELD, YEAR_FIELD,
};
