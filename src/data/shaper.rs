//! Series Shaper Module
//! Turns raw rows into the ordered, bounded, typed series each chart plots.
//!
//! Row validation: a row whose required field is missing, empty or not a
//! number is skipped (and logged). The first occurrence of a key wins.

use super::loader::Row;
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Number of most recent years considered before the newest is dropped.
pub const RECENT_YEAR_WINDOW: usize = 11;

pub const YEAR_FIELD: &str = "year";
pub const COUNT_FIELD: &str = "count";
pub const TEAM_FIELD: &str = "team";

#[derive(Error, Debug, PartialEq)]
pub enum ShapeError {
    #[error("No row carries the field '{0}'")]
    UnknownField(String),
}

/// Ordered sequence ready for plotting. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    items: Vec<T>,
}

impl<T> Series<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

/// A team's metric value, rounded to two decimals. `label` is the exact text
/// `value` was parsed back from, so axis and label cannot disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMetric {
    pub team: String,
    pub value: f64,
    pub label: String,
}

/// Metric output: the series plus the continuous domain extent.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub field: String,
    pub series: Series<TeamMetric>,
    /// Upper end of the `[0, extent]` domain; 0 for an empty series.
    pub extent: f64,
}

/// Round to two decimals, returning the value and its display text.
///
/// Exact halfway cases round away from zero. Only multiples of 1/8 can sit
/// exactly on a tie, so those are rounded explicitly before formatting.
pub fn round_metric(value: f64) -> (f64, String) {
    let value = if (value * 8.0).fract() == 0.0 {
        (value * 100.0).round() / 100.0
    } else {
        value
    };
    let label = format!("{:.2}", value);
    match label.parse::<f64>() {
        Ok(rounded) if rounded == 0.0 => (0.0, "0.00".to_string()),
        Ok(rounded) => (rounded, label),
        Err(_) => (value, label),
    }
}

fn parse_field<T: FromStr>(row: &Row, field: &str) -> Result<T, String> {
    let raw = row
        .get(field)
        .ok_or_else(|| format!("missing field '{}'", field))?
        .trim();
    raw.parse::<T>()
        .map_err(|_| format!("'{}' is not a number in field '{}'", raw, field))
}

fn require_field(rows: &[Row], field: &str) -> Result<(), ShapeError> {
    if !rows.is_empty() && !rows.iter().any(|row| row.has_field(field)) {
        return Err(ShapeError::UnknownField(field.to_string()));
    }
    Ok(())
}

/// Shaping policies, one per data-driven chart.
pub struct SeriesShaper;

impl SeriesShaper {
    /// The most recent years minus the newest, oldest first.
    ///
    /// With at least [`RECENT_YEAR_WINDOW`] distinct years the result holds
    /// `RECENT_YEAR_WINDOW - 1` entries; with `n` fewer it holds `n - 1`.
    pub fn recent_years(rows: &[Row]) -> Result<Series<YearCount>, ShapeError> {
        require_field(rows, YEAR_FIELD)?;
        require_field(rows, COUNT_FIELD)?;

        let mut seen = HashSet::new();
        let mut parsed: Vec<YearCount> = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let record = parse_field::<i32>(row, YEAR_FIELD).and_then(|year| {
                parse_field::<u64>(row, COUNT_FIELD).map(|count| YearCount { year, count })
            });
            match record {
                Ok(record) if seen.insert(record.year) => parsed.push(record),
                Ok(record) => debug!(index, year = record.year, "skipping duplicate year"),
                Err(reason) => warn!(index, %reason, "skipping malformed row"),
            }
        }

        Ok(Series::new(Self::drop_newest_after_windowing(
            parsed,
            RECENT_YEAR_WINDOW,
        )))
    }

    /// Keep the `window` newest years, drop the newest of them, and return
    /// the rest in ascending order.
    fn drop_newest_after_windowing(mut records: Vec<YearCount>, window: usize) -> Vec<YearCount> {
        records.sort_by(|a, b| b.year.cmp(&a.year));
        records.truncate(window);
        if !records.is_empty() {
            records.remove(0);
        }
        records.reverse();
        records
    }

    /// Project `field` as the metric, keeping the source order.
    pub fn metric(rows: &[Row], field: &str) -> Result<MetricSeries, ShapeError> {
        require_field(rows, TEAM_FIELD)?;
        require_field(rows, field)?;

        let mut seen = HashSet::new();
        let mut items: Vec<TeamMetric> = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let team = match row.get(TEAM_FIELD).map(str::trim) {
                Some(team) if !team.is_empty() => team,
                _ => {
                    warn!(index, "skipping row without team");
                    continue;
                }
            };

            let value = match parse_field::<f64>(row, field) {
                Ok(v) if v.is_finite() => v,
                Ok(_) => {
                    warn!(index, team, field, "skipping non-finite metric");
                    continue;
                }
                Err(reason) => {
                    warn!(index, team, %reason, "skipping malformed row");
                    continue;
                }
            };

            if !seen.insert(team.to_string()) {
                debug!(index, team, "skipping duplicate team");
                continue;
            }

            let (value, label) = round_metric(value);
            items.push(TeamMetric {
                team: team.to_string(),
                value,
                label,
            });
        }

        let extent = items
            .iter()
            .map(|m| m.value)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
            .unwrap_or(0.0);

        Ok(MetricSeries {
            field: field.to_string(),
            series: Series::new(items),
            extent,
        })
    }
}
