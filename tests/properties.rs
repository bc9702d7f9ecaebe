use football_charts::data::{Row, SeriesShaper, COUNT_FIELD, RECENT_YEAR_WINDOW, TEAM_FIELD, YEAR_FIELD};
use quickcheck_macros::quickcheck;
use std::collections::HashSet;

fn year_rows(offsets: &[u8]) -> Vec<Row> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            let year = (1900 + *offset as i32).to_string();
            Row::from_pairs([(YEAR_FIELD, year), (COUNT_FIELD, i.to_string())])
        })
        .collect()
}

#[quickcheck]
fn recent_years_length_follows_window(offsets: Vec<u8>) -> bool {
    let distinct = offsets.iter().collect::<HashSet<_>>().len();
    let series = SeriesShaper::recent_years(&year_rows(&offsets)).unwrap();
    series.len() == distinct.min(RECENT_YEAR_WINDOW).saturating_sub(1)
}

#[quickcheck]
fn recent_years_are_ascending_and_exclude_newest(offsets: Vec<u8>) -> bool {
    let series = SeriesShaper::recent_years(&year_rows(&offsets)).unwrap();
    let years: Vec<i32> = series.iter().map(|y| y.year).collect();
    let newest = offsets.iter().max().map(|o| 1900 + *o as i32);

    years.windows(2).all(|w| w[0] < w[1]) && newest.map_or(true, |n| years.iter().all(|y| *y < n))
}

#[quickcheck]
fn recent_years_keep_first_count_per_year(offsets: Vec<u8>) -> bool {
    let series = SeriesShaper::recent_years(&year_rows(&offsets)).unwrap();
    series.iter().all(|entry| {
        let first = offsets
            .iter()
            .position(|o| 1900 + *o as i32 == entry.year)
            .map(|i| i as u64);
        first == Some(entry.count)
    })
}

#[quickcheck]
fn metric_preserves_order_and_bounds_values(values: Vec<i32>) -> bool {
    let rows: Vec<Row> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let value = (*v as f64 / 1000.0).to_string();
            Row::from_pairs([(TEAM_FIELD, format!("team{}", i)), ("pct", value)])
        })
        .collect();

    let metric = SeriesShaper::metric(&rows, "pct").unwrap();
    let teams: Vec<String> = metric.series.iter().map(|m| m.team.clone()).collect();
    let expected: Vec<String> = (0..values.len()).map(|i| format!("team{}", i)).collect();

    let extent_ok = if metric.series.is_empty() {
        metric.extent == 0.0
    } else {
        metric.series.iter().all(|m| m.value <= metric.extent)
            && metric.series.iter().any(|m| m.value == metric.extent)
    };
    let labels_ok = metric
        .series
        .iter()
        .all(|m| m.label.parse::<f64>().ok() == Some(m.value) || (m.value == 0.0 && m.label == "0.00"));

    teams == expected && extent_ok && labels_ok
}
