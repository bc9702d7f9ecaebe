use football_charts::charts::{ChartRenderer, TextRole};
use football_charts::config::LayoutConfig;
use football_charts::controller::{map_scene, metric_scene, years_scene};
use football_charts::data::boundaries::parse_boundaries;
use football_charts::data::{top_ten, DataLoader, SeriesShaper};

const WIDTH: f64 = 1400.0;

const WIN_PCTS: &str = "team,pct\nBrazil,63.7\nSpain,58.5\nGermany,58.5\n";
const RPI: &str = "team,rpi\nBrazil,0.7123\nSpain,0.6541\nGermany,0.6698\n";

const SQUARE: &str = r#"{
  "type": "FeatureCollection",
  "features": [{
    "type": "Feature",
    "properties": {"name": "Square"},
    "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,10],[0,0]]]}
  }]
}"#;

#[test]
fn year_csv_drops_the_newest_year() {
    let rows = DataLoader::parse_csv(b"year,count\n2022,5\n2021,8\n2020,3\n".to_vec()).unwrap();
    let scene = years_scene(&rows, &LayoutConfig::default(), WIDTH).unwrap();

    let bars: Vec<&str> = scene.bars().map(|b| b.key.as_str()).collect();
    assert_eq!(bars, vec!["2020", "2021"]);
    let values: Vec<&str> = scene.texts(TextRole::Value).map(|t| t.content.as_str()).collect();
    assert_eq!(values, vec!["3", "8"]);
}

#[test]
fn switching_metrics_rebuilds_domain_and_labels() {
    let layout = LayoutConfig::default();
    let pct_rows = DataLoader::parse_csv(WIN_PCTS.as_bytes().to_vec()).unwrap();
    let rpi_rows = DataLoader::parse_csv(RPI.as_bytes().to_vec()).unwrap();

    let pct = SeriesShaper::metric(&pct_rows, "pct").unwrap();
    let rpi = SeriesShaper::metric(&rpi_rows, "rpi").unwrap();
    assert_eq!(pct.extent, 63.7);
    assert_eq!(rpi.extent, 0.71);

    let pct_scene = metric_scene(&pct_rows, "pct", &layout, WIDTH).unwrap();
    let rpi_scene = metric_scene(&rpi_rows, "rpi", &layout, WIDTH).unwrap();
    assert_eq!(
        pct_scene.text(TextRole::Title),
        Some("Top 10 Nations by World Cup Win Percent")
    );
    assert_eq!(
        rpi_scene.text(TextRole::Title),
        Some("Top 10 Nations by World Cup Relative Percentage Index")
    );

    // Same teams, same order, and the longest bar fills the plot in both.
    let widest = |scene: &football_charts::charts::Scene| {
        scene.bars().map(|b| b.width).fold(0.0_f64, f64::max)
    };
    assert!((widest(&pct_scene) - widest(&rpi_scene)).abs() < 1e-9);
    let labels: Vec<&str> = rpi_scene.texts(TextRole::Value).map(|t| t.content.as_str()).collect();
    assert_eq!(labels, vec!["0.71", "0.65", "0.67"]);
}

#[test]
fn empty_year_csv_draws_frame_only() {
    let rows = DataLoader::parse_csv(Vec::new()).unwrap();
    assert!(rows.is_empty());

    let scene = years_scene(&rows, &LayoutConfig::default(), WIDTH).unwrap();
    assert_eq!(scene.bars().count(), 0);
    assert_eq!(scene.texts(TextRole::Value).count(), 0);
    assert_eq!(scene.text(TextRole::Title), Some("Number of Football Games by Year"));
    assert_eq!(scene.texts(TextRole::AxisTitle).count(), 2);
    assert!(scene.lines().count() >= 1);
}

#[test]
fn map_marks_every_reference_nation() {
    let features = parse_boundaries(SQUARE.as_bytes()).unwrap();
    let scene = map_scene(&features, &LayoutConfig::default(), WIDTH);

    assert_eq!(scene.areas().count(), 1);
    assert_eq!(scene.circles().count(), top_ten().len());
}

#[test]
fn charts_export_as_svg() {
    let rows = DataLoader::parse_csv(WIN_PCTS.as_bytes().to_vec()).unwrap();
    let scene = metric_scene(&rows, "pct", &LayoutConfig::default(), WIDTH).unwrap();
    let svg = ChartRenderer::render_svg(&scene).unwrap();

    assert!(svg.contains("<svg"));
    assert!(svg.contains("Win Percent"));
    assert!(svg.matches("<rect").count() >= 3);
}
