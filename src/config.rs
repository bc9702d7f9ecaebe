//! Application Configuration
//! Layout constants and resource locations for the three charts.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_FILE_ENV: &str = "FOOTBALL_CHARTS_CONFIG";

/// Environment variable overriding the directory holding the CSV resources.
pub const DATA_DIR_ENV: &str = "FOOTBALL_CHARTS_DATA_DIR";
/// Environment variable overriding the world boundary resource.
pub const WORLD_URL_ENV: &str = "FOOTBALL_CHARTS_WORLD_URL";

const DEFAULT_WORLD_URL: &str =
    "https://raw.githubusercontent.com/holtzy/D3-graph-gallery/master/DATA/world.geojson";

/// Space reserved around each plot area (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 100.0,
            bottom: 40.0,
            left: 175.0,
        }
    }
}

/// Surface sizing shared by all charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Viewport widths below this are clamped up to it.
    pub min_viewport_width: f64,
    pub margin: Margin,
    pub year_chart_height: f64,
    pub map_chart_height: f64,
    pub metric_chart_height: f64,
    /// Scale factor of the world projection.
    pub map_scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_viewport_width: 1200.0,
            margin: Margin::default(),
            year_chart_height: 350.0,
            map_chart_height: 600.0,
            metric_chart_height: 400.0,
            map_scale: 180.0,
        }
    }
}

impl LayoutConfig {
    /// Effective drawing width for a given viewport width.
    pub fn viewport_width(&self, window_width: f64) -> f64 {
        if window_width.is_finite() {
            window_width.max(self.min_viewport_width)
        } else {
            self.min_viewport_width
        }
    }

    /// Size of the half-width charts (years and metric).
    pub fn half_width(&self, window_width: f64) -> f64 {
        self.viewport_width(window_width) / 2.0 - 10.0
    }
}

/// Where each chart's data comes from. Entries may be paths or http(s) URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub year_counts: String,
    /// Indexed by the toggle chart's resource index.
    pub metric_tables: Vec<String>,
    pub world_boundaries: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::in_dir(&PathBuf::from("data"))
    }
}

impl SourceConfig {
    fn in_dir(dir: &Path) -> Self {
        let file = |name: &str| dir.join(name).to_string_lossy().to_string();
        Self {
            year_counts: file("football_by_year.csv"),
            metric_tables: vec![file("wc_win_pcts.csv"), file("wc_rpi.csv")],
            world_boundaries: DEFAULT_WORLD_URL.to_string(),
        }
    }
}

/// Offset applied to the tooltip relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 16.0,
            offset_y: 16.0,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub sources: SourceConfig,
    pub tooltip: TooltipConfig,
    /// Initial window width used before the first frame reports a size.
    #[serde(default = "default_window_width")]
    pub initial_window_width: f64,
}

fn default_window_width() -> f64 {
    1400.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            sources: SourceConfig::default(),
            tooltip: TooltipConfig::default(),
            initial_window_width: default_window_width(),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Defaults (or the file named by [`CONFIG_FILE_ENV`]), with resource
    /// locations overridable from the environment.
    pub fn from_env() -> Self {
        let mut config = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => Self::load(Path::new(&path)).unwrap_or_else(|e| {
                warn!(error = %e, "falling back to default config");
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            let world = config.sources.world_boundaries.clone();
            config.sources = SourceConfig::in_dir(&PathBuf::from(dir));
            config.sources.world_boundaries = world;
        }
        if let Ok(url) = std::env::var(WORLD_URL_ENV) {
            config.sources.world_boundaries = url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_is_clamped_to_minimum() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.viewport_width(800.0), 1200.0);
        assert_eq!(layout.viewport_width(1600.0), 1600.0);
        assert_eq!(layout.half_width(1200.0), 590.0);
    }

    #[test]
    fn default_sources_point_at_data_dir() {
        let sources = SourceConfig::default();
        assert!(sources.year_counts.ends_with("football_by_year.csv"));
        assert_eq!(sources.metric_tables.len(), 2);
        assert!(sources.world_boundaries.starts_with("https://"));
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(matches!(
            AppConfig::from_json("{ \"layout\": 3 }"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            AppConfig::load(Path::new("no/such/config.json")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn config_deserializes_without_window_width() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        let mut object = json.as_object().unwrap().clone();
        object.remove("initial_window_width");
        let config: AppConfig = serde_json::from_value(object.into()).unwrap();
        assert_eq!(config.initial_window_width, 1400.0);
    }

    // Environment is process-wide, so every variable is exercised in one test.
    #[test]
    fn environment_overrides_resource_locations() {
        let dir = std::env::temp_dir().join("football_charts_env_test");
        std::fs::create_dir_all(&dir).unwrap();
        let expected_years = dir.join("football_by_year.csv").to_string_lossy().to_string();

        std::env::remove_var(CONFIG_FILE_ENV);
        std::env::remove_var(WORLD_URL_ENV);
        std::env::set_var(DATA_DIR_ENV, &dir);
        let config = AppConfig::from_env();
        assert_eq!(config.sources.year_counts, expected_years);
        assert!(config.sources.metric_tables[1].ends_with("wc_rpi.csv"));
        assert_eq!(config.sources.world_boundaries, DEFAULT_WORLD_URL);

        std::env::set_var(WORLD_URL_ENV, "maps/world.geojson");
        let config = AppConfig::from_env();
        assert_eq!(config.sources.world_boundaries, "maps/world.geojson");
        assert_eq!(config.sources.year_counts, expected_years);

        let malformed = dir.join("broken.json");
        std::fs::write(&malformed, "{ not json").unwrap();
        std::env::remove_var(DATA_DIR_ENV);
        std::env::remove_var(WORLD_URL_ENV);
        std::env::set_var(CONFIG_FILE_ENV, &malformed);
        let config = AppConfig::from_env();
        assert_eq!(config.sources.year_counts, SourceConfig::default().year_counts);
        assert_eq!(config.initial_window_width, 1400.0);

        let mut custom = AppConfig::default();
        custom.initial_window_width = 1800.0;
        let valid = dir.join("custom.json");
        std::fs::write(&valid, serde_json::to_string(&custom).unwrap()).unwrap();
        std::env::set_var(CONFIG_FILE_ENV, &valid);
        assert_eq!(AppConfig::from_env().initial_window_width, 1800.0);

        std::env::remove_var(CONFIG_FILE_ENV);
    }
}
