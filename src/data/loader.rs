//! Row Loader Module
//! Fetches delimited-text resources from disk or http(s) and turns them into
//! untyped rows using Polars.

use polars::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to fetch resource: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Failed to parse GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("GeoJSON must be a FeatureCollection")]
    NotFeatureCollection,
}

/// Location of a resource: a local path or an absolute http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Path(PathBuf),
    Url(String),
}

impl Resource {
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Resource::Url(location.to_string())
        } else {
            Resource::Path(PathBuf::from(location))
        }
    }

    /// Read the whole resource into memory.
    pub fn fetch(&self) -> Result<Vec<u8>, LoaderError> {
        match self {
            Resource::Path(path) => std::fs::read(path).map_err(|source| LoaderError::Io {
                path: path.clone(),
                source,
            }),
            Resource::Url(url) => {
                debug!(%url, "fetching remote resource");
                let response = reqwest::blocking::get(url.as_str())?.error_for_status()?;
                Ok(response.bytes()?.to_vec())
            }
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Path(path) => write!(f, "{}", path.display()),
            Resource::Url(url) => f.write_str(url),
        }
    }
}

/// One observational unit as loaded: field name to raw string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}

/// Loads tabular resources into rows.
pub struct DataLoader;

impl DataLoader {
    /// Fetch and parse a CSV resource.
    pub fn load_rows(resource: &Resource) -> Result<Vec<Row>, LoaderError> {
        let bytes = resource.fetch()?;
        let rows = Self::parse_csv(bytes)?;
        info!(%resource, rows = rows.len(), "loaded rows");
        Ok(rows)
    }

    /// Parse CSV bytes with a header line. Every column is read as a string;
    /// nulls become empty strings so each row carries every header field.
    pub fn parse_csv(bytes: Vec<u8>) -> Result<Vec<Row>, LoaderError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        Self::rows_from_frame(&df)
    }

    fn rows_from_frame(df: &DataFrame) -> Result<Vec<Row>, LoaderError> {
        let mut columns: Vec<(String, StringChunked)> = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let series = column.as_materialized_series().cast(&DataType::String)?;
            columns.push((column.name().to_string(), series.str()?.clone()));
        }

        let rows = (0..df.height())
            .map(|i| {
                Row::from_pairs(columns.iter().map(|(name, values)| {
                    (name.clone(), values.get(i).unwrap_or_default().to_string())
                }))
            })
            .collect();

        Ok(rows)
    }
}
