//! Geographic boundary loading (GeoJSON FeatureCollection -> polygons).

use super::loader::{LoaderError, Resource};
use geo::{Geometry, MultiPolygon};
use geojson::GeoJson;
use tracing::{debug, info};

/// One country outline from the boundary dataset.
#[derive(Debug, Clone)]
pub struct BoundaryFeature {
    pub name: Option<String>,
    pub shape: MultiPolygon<f64>,
}

pub fn load_boundaries(resource: &Resource) -> Result<Vec<BoundaryFeature>, LoaderError> {
    let bytes = resource.fetch()?;
    let features = parse_boundaries(&bytes)?;
    info!(%resource, features = features.len(), "loaded boundaries");
    Ok(features)
}

/// Features whose geometry is not (multi)polygonal are skipped.
pub fn parse_boundaries(bytes: &[u8]) -> Result<Vec<BoundaryFeature>, LoaderError> {
    let geojson: GeoJson = String::from_utf8_lossy(bytes).parse()?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => return Err(LoaderError::NotFeatureCollection),
    };

    let mut features = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let name = feature
            .properties
            .as_ref()
            .and_then(|props| props.get("name"))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let Some(geometry) = feature.geometry else {
            continue;
        };

        let shape = match Geometry::<f64>::try_from(geometry.value) {
            Ok(Geometry::MultiPolygon(mp)) => mp,
            Ok(Geometry::Polygon(p)) => MultiPolygon::new(vec![p]),
            Ok(_) => continue,
            Err(e) => {
                debug!(?name, error = %e, "skipping unconvertible feature");
                continue;
            }
        };

        features.push(BoundaryFeature { name, shape });
    }

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "Squareland"},
             "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,10],[0,0]]]}},
            {"type": "Feature", "properties": {"name": "Dot"},
             "geometry": {"type": "Point", "coordinates": [1, 1]}},
            {"type": "Feature", "properties": {},
             "geometry": {"type": "MultiPolygon", "coordinates": [[[[20,20],[30,20],[30,30],[20,20]]]]}}
        ]
    }"#;

    #[test]
    fn polygons_are_kept_and_points_skipped() {
        let features = parse_boundaries(SAMPLE.as_bytes()).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].name.as_deref(), Some("Squareland"));
        assert_eq!(features[0].shape.0.len(), 1);
        assert!(features[1].name.is_none());
    }

    #[test]
    fn bare_geometry_is_rejected() {
        let err = parse_boundaries(br#"{"type": "Point", "coordinates": [1, 1]}"#).unwrap_err();
        assert!(matches!(err, LoaderError::NotFeatureCollection));
    }
}
