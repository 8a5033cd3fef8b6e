//! AoI GeoJSON ingest (§6): reads a `FeatureCollection` whose first feature
//! is a `Polygon` or `MultiPolygon` and returns its outer rings. Holes
//! (inner rings, `coordinates[1..]`) are not modeled — only
//! `coordinates[0]` of each polygon feeds the grid mask.

use std::fs;
use std::path::Path;

use geojson::{GeoJson, Value};

use rz_core::GeoPoint;
use rz_grid::Ring;

use crate::error::{IoError, IoResult};

fn outer_ring(coords: &[Vec<f64>]) -> IoResult<Ring> {
    let points = coords
        .iter()
        .map(|pos| {
            let lon = *pos.first().ok_or_else(|| IoError::Geojson("empty coordinate".into()))?;
            let lat = *pos.get(1).ok_or_else(|| IoError::Geojson("coordinate missing latitude".into()))?;
            Ok(GeoPoint::new(lat, lon))
        })
        .collect::<IoResult<Vec<_>>>()?;
    Ok(Ring(points))
}

fn rings_from_value(value: &Value) -> IoResult<Vec<Ring>> {
    match value {
        Value::Polygon(rings) => {
            let outer = rings
                .first()
                .ok_or_else(|| IoError::Geojson("polygon has no rings".into()))?;
            Ok(vec![outer_ring(outer)?])
        }
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .map(|rings| {
                let outer = rings
                    .first()
                    .ok_or_else(|| IoError::Geojson("polygon has no rings".into()))?;
                outer_ring(outer)
            })
            .collect(),
        other => Err(IoError::Geojson(format!(
            "expected Polygon or MultiPolygon, found {other:?}"
        ))),
    }
}

/// Parse the AoI polygon(s) from a GeoJSON file, keeping only outer rings of
/// the collection's first feature.
pub fn parse_aoi(path: &Path) -> IoResult<Vec<Ring>> {
    let text = fs::read_to_string(path)?;
    let geojson: GeoJson = text.parse().map_err(|e: geojson::Error| IoError::Geojson(e.to_string()))?;

    let feature = match &geojson {
        GeoJson::FeatureCollection(fc) => fc
            .features
            .first()
            .ok_or_else(|| IoError::Geojson("feature collection is empty".into()))?,
        GeoJson::Feature(f) => f,
        GeoJson::Geometry(g) => {
            let rings = rings_from_value(&g.value)?;
            log::info!("parsed AoI: {} ring(s)", rings.len());
            return Ok(rings);
        }
    };

    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| IoError::Geojson("feature has no geometry".into()))?;
    let rings = rings_from_value(&geometry.value)?;
    log::info!("parsed AoI: {} ring(s)", rings.len());
    Ok(rings)
}
