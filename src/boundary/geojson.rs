use anyhow::{anyhow, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use super::{BoundaryFeature, BoundaryLayer};

/// Read a GeoJSON FeatureCollection, keeping every feature that carries a
/// `GEOID` property and polygonal geometry. Features without either are
/// skipped rather than treated as errors; malformed coordinates are.
pub(super) fn read_feature_collection(bytes: &[u8]) -> Result<BoundaryLayer> {
    let value: Value =
        serde_json::from_slice(bytes).context("Failed to parse boundary GeoJSON")?;

    let features_json = value["features"].as_array()
        .ok_or_else(|| anyhow!("Boundary GeoJSON has no features array"))?;

    let mut features = Vec::with_capacity(features_json.len());
    for feature in features_json {
        let Some(geoid) = feature["properties"]["GEOID"].as_str() else { continue };
        let Some(geometry) = parse_geometry(&feature["geometry"])? else { continue };
        features.push(BoundaryFeature { geoid: geoid.to_string(), geometry });
    }

    Ok(BoundaryLayer::new(features))
}

/// Parse a Polygon or MultiPolygon geometry; other types yield `None`.
fn parse_geometry(geometry: &Value) -> Result<Option<MultiPolygon<f64>>> {
    match geometry["type"].as_str() {
        Some("Polygon") => {
            let rings = geometry["coordinates"].as_array()
                .ok_or_else(|| anyhow!("Polygon geometry without coordinates"))?;
            Ok(Some(MultiPolygon(vec![parse_polygon(rings)?])))
        }
        Some("MultiPolygon") => {
            let polygons = geometry["coordinates"].as_array()
                .ok_or_else(|| anyhow!("MultiPolygon geometry without coordinates"))?;

            let mut out = Vec::with_capacity(polygons.len());
            for rings in polygons {
                let rings = rings.as_array()
                    .ok_or_else(|| anyhow!("Malformed MultiPolygon member"))?;
                out.push(parse_polygon(rings)?);
            }
            Ok(Some(MultiPolygon(out)))
        }
        _ => Ok(None),
    }
}

/// First ring is the exterior, any further rings are holes.
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter();

    let exterior = rings.next()
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow!("Polygon without an exterior ring"))?;
    let exterior = parse_ring(exterior)?;

    let mut interiors = Vec::new();
    for ring in rings {
        let ring = ring.as_array().ok_or_else(|| anyhow!("Malformed interior ring"))?;
        interiors.push(parse_ring(ring)?);
    }

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring (exterior or interior) from GeoJSON coordinates.
/// Format: [[x, y], [x, y], ...]
fn parse_ring(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());

    for coord_pair in coords {
        if let Some(coord_array) = coord_pair.as_array() {
            if coord_array.len() >= 2 {
                let x = coord_array[0].as_f64()
                    .ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
                let y = coord_array[1].as_f64()
                    .ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
                points.push(Coord { x, y });
            }
        }
    }

    // Ensure ring is closed (first point == last point)
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}
