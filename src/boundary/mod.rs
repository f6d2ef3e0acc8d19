use anyhow::Result;
use geo::{Coord, Rect};

mod geojson;

/// One block-group feature: the join key plus its polygonal geometry.
#[derive(Debug, Clone)]
pub struct BoundaryFeature {
    pub geoid: String,
    pub geometry: geo::MultiPolygon<f64>,
}

/// Boundary geometry for one county, in file order, with the overall
/// bounding rect used to fit the viewport.
///
/// Like the score index, one layer is live at a time and replaced wholesale
/// on county change.
#[derive(Debug, Clone)]
pub struct BoundaryLayer {
    features: Vec<BoundaryFeature>,
    bounds: Option<Rect<f64>>,
}

impl BoundaryLayer {
    /// Parse a GeoJSON FeatureCollection, joining on the `GEOID` property.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        geojson::read_feature_collection(bytes)
    }

    pub(crate) fn new(features: Vec<BoundaryFeature>) -> Self {
        let bounds = compute_bounds(&features);
        Self { features, bounds }
    }

    pub fn features(&self) -> &[BoundaryFeature] { &self.features }

    /// Number of boundary features.
    pub fn len(&self) -> usize { self.features.len() }

    pub fn is_empty(&self) -> bool { self.features.is_empty() }

    /// Bounding rect across all features (lon/lat), `None` when the layer
    /// has no drawable geometry.
    pub fn bounds(&self) -> Option<Rect<f64>> { self.bounds }
}

fn compute_bounds(features: &[BoundaryFeature]) -> Option<Rect<f64>> {
    use geo::BoundingRect;

    let mut merged: Option<Rect<f64>> = None;
    for feature in features {
        let Some(rect) = feature.geometry.bounding_rect() else { continue };
        merged = Some(match merged {
            None => rect,
            Some(acc) => Rect::new(
                Coord {
                    x: acc.min().x.min(rect.min().x),
                    y: acc.min().y.min(rect.min().y),
                },
                Coord {
                    x: acc.max().x.max(rect.max().x),
                    y: acc.max().y.max(rect.max().y),
                },
            ),
        });
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> geo::MultiPolygon<f64> {
        geo::MultiPolygon(vec![geo::Polygon::new(
            geo::LineString(vec![
                Coord { x: x0, y: y0 },
                Coord { x: x0 + size, y: y0 },
                Coord { x: x0 + size, y: y0 + size },
                Coord { x: x0, y: y0 + size },
                Coord { x: x0, y: y0 },
            ]),
            vec![],
        )])
    }

    #[test]
    fn bounds_merge_across_features() {
        let layer = BoundaryLayer::new(vec![
            BoundaryFeature { geoid: "a".to_string(), geometry: square(-122.5, 37.7, 0.1) },
            BoundaryFeature { geoid: "b".to_string(), geometry: square(-122.3, 37.9, 0.1) },
        ]);

        let bounds = layer.bounds().unwrap();
        assert_eq!(bounds.min(), Coord { x: -122.5, y: 37.7 });
        assert_eq!(bounds.max(), Coord { x: -122.2, y: 38.0 });
    }

    #[test]
    fn empty_layer_has_no_bounds() {
        let layer = BoundaryLayer::new(Vec::new());
        assert!(layer.bounds().is_none());
        assert!(layer.is_empty());
    }
}
