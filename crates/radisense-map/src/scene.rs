//! In-memory map surface with GeoJSON export

use crate::projection;
use crate::style::FILL_OPACITY;
use crate::surface::{FeatureGeometry, MapSurface, OverlayFeature, Popup};
use crate::tiles::TileSource;
use crate::view::{FitOptions, Viewport};
use geo::{Point, Rect};
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};
use std::f64::consts::TAU;

/// Number of segments used to approximate a circle on export
pub const CIRCLE_SEGMENTS: usize = 64;

/// Map surface that keeps its state in memory
#[derive(Debug, Clone, Default)]
pub struct SceneSurface {
    basemap: Option<TileSource>,
    view: Viewport,
    features: Vec<OverlayFeature>,
    popup: Option<Popup>,
    last_fit: Option<FitOptions>,
}

impl SceneSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a specific viewport size in pixels
    pub fn with_size(width: f64, height: f64) -> Self {
        Self { view: Viewport::default().with_size(width, height), ..Self::default() }
    }

    pub fn basemap(&self) -> Option<&TileSource> {
        self.basemap.as_ref()
    }

    pub fn view(&self) -> &Viewport {
        &self.view
    }

    pub fn features(&self) -> &[OverlayFeature] {
        &self.features
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// Options of the most recent fit, if any
    pub fn last_fit(&self) -> Option<&FitOptions> {
        self.last_fit.as_ref()
    }

    /// Export the overlay in WGS84
    ///
    /// Circles become closed rings of [`CIRCLE_SEGMENTS`] segments. Styles are
    /// carried as simplestyle properties; the popup, when shown, is a foreign
    /// member of the collection.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self.features.iter().map(export_feature).collect();

        let foreign_members = self.popup.as_ref().map(|popup| {
            let mut popup_json = Map::new();
            popup_json.insert("title".to_string(), JsonValue::from(popup.title));
            popup_json.insert("risk_level".to_string(), JsonValue::from(popup.level.clone()));
            popup_json.insert("risk_score".to_string(), JsonValue::from(popup.score.clone()));
            popup_json.insert("color".to_string(), JsonValue::from(popup.color));

            let mut members = Map::new();
            members.insert("popup".to_string(), JsonValue::Object(popup_json));
            members
        });

        FeatureCollection { features, bbox: None, foreign_members }
    }
}

impl MapSurface for SceneSurface {
    fn set_basemap(&mut self, source: TileSource) {
        self.basemap = Some(source);
    }

    fn set_view(&mut self, view: Viewport) {
        self.view = view;
    }

    fn clear_overlay(&mut self) {
        self.features.clear();
    }

    fn add_feature(&mut self, feature: OverlayFeature) {
        self.features.push(feature);
    }

    fn fit_view(&mut self, extent: Rect<f64>, options: FitOptions) {
        self.view = self.view.fit(extent, &options);
        self.last_fit = Some(options);
    }

    fn show_popup(&mut self, popup: Popup) {
        self.popup = Some(popup);
    }

    fn hide_popup(&mut self) {
        self.popup = None;
    }
}

fn export_feature(feature: &OverlayFeature) -> Feature {
    let ring: Vec<Vec<f64>> = match &feature.geometry {
        FeatureGeometry::Polygon(polygon) => {
            polygon.exterior().points().map(lon_lat_position).collect()
        }
        FeatureGeometry::Circle { center, radius } => circle_ring(*center, *radius),
    };

    let mut properties = Map::new();
    properties.insert("kind".to_string(), JsonValue::from(feature.kind.as_str()));
    properties.insert("stroke".to_string(), JsonValue::from(feature.style.stroke));
    properties.insert("stroke-width".to_string(), JsonValue::from(feature.stroke_width));
    properties.insert("fill".to_string(), JsonValue::from(feature.style.stroke));
    properties.insert("fill-opacity".to_string(), JsonValue::from(FILL_OPACITY));

    if let FeatureGeometry::Circle { radius, .. } = feature.geometry {
        properties.insert("radius_m".to_string(), JsonValue::from(radius));
    }

    Feature {
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        properties: Some(properties),
        id: None,
        bbox: None,
        foreign_members: None,
    }
}

fn lon_lat_position(point: Point<f64>) -> Vec<f64> {
    let coord = projection::to_lon_lat(point);
    vec![coord.lon, coord.lat]
}

/// Closed ring approximating a projected circle, in WGS84
fn circle_ring(center: Point<f64>, radius: f64) -> Vec<Vec<f64>> {
    (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = TAU * (i % CIRCLE_SEGMENTS) as f64 / CIRCLE_SEGMENTS as f64;
            let point =
                Point::new(center.x() + radius * angle.cos(), center.y() + radius * angle.sin());
            lon_lat_position(point)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::RiskStyle;
    use crate::surface::FeatureKind;

    fn circle(radius: f64) -> OverlayFeature {
        OverlayFeature {
            kind: FeatureKind::RiskBuffer,
            geometry: FeatureGeometry::Circle { center: Point::new(0.0, 0.0), radius },
            style: RiskStyle::MODERATE,
            stroke_width: 2.0,
        }
    }

    #[test]
    fn test_clear_overlay() {
        let mut scene = SceneSurface::new();
        scene.add_feature(circle(6000.0));
        scene.add_feature(circle(6000.0));
        assert_eq!(scene.features().len(), 2);

        scene.clear_overlay();
        assert!(scene.features().is_empty());
    }

    #[test]
    fn test_circle_export_is_closed_ring() {
        let mut scene = SceneSurface::new();
        scene.add_feature(circle(6000.0));

        let collection = scene.to_geojson();
        let feature = &collection.features[0];
        let Some(Value::Polygon(rings)) = feature.geometry.as_ref().map(|g| &g.value) else {
            panic!("circle should export as a polygon");
        };

        assert_eq!(rings[0].len(), CIRCLE_SEGMENTS + 1);
        assert_eq!(rings[0].first(), rings[0].last());

        // First point lies `radius` east of the center.
        let east = projection::from_lon_lat(radisense_core::models::Coordinate::new(
            rings[0][0][0],
            rings[0][0][1],
        ));
        assert!((east.x() - 6000.0).abs() < 1e-6);

        let properties = feature.properties.as_ref().unwrap();
        assert_eq!(properties["kind"], "risk_buffer");
        assert_eq!(properties["stroke"], "#facc15");
        assert_eq!(properties["radius_m"], 6000.0);
    }

    #[test]
    fn test_popup_is_exported_as_foreign_member() {
        let mut scene = SceneSurface::new();
        assert!(scene.to_geojson().foreign_members.is_none());

        scene.show_popup(Popup {
            title: "RADIATION RISK",
            level: "LOW".to_string(),
            score: "0.1".to_string(),
            color: "#22c55e",
            offset: (0.0, -15.0),
        });

        let members = scene.to_geojson().foreign_members.unwrap();
        assert_eq!(members["popup"]["risk_level"], "LOW");

        scene.hide_popup();
        assert!(scene.popup().is_none());
    }
}
