//! Port to a retained-mode map backend
//!
//! A backend keeps a basemap, one vector overlay, a viewport, and a popup.
//! All geometry handed to it is in EPSG:3857 meters.

use crate::style::RiskStyle;
use crate::tiles::TileSource;
use crate::view::{FitOptions, Viewport};
use geo::{Point, Polygon, Rect};
use radisense_core::models::AnalysisResult;

/// Popup heading
pub const POPUP_TITLE: &str = "RADIATION RISK";

/// Popup anchor offset in pixels, relative to its bottom-center
pub const POPUP_OFFSET: (f64, f64) = (0.0, -15.0);

/// Role of an overlay feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Aoi,
    RiskBuffer,
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Aoi => "aoi",
            FeatureKind::RiskBuffer => "risk_buffer",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureGeometry {
    Polygon(Polygon<f64>),
    /// Radius in projected meters
    Circle { center: Point<f64>, radius: f64 },
}

/// Styled vector feature on the overlay layer
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFeature {
    pub kind: FeatureKind,
    pub geometry: FeatureGeometry,
    pub style: RiskStyle,
    pub stroke_width: f64,
}

/// Result popup content
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub title: &'static str,
    /// Risk level as reported, e.g. "HIGH"
    pub level: String,
    pub score: String,
    /// Text color, same as the overlay stroke
    pub color: &'static str,
    pub offset: (f64, f64),
}

impl From<&AnalysisResult> for Popup {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            title: POPUP_TITLE,
            level: result.risk_level.to_string(),
            score: result.risk_score.to_string(),
            color: RiskStyle::for_result(result).stroke,
            offset: POPUP_OFFSET,
        }
    }
}

/// Retained-mode map backend
pub trait MapSurface {
    fn set_basemap(&mut self, source: TileSource);

    fn set_view(&mut self, view: Viewport);

    /// Remove every overlay feature
    fn clear_overlay(&mut self);

    fn add_feature(&mut self, feature: OverlayFeature);

    /// Frame `extent` (EPSG:3857) in the viewport
    fn fit_view(&mut self, extent: Rect<f64>, options: FitOptions);

    fn show_popup(&mut self, popup: Popup);

    fn hide_popup(&mut self);
}
