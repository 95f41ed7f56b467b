//! Risk level to overlay style mapping

use radisense_core::models::{AnalysisResult, RiskCategory, RiskLevel};
use serde::Serialize;

/// Stroke width of the AOI polygon outline, in pixels
pub const POLYGON_STROKE_WIDTH: f64 = 2.5;

/// Stroke width of the risk buffer circle, in pixels
pub const CIRCLE_STROKE_WIDTH: f64 = 2.0;

/// Fill opacity shared by every risk style
pub const FILL_OPACITY: f64 = 0.25;

/// Colors and buffer radius for one risk category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskStyle {
    /// Stroke color as `#rrggbb`
    pub stroke: &'static str,
    /// Fill color as CSS `rgba(...)` at [`FILL_OPACITY`]
    pub fill: &'static str,
    /// Risk buffer radius in meters
    pub radius_m: f64,
}

impl RiskStyle {
    pub const LOW: RiskStyle =
        RiskStyle { stroke: "#22c55e", fill: "rgba(34,197,94,0.25)", radius_m: 3000.0 };

    pub const MODERATE: RiskStyle =
        RiskStyle { stroke: "#facc15", fill: "rgba(250,204,21,0.25)", radius_m: 6000.0 };

    pub const HIGH: RiskStyle =
        RiskStyle { stroke: "#ef4444", fill: "rgba(239,68,68,0.25)", radius_m: 10000.0 };

    pub fn for_category(category: RiskCategory) -> Self {
        match category {
            RiskCategory::Low => Self::LOW,
            RiskCategory::Moderate => Self::MODERATE,
            RiskCategory::High => Self::HIGH,
        }
    }

    /// Total over all levels; unrecognized levels get the low style
    pub fn for_level(level: &RiskLevel) -> Self {
        Self::for_category(level.category())
    }

    pub fn for_result(result: &AnalysisResult) -> Self {
        Self::for_level(&result.risk_level)
    }
}
