//! Request and response types exchanged with the analysis service.

use super::geometry::Aoi;
use crate::error::{RadisenseError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Risk level as reported by the analysis service
///
/// The service contract names three levels. Anything else is kept verbatim
/// in `Unrecognized` so it can still be displayed, and classifies as
/// [`RiskCategory::Low`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Unrecognized(String),
}

impl RiskLevel {
    /// Parse a wire value. Matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Self {
        match value {
            "LOW" => RiskLevel::Low,
            "MODERATE" => RiskLevel::Moderate,
            "HIGH" => RiskLevel::High,
            other => RiskLevel::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Unrecognized(raw) => raw,
        }
    }

    /// The category that drives styling; unrecognized levels fall back to low
    pub fn category(&self) -> RiskCategory {
        match self {
            RiskLevel::Moderate => RiskCategory::Moderate,
            RiskLevel::High => RiskCategory::High,
            RiskLevel::Low | RiskLevel::Unrecognized(_) => RiskCategory::Low,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, RiskLevel::Unrecognized(_))
    }
}

impl From<String> for RiskLevel {
    fn from(value: String) -> Self {
        match RiskLevel::parse(&value) {
            RiskLevel::Unrecognized(_) => RiskLevel::Unrecognized(value),
            level => level,
        }
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Unrecognized(raw) => raw,
            level => level.as_str().to_string(),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized risk classification used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiskCategory {
    #[default]
    Low,
    Moderate,
    High,
}

/// Result returned by the analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
}

impl AnalysisResult {
    pub fn new(risk_score: f64, risk_level: RiskLevel) -> Self {
        Self { risk_score, risk_level }
    }

    /// Headline shown by the control surface, e.g. "HIGH RISK"
    pub fn label(&self) -> String {
        format!("{} RISK", self.risk_level)
    }

    pub fn category(&self) -> RiskCategory {
        self.risk_level.category()
    }
}

/// Imagery source requested from the analysis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Satellite {
    #[serde(rename = "sentinel_2")]
    Sentinel2,
    #[serde(rename = "landsat_9")]
    Landsat9,
}

impl Satellite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Satellite::Sentinel2 => "sentinel_2",
            Satellite::Landsat9 => "landsat_9",
        }
    }
}

impl FromStr for Satellite {
    type Err = RadisenseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sentinel_2" | "sentinel2" | "sentinel" => Ok(Satellite::Sentinel2),
            "landsat_9" | "landsat9" | "landsat" => Ok(Satellite::Landsat9),
            _ => Err(RadisenseError::ConfigInvalid {
                key: "satellite".to_string(),
                reason: format!("Unknown satellite: {}. Use sentinel_2 or landsat_9", s),
            }),
        }
    }
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive calendar date range for an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(RadisenseError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The one-year window the control surface starts with
    pub fn default_window() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::default_window()
    }
}

/// Request body for `POST /api/v1/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub aoi: Aoi,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satellite: Option<Satellite>,
}

impl AnalysisRequest {
    pub fn new(aoi: Aoi, dates: DateRange) -> Self {
        Self { aoi, start_date: dates.start, end_date: dates.end, satellite: None }
    }

    pub fn with_satellite(mut self, satellite: Option<Satellite>) -> Self {
        self.satellite = satellite;
        self
    }
}

/// Response from `GET /api/v1/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
