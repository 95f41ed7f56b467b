use chrono::NaiveDate;
use radisense_core::control::PanelView;
use radisense_core::models::{AnalysisResult, Aoi, Bounds, Satellite};
use serde::Serialize;

/// Output for aoi command
#[derive(Debug, Serialize)]
pub struct AoiOutput {
    pub center: [f64; 2],
    pub margin: f64,
    pub aoi: Aoi,
    pub bounds: Bounds,
    /// Planar area in square degrees
    pub area: f64,
}

/// Output for run command
#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub aoi: Option<Aoi>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub satellite: Option<Satellite>,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub panel: PanelView,
    pub map: Option<MapOutput>,
}

/// Map state after rendering a run
#[derive(Debug, Serialize)]
pub struct MapOutput {
    pub stroke: &'static str,
    pub fill: &'static str,
    pub radius_m: f64,
    /// View center as [lon, lat]
    pub center: [f64; 2],
    pub zoom: f64,
    pub basemap_tile: String,
    pub geojson_path: Option<String>,
}

/// Output for health command
#[derive(Debug, Serialize)]
pub struct HealthOutput {
    pub api_url: String,
    pub status: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub config_file: Option<String>,
    pub api_url: ConfigEntry,
    pub aoi_margin: ConfigEntry,
    pub start_date: ConfigEntry,
    pub end_date: ConfigEntry,
    pub basemap_url: ConfigEntry,
    pub satellite: ConfigEntry,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}
