use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use radisense_core::models::Satellite;
use std::path::PathBuf;

/// RadiSense - Satellite-based radiation signal detection
#[derive(Parser, Debug)]
#[command(name = "radisense")]
#[command(about = "Satellite-based radiation signal detection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./radisense.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Analysis service base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one analysis for a point and show the result
    Run(RunArgs),

    /// Print the AOI generated for a point
    Aoi(AoiArgs),

    /// Check that the analysis service is reachable
    Health,

    /// Prompt for inputs and run analyses until you stop
    Interactive(InteractiveArgs),

    /// Show resolved configuration values and where they came from
    Config,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Latitude of the AOI center, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: String,

    /// Longitude of the AOI center, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: String,

    #[command(flatten)]
    pub analysis: AnalysisOptions,

    /// Write the rendered overlay as a GeoJSON FeatureCollection
    #[arg(long, value_name = "FILE")]
    pub geojson: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct AoiArgs {
    /// Latitude of the AOI center, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the AOI center, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// AOI half-width in degrees
    #[arg(long)]
    pub margin: Option<f64>,
}

#[derive(Parser, Debug)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub analysis: AnalysisOptions,

    /// Write the last rendered overlay as a GeoJSON FeatureCollection on exit
    #[arg(long, value_name = "FILE")]
    pub geojson: Option<PathBuf>,
}

/// Options shared by commands that call the analysis service
#[derive(Parser, Debug)]
pub struct AnalysisOptions {
    /// Start of the date range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// End of the date range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub end: Option<NaiveDate>,

    /// Imagery source (sentinel_2 or landsat_9)
    #[arg(long)]
    pub satellite: Option<Satellite>,

    /// AOI half-width in degrees
    #[arg(long)]
    pub margin: Option<f64>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    radisense_core::config::parse_date(value).map_err(|e| e.to_string())
}
