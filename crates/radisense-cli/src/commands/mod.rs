//! Command implementations

mod aoi;
mod config;
mod health;
mod interactive;
mod run;

use crate::cli::{Cli, Commands};
use crate::errors::{self, CliError};
use crate::output::OutputWriter;
use crate::output_types::MapOutput;
use anyhow::{Context, Result};
use radisense_client::HttpAnalysisClient;
use radisense_core::config::LayeredConfig;
use radisense_core::{AnalysisForm, SkipReason, Workflow, WorkflowState};
use radisense_map::tiles::MAX_ZOOM;
use radisense_map::{MapRenderer, RiskStyle, SceneSurface, TileCoord, TileSource};
use std::fs;
use std::path::Path;

/// Execute a CLI command
pub async fn execute(cli: Cli, output: &OutputWriter) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => run::execute(&cli, args, output).await,
        Commands::Aoi(args) => aoi::execute(&cli, args, output),
        Commands::Health => health::execute(&cli, output).await,
        Commands::Interactive(args) => interactive::execute(&cli, args, output).await,
        Commands::Config => config::execute(&cli, output),
    }
}

fn build_workflow(config: &LayeredConfig) -> Result<Workflow<HttpAnalysisClient>> {
    let client = HttpAnalysisClient::new(config.api_url.value.clone());
    let workflow = Workflow::new(client)
        .with_margin(config.aoi_margin.value)?
        .with_satellite(config.satellite.value);
    Ok(workflow)
}

fn build_renderer(config: &LayeredConfig) -> Result<MapRenderer<SceneSurface>> {
    let basemap = TileSource::new(config.basemap_url.value.clone())?;
    Ok(MapRenderer::new(SceneSurface::new(), basemap))
}

/// Why a trigger did nothing, as a user-facing error
fn skip_error(reason: SkipReason, form: &AnalysisForm) -> CliError {
    match reason {
        SkipReason::InputIncomplete => errors::invalid_coordinates(&form.latitude, &form.longitude),
        SkipReason::InvalidDateRange => errors::invalid_date_range(&format!(
            "Start date {} is after end date {}",
            form.start_date, form.end_date
        )),
        SkipReason::AlreadyInFlight => CliError::new("An analysis is already running"),
    }
}

/// Summary of the rendered map, when the state has something drawn
fn map_output(
    state: &WorkflowState,
    scene: &SceneSurface,
    geojson_path: Option<&Path>,
) -> Option<MapOutput> {
    let result = state.current_result.as_ref()?;
    state.current_aoi.as_ref()?;

    let style = RiskStyle::for_result(result);
    let view = scene.view();
    let center = view.center_lon_lat();
    let zoom = view.zoom.floor().clamp(0.0, f64::from(MAX_ZOOM)) as u8;
    let tile = TileCoord::containing(center.lon, center.lat, zoom);

    Some(MapOutput {
        stroke: style.stroke,
        fill: style.fill,
        radius_m: style.radius_m,
        center: [center.lon, center.lat],
        zoom: view.zoom,
        basemap_tile: scene.basemap().map(|b| b.url(tile)).unwrap_or_default(),
        geojson_path: geojson_path.map(|p| p.display().to_string()),
    })
}

/// Write whatever overlay is on the surface; false when nothing has been drawn
fn export_overlay(scene: &SceneSurface, path: &Path) -> Result<bool> {
    if scene.features().is_empty() {
        return Ok(false);
    }
    write_geojson(scene, path)?;
    Ok(true)
}

fn write_geojson(scene: &SceneSurface, path: &Path) -> Result<()> {
    let geojson = geojson::GeoJson::FeatureCollection(scene.to_geojson());
    let content = serde_json::to_string_pretty(&geojson)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write GeoJSON: {}", path.display()))?;
    Ok(())
}

fn show_map(output: &OutputWriter, map: &MapOutput) {
    output.section("Map");
    output.kv("Risk buffer", format!("{} m", map.radius_m));
    output.kv("Stroke", map.stroke);
    output.kv("Fill", map.fill);
    output.kv(
        "View",
        format!("zoom {:.2} at {:.4}, {:.4} (lon, lat)", map.zoom, map.center[0], map.center[1]),
    );
    output.kv("Basemap tile", &map.basemap_tile);
}
