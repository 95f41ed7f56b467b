//! Configuration loading for CLI commands

use crate::cli::{AnalysisOptions, Cli};
use crate::errors;
use anyhow::Result;
use radisense_core::config::{parse_api_url, CliConfigOverrides, LayeredConfig};
use radisense_core::RadisenseError;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "radisense.toml";

/// Resolve the config file: `--config` wins, otherwise `./radisense.toml` if it exists
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            path.exists().then_some(path)
        }
    }
}

/// Load layered configuration with CLI overrides
pub fn load_config(cli: &Cli, analysis: Option<&AnalysisOptions>) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = config_path(cli.config.as_deref()) {
        config = config.load_from_file(&path).map_err(into_cli_error)?;
    }

    let mut config = config.load_from_env();

    let api_url = cli.api_url.as_deref().map(parse_api_url).transpose().map_err(into_cli_error)?;

    let mut overrides = CliConfigOverrides { api_url, ..Default::default() };
    if let Some(analysis) = analysis {
        overrides.aoi_margin = analysis.margin;
        overrides.start_date = analysis.start;
        overrides.end_date = analysis.end;
        overrides.satellite = analysis.satellite;
    }
    config.update_from_cli(overrides);

    config.validate().map_err(into_cli_error)?;
    tracing::debug!(
        api_url = %config.api_url.value,
        source = ?config.api_url.source,
        "configuration loaded"
    );
    Ok(config)
}

fn into_cli_error(error: RadisenseError) -> anyhow::Error {
    match error {
        RadisenseError::ConfigInvalid { key, reason } => errors::invalid_config(&key, &reason),
        other => errors::from_core(&other),
    }
    .into()
}
