//! Health command implementation

use crate::cli::Cli;
use crate::config::load_config;
use crate::errors::CliError;
use crate::output::OutputWriter;
use crate::output_types::HealthOutput;
use crate::progress;
use anyhow::Result;
use radisense_client::HttpAnalysisClient;

pub async fn execute(cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, None)?;
    let client = HttpAnalysisClient::new(config.api_url.value.clone());

    let spinner = progress::analysis_spinner("Checking analysis service...", output.is_json());
    let health = client.health().await;
    spinner.finish_and_clear();

    let health = health?;
    if !health.is_ok() {
        return Err(CliError::new(format!("Analysis service reported '{}'", health.status))
            .with_context(format!("URL: {}", client.health_url()))
            .with_suggestion("Check the service logs")
            .into());
    }

    if output.is_json() {
        output.result(HealthOutput {
            api_url: client.base_url().to_string(),
            status: health.status,
        })?;
    } else {
        output.success(format!("Analysis service is up at {}", client.base_url()));
    }

    Ok(())
}
