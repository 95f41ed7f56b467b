//! Run command implementation

use crate::cli::{Cli, RunArgs};
use crate::config::load_config;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::RunOutput;
use crate::progress;
use anyhow::Result;
use radisense_core::control::{PanelView, PROCESSING_TEXT};
use radisense_core::{AnalysisForm, RunOutcome};

pub async fn execute(cli: &Cli, args: &RunArgs, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, Some(&args.analysis))?;
    let workflow = super::build_workflow(&config)?;
    let mut renderer = super::build_renderer(&config)?;

    let form = AnalysisForm::new(args.lat.clone(), args.lon.clone())
        .with_dates(config.start_date.value, config.end_date.value);

    let spinner = progress::analysis_spinner(PROCESSING_TEXT, output.is_json());
    let outcome = workflow.run(&form).await;
    spinner.finish_and_clear();

    let failure = match outcome {
        RunOutcome::Skipped(reason) => return Err(super::skip_error(reason, &form).into()),
        RunOutcome::Failed(e) => Some(e),
        RunOutcome::Completed(_) => None,
    };

    let state = workflow.state();
    renderer.render_state(&state);
    if let Some(path) = &args.geojson {
        super::export_overlay(renderer.surface(), path)?;
    }

    if let Some(e) = failure {
        return Err(errors::from_core(&e).into());
    }

    let map = super::map_output(&state, renderer.surface(), args.geojson.as_deref());
    let view = PanelView::from_state(&state);

    if output.is_json() {
        output.result(RunOutput {
            aoi: state.current_aoi.clone(),
            start_date: form.start_date,
            end_date: form.end_date,
            satellite: config.satellite.value,
            result: state.current_result.clone(),
            error: state.last_error.clone(),
            panel: view,
            map,
        })?;
    } else {
        output.section("Analysis");
        output.kv(
            "Center",
            format!("{}, {} (lat, lon)", form.latitude.trim(), form.longitude.trim()),
        );
        output.kv("Date range", format!("{} to {}", form.start_date, form.end_date));
        if let Some(satellite) = config.satellite.value {
            output.kv("Satellite", satellite);
        }

        output.section("Result");
        output.panel(&view);

        if let Some(map) = &map {
            super::show_map(output, map);
            if let Some(path) = &map.geojson_path {
                output.success(format!("Overlay written to {}", path));
            }
        }
    }

    Ok(())
}
