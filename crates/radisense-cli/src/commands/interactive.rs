//! Interactive session implementation

use crate::cli::{Cli, InteractiveArgs};
use crate::config::load_config;
use crate::interactive;
use crate::output::OutputWriter;
use crate::progress;
use anyhow::Result;
use radisense_core::control::{PanelView, PROCESSING_TEXT};
use radisense_core::{AnalysisForm, RunOutcome};

pub async fn execute(cli: &Cli, args: &InteractiveArgs, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, Some(&args.analysis))?;
    let workflow = super::build_workflow(&config)?;
    let mut renderer = super::build_renderer(&config)?;

    // The renderer follows published state until the session ends.
    let updates = workflow.subscribe();
    let follower = tokio::spawn(async move {
        renderer.follow(updates).await;
        renderer
    });

    interactive::print_header();
    output.info(format!("Analysis service: {}", config.api_url.value));

    let mut form =
        AnalysisForm::default().with_dates(config.start_date.value, config.end_date.value);

    loop {
        form = interactive::prompt_form(&form)?;

        let spinner = progress::analysis_spinner(PROCESSING_TEXT, output.is_json());
        let outcome = workflow.run(&form).await;
        spinner.finish_and_clear();

        if let RunOutcome::Skipped(reason) = outcome {
            output.warning(super::skip_error(reason, &form));
        }

        let view = PanelView::from_state(&workflow.state());
        if output.is_json() {
            output.result(&view)?;
        } else {
            output.section("Result");
            output.panel(&view);
        }

        if !interactive::confirm_another()? {
            break;
        }
    }

    let state = workflow.state();
    drop(workflow);
    let renderer = follower.await?;

    let scene = renderer.surface();
    if let Some(map) = super::map_output(&state, scene, args.geojson.as_deref()) {
        if !output.is_json() {
            super::show_map(output, &map);
        }
    }

    if let Some(path) = &args.geojson {
        if super::export_overlay(scene, path)? {
            output.success(format!("Overlay written to {}", path.display()));
        } else {
            output.warning("Nothing to export: no analysis completed in this session");
        }
    }

    Ok(())
}
