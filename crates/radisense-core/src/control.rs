//! Control surface view model.
//!
//! Pure projection of [`WorkflowState`] into what the control panel shows.
//! The terminal front end renders this; it never inspects workflow state
//! directly.

use crate::models::{AnalysisResult, RiskCategory};
use crate::workflow::WorkflowState;
use serde::Serialize;

pub const RUN_LABEL: &str = "▶ Run Analysis";
pub const BUSY_LABEL: &str = "Analyzing…";
pub const EMPTY_TEXT: &str = "No analysis yet";
pub const PROCESSING_TEXT: &str = "Processing satellite signals…";

/// Result area of the panel; exactly one variant is shown at a time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum ResultPanel {
    Empty { error: Option<String> },
    Processing,
    Summary(ResultSummary),
}

/// Textual result summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    /// e.g. "HIGH RISK"
    pub headline: String,
    pub score: String,
    pub category: RiskCategory,
}

impl From<&AnalysisResult> for ResultSummary {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            headline: result.label(),
            score: result.risk_score.to_string(),
            category: result.category(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub trigger_enabled: bool,
    pub trigger_label: &'static str,
    pub panel: ResultPanel,
}

impl PanelView {
    pub fn from_state(state: &WorkflowState) -> Self {
        let panel = if state.in_flight {
            ResultPanel::Processing
        } else if let Some(result) = &state.current_result {
            ResultPanel::Summary(result.into())
        } else {
            ResultPanel::Empty { error: state.last_error.clone() }
        };

        Self {
            trigger_enabled: !state.in_flight,
            trigger_label: if state.in_flight { BUSY_LABEL } else { RUN_LABEL },
            panel,
        }
    }
}
