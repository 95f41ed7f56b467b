//! Analysis workflow: one run at a time, from form input to published result.
//!
//! [`Workflow::run`] is the only mutator of [`WorkflowState`]. State is
//! published through a `tokio::sync::watch` channel so the map renderer and
//! the control surface can re-render on every change.
//!
//! A run goes through these steps:
//! 1. Reject (no state change) when a coordinate is missing or unparseable,
//!    the date range is inverted, or another run is in flight.
//! 2. Generate the AOI and publish it together with `in_flight = true`,
//!    clearing the previous result.
//! 3. Call the analysis service once.
//! 4. Publish the result on success, or the error message on failure.
//! 5. Clear `in_flight` through [`InFlightGuard`], whatever happened.

use crate::aoi::{self, DEFAULT_MARGIN_DEGREES};
use crate::error::{RadisenseError, Result};
use crate::models::{AnalysisRequest, AnalysisResult, Aoi, DateRange, Satellite};
use crate::ports::AnalysisService;
use chrono::NaiveDate;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Published state of the current session
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowState {
    pub current_aoi: Option<Aoi>,
    pub current_result: Option<AnalysisResult>,
    pub in_flight: bool,
    /// Message of the most recent failed run, cleared when a new run starts
    pub last_error: Option<String>,
}

/// Raw control surface input
///
/// Coordinates stay as the user typed them; parsing happens when a run is
/// triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisForm {
    pub latitude: String,
    pub longitude: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Default for AnalysisForm {
    fn default() -> Self {
        let window = DateRange::default_window();
        Self {
            latitude: String::new(),
            longitude: String::new(),
            start_date: window.start,
            end_date: window.end,
        }
    }
}

impl AnalysisForm {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self { latitude: latitude.into(), longitude: longitude.into(), ..Default::default() }
    }

    pub fn with_dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Parsed `(lat, lon)`, or `None` when either field is blank or not a finite number
    pub fn center(&self) -> Option<(f64, f64)> {
        Some((parse_coordinate(&self.latitude)?, parse_coordinate(&self.longitude)?))
    }

    pub fn date_range(&self) -> Result<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

fn parse_coordinate(field: &str) -> Option<f64> {
    let value = field.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Why a trigger was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A coordinate field is empty or not a number
    InputIncomplete,
    /// Another run has not finished yet
    AlreadyInFlight,
    /// Start date is after end date
    InvalidDateRange,
}

/// Outcome of a single trigger
#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing happened; state is unchanged
    Skipped(SkipReason),
    /// The service answered and the result was published
    Completed(AnalysisResult),
    /// The service call failed; no result was published
    Failed(RadisenseError),
}

impl RunOutcome {
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RunOutcome::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, RunOutcome::Skipped(_))
    }
}

/// Clears `in_flight` when dropped, including when the run future is dropped mid-call
struct InFlightGuard<'a> {
    state: &'a watch::Sender<WorkflowState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.in_flight = false);
    }
}

/// Single-session analysis workflow
pub struct Workflow<S> {
    service: S,
    state: watch::Sender<WorkflowState>,
    margin: f64,
    satellite: Option<Satellite>,
}

impl<S: AnalysisService> Workflow<S> {
    /// Create a workflow with the default AOI margin
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(WorkflowState::default());
        Self { service, state, margin: DEFAULT_MARGIN_DEGREES, satellite: None }
    }

    /// Use a custom AOI half-width in degrees
    pub fn with_margin(mut self, margin: f64) -> Result<Self> {
        self.margin = aoi::validate_margin(margin)?;
        Ok(self)
    }

    /// Request a specific imagery source
    pub fn with_satellite(mut self, satellite: Option<Satellite>) -> Self {
        self.satellite = satellite;
        self
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.borrow().in_flight
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Trigger one analysis run
    pub async fn run(&self, form: &AnalysisForm) -> RunOutcome {
        let Some((lat, lon)) = form.center() else {
            debug!(
                latitude = %form.latitude,
                longitude = %form.longitude,
                "Ignoring run: incomplete coordinates"
            );
            return RunOutcome::Skipped(SkipReason::InputIncomplete);
        };

        let dates = match form.date_range() {
            Ok(dates) => dates,
            Err(e) => {
                debug!(error = %e, "Ignoring run: invalid date range");
                return RunOutcome::Skipped(SkipReason::InvalidDateRange);
            }
        };

        let aoi = aoi::square(lat, lon, self.margin);

        // Check and claim in one publication so overlapping triggers see the claim.
        let claimed = self.state.send_if_modified(|state| {
            if state.in_flight {
                return false;
            }
            state.current_aoi = Some(aoi.clone());
            state.current_result = None;
            state.last_error = None;
            state.in_flight = true;
            true
        });

        if !claimed {
            debug!("Ignoring run: analysis already in flight");
            return RunOutcome::Skipped(SkipReason::AlreadyInFlight);
        }

        let _guard = InFlightGuard { state: &self.state };

        info!(
            lat,
            lon,
            start_date = %dates.start,
            end_date = %dates.end,
            "Starting analysis run"
        );

        let request = AnalysisRequest::new(aoi, dates).with_satellite(self.satellite);

        match self.service.analyze(&request).await {
            Ok(result) => {
                info!(
                    risk_level = %result.risk_level,
                    risk_score = result.risk_score,
                    "Analysis completed"
                );
                self.state.send_modify(|state| state.current_result = Some(result.clone()));
                RunOutcome::Completed(result)
            }
            Err(e) => {
                warn!(error = %e, "Analysis failed");
                self.state.send_modify(|state| state.last_error = Some(e.to_string()));
                RunOutcome::Failed(e)
            }
        }
    }
}
