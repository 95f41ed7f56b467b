//! RadiSense Core - Domain models, AOI generation, and the analysis workflow
//!
//! This crate contains the data model shared by every RadiSense crate, the
//! port implemented by analysis service adapters, and the workflow state
//! machine that sequences a single analysis run.

pub mod aoi;
pub mod config;
pub mod control;
pub mod error;
pub mod models;
pub mod ports;
pub mod workflow;

pub use aoi::{generate_aoi, generate_aoi_with_margin, DEFAULT_MARGIN_DEGREES};
pub use error::{RadisenseError, Result};
pub use ports::AnalysisService;
pub use workflow::{AnalysisForm, RunOutcome, SkipReason, Workflow, WorkflowState};
