//! Error types for RadiSense

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RadisenseError {
    // Geometry errors
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    // Input errors
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    // Analysis service errors
    #[error("Analysis failed (HTTP {status})")]
    AnalysisFailed { status: u16 },

    #[error("Failed to decode analysis response: {0}")]
    Decode(String),

    #[error("Analysis service unreachable at {url}: {reason}")]
    Transport { url: String, reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RadisenseError {
    /// Whether the error came from talking to the analysis service
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            RadisenseError::AnalysisFailed { .. }
                | RadisenseError::Decode(_)
                | RadisenseError::Transport { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RadisenseError>;
