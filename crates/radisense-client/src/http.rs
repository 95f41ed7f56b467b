use async_trait::async_trait;
use radisense_core::config::DEFAULT_API_URL;
use radisense_core::error::{RadisenseError, Result};
use radisense_core::models::{AnalysisRequest, AnalysisResult, HealthStatus};
use radisense_core::ports::AnalysisService;
use tracing::debug;

/// HTTP adapter for the RadiSense analysis service
pub struct HttpAnalysisClient {
    /// Base URL of the service (e.g., "http://127.0.0.1:8000")
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    pub const ANALYZE_PATH: &'static str = "/api/v1/analyze";
    pub const HEALTH_PATH: &'static str = "/api/v1/health";

    /// Create a new client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client: reqwest::Client::new() }
    }

    /// Create with the default localhost URL
    pub fn localhost() -> Self {
        Self::new(DEFAULT_API_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url, Self::ANALYZE_PATH)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, Self::HEALTH_PATH)
    }

    /// Check that the service is up
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.health_url();
        debug!(url = %url, "Checking analysis service health");

        let response = self.client.get(&url).send().await.map_err(|e| transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RadisenseError::AnalysisFailed { status: status.as_u16() });
        }

        response.json::<HealthStatus>().await.map_err(|e| RadisenseError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let url = self.analyze_url();
        debug!(url = %url, "Submitting analysis request");

        let response =
            self.client.post(&url).json(request).send().await.map_err(|e| transport(&url, e))?;

        // The error body is not part of the contract, so it is never read.
        let status = response.status();
        if !status.is_success() {
            return Err(RadisenseError::AnalysisFailed { status: status.as_u16() });
        }

        response.json::<AnalysisResult>().await.map_err(|e| RadisenseError::Decode(e.to_string()))
    }
}

fn transport(url: &str, error: reqwest::Error) -> RadisenseError {
    RadisenseError::Transport { url: url.to_string(), reason: error.to_string() }
}
