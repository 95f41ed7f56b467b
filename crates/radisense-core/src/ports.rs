//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

use crate::error::Result;
use crate::models::{AnalysisRequest, AnalysisResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Port for the remote risk analysis service
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit one analysis request
    ///
    /// Implementations make a single attempt: no retry, no timeout.
    ///
    /// # Errors
    /// * `AnalysisFailed` - the service answered with a non-success status
    /// * `Decode` - the success body did not match [`AnalysisResult`]
    /// * `Transport` - the service could not be reached
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;
}

#[async_trait]
impl<T: AnalysisService + ?Sized> AnalysisService for Arc<T> {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        (**self).analyze(request).await
    }
}
