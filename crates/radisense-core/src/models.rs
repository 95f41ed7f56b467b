pub mod analysis;
pub mod geometry;

pub use analysis::{
    AnalysisRequest, AnalysisResult, DateRange, HealthStatus, RiskCategory, RiskLevel, Satellite,
};
pub use geometry::{Aoi, Bounds, Coordinate};
