//! RadiSense Client - Analysis service adapters
//!
//! This crate provides the HTTP adapter for the
//! [`AnalysisService`](radisense_core::AnalysisService) port.

pub mod http;

pub use http::HttpAnalysisClient;
