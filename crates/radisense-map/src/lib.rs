//! RadiSense Map - Map rendering of analysis runs
//!
//! This crate turns the published AOI and analysis result into map overlay
//! features, frames the viewport, and addresses basemap tiles. Drawing goes
//! through the [`MapSurface`] port so the renderer stays independent of any
//! particular mapping backend.

pub mod projection;
pub mod renderer;
pub mod scene;
pub mod style;
pub mod surface;
pub mod tiles;
pub mod view;

pub use renderer::MapRenderer;
pub use scene::SceneSurface;
pub use style::RiskStyle;
pub use surface::{FeatureGeometry, FeatureKind, MapSurface, OverlayFeature, Popup};
pub use tiles::{TileCoord, TileSource};
pub use view::{FitOptions, Viewport};
