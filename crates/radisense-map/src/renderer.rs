//! Map renderer: published workflow state in, overlay features out.
//!
//! [`MapRenderer::render`] is the only drawing entry point. It clears the
//! overlay before drawing, so calling it again with the same arguments leaves
//! the surface in the same state.

use crate::projection;
use crate::style::{RiskStyle, CIRCLE_STROKE_WIDTH, POLYGON_STROKE_WIDTH};
use crate::surface::{FeatureGeometry, FeatureKind, MapSurface, OverlayFeature, Popup};
use crate::tiles::TileSource;
use crate::view::{FitOptions, Viewport};
use geo::{BoundingRect, LineString, Polygon};
use radisense_core::models::{AnalysisResult, Aoi};
use radisense_core::WorkflowState;
use tokio::sync::watch;
use tracing::debug;

/// Draws analysis runs on a [`MapSurface`]
pub struct MapRenderer<M> {
    surface: M,
}

impl<M: MapSurface> MapRenderer<M> {
    /// Initialize the surface: basemap, empty overlay, default view, no popup
    pub fn new(mut surface: M, basemap: TileSource) -> Self {
        surface.set_basemap(basemap);
        surface.clear_overlay();
        surface.set_view(Viewport::default());
        surface.hide_popup();
        Self { surface }
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn into_surface(self) -> M {
        self.surface
    }

    /// Draw the AOI and its risk buffer, then frame the AOI
    ///
    /// The overlay is only touched when both an AOI and a result are present.
    /// The popup follows the result alone. Returns whether the overlay was
    /// redrawn.
    pub fn render(&mut self, aoi: Option<&Aoi>, result: Option<&AnalysisResult>) -> bool {
        match result {
            Some(result) => self.surface.show_popup(Popup::from(result)),
            None => self.surface.hide_popup(),
        }

        let (Some(aoi), Some(result)) = (aoi, result) else {
            return false;
        };

        let style = RiskStyle::for_result(result);
        let ring: Vec<_> = aoi.ring().iter().map(|c| projection::from_lon_lat(*c)).collect();
        let polygon = Polygon::new(LineString::from(ring), vec![]);
        let center = projection::from_lon_lat(aoi.first_vertex());

        self.surface.clear_overlay();
        self.surface.add_feature(OverlayFeature {
            kind: FeatureKind::Aoi,
            geometry: FeatureGeometry::Polygon(polygon.clone()),
            style,
            stroke_width: POLYGON_STROKE_WIDTH,
        });
        self.surface.add_feature(OverlayFeature {
            kind: FeatureKind::RiskBuffer,
            geometry: FeatureGeometry::Circle { center, radius: style.radius_m },
            style,
            stroke_width: CIRCLE_STROKE_WIDTH,
        });

        if let Some(extent) = polygon.bounding_rect() {
            self.surface.fit_view(extent, FitOptions::default());
        }

        debug!(
            risk_level = %result.risk_level,
            radius_m = style.radius_m,
            "Rendered analysis overlay"
        );
        true
    }

    pub fn render_state(&mut self, state: &WorkflowState) -> bool {
        self.render(state.current_aoi.as_ref(), state.current_result.as_ref())
    }

    /// Re-render on every published state until the workflow is dropped
    pub async fn follow(&mut self, mut updates: watch::Receiver<WorkflowState>) {
        let state = updates.borrow_and_update().clone();
        self.render_state(&state);

        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            self.render_state(&state);
        }
    }
}
