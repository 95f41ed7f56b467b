//! Map viewport: center, zoom, and fitting to an extent

use crate::projection::{self, HALF_WORLD};
use geo::{Point, Rect};
use radisense_core::models::Coordinate;
use std::time::Duration;

/// Ground resolution at zoom 0 for 256px tiles, in meters per pixel
pub const RESOLUTION_ZOOM_0: f64 = 2.0 * HALF_WORLD / 256.0;

pub const DEFAULT_CENTER: Coordinate = Coordinate { lon: 78.9, lat: 22.5 };
pub const DEFAULT_ZOOM: f64 = 5.0;
pub const MAX_ZOOM: f64 = 28.0;

/// Fit options used when framing the AOI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Padding in pixels: top, right, bottom, left
    pub padding: [f64; 4],
    /// Animation length
    pub duration: Duration,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self { padding: [80.0; 4], duration: Duration::from_millis(600) }
    }
}

/// What the map is looking at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Center in EPSG:3857 meters
    pub center: Point<f64>,
    pub zoom: f64,
    /// Map size in pixels (width, height)
    pub size: (f64, f64),
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: projection::from_lon_lat(DEFAULT_CENTER),
            zoom: DEFAULT_ZOOM,
            size: (1280.0, 800.0),
        }
    }
}

impl Viewport {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = (width, height);
        self
    }

    /// Meters per pixel at the current zoom
    pub fn resolution(&self) -> f64 {
        RESOLUTION_ZOOM_0 / 2f64.powf(self.zoom)
    }

    pub fn center_lon_lat(&self) -> Coordinate {
        projection::to_lon_lat(self.center)
    }

    /// Visible extent in EPSG:3857 meters
    pub fn extent(&self) -> Rect<f64> {
        let half_w = self.size.0 * self.resolution() / 2.0;
        let half_h = self.size.1 * self.resolution() / 2.0;
        Rect::new(
            (self.center.x() - half_w, self.center.y() - half_h),
            (self.center.x() + half_w, self.center.y() + half_h),
        )
    }

    /// The viewport that shows `extent` inside the padded area
    ///
    /// The size is kept. When padding leaves no room, or the extent is
    /// degenerate, the zoom is capped at [`MAX_ZOOM`].
    pub fn fit(&self, extent: Rect<f64>, options: &FitOptions) -> Viewport {
        let [top, right, bottom, left] = options.padding;
        let inner_w = (self.size.0 - left - right).max(1.0);
        let inner_h = (self.size.1 - top - bottom).max(1.0);

        let resolution = (extent.width() / inner_w).max(extent.height() / inner_h);
        let zoom = if resolution > 0.0 {
            (RESOLUTION_ZOOM_0 / resolution).log2().min(MAX_ZOOM)
        } else {
            MAX_ZOOM
        };
        let resolution = RESOLUTION_ZOOM_0 / 2f64.powf(zoom);

        // Shift the center so the extent sits in the middle of the padded area.
        let center = extent.center();
        let dx = (right - left) / 2.0 * resolution;
        let dy = (top - bottom) / 2.0 * resolution;

        Viewport { center: Point::new(center.x + dx, center.y + dy), zoom, size: self.size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radisense_core::generate_aoi;

    #[test]
    fn test_default_view() {
        let view = Viewport::default();
        let center = view.center_lon_lat();
        assert!((center.lon - 78.9).abs() < 1e-9);
        assert!((center.lat - 22.5).abs() < 1e-9);
        assert_eq!(view.zoom, 5.0);
    }

    #[test]
    fn test_fit_contains_extent_with_padding() {
        let aoi = generate_aoi(20.0, 80.0);
        let ring: Vec<_> = aoi.ring().iter().map(|c| projection::from_lon_lat(*c)).collect();
        let extent = Rect::new(
            (ring[0].x(), ring[0].y()),
            (ring[2].x(), ring[2].y()),
        );

        let view = Viewport::default().fit(extent, &FitOptions::default());
        let visible = view.extent();

        let margin = 80.0 * view.resolution();
        assert!(visible.min().x <= extent.min().x - margin + 1e-6);
        assert!(visible.max().x >= extent.max().x + margin - 1e-6);
        assert!(visible.min().y <= extent.min().y - margin + 1e-6);
        assert!(visible.max().y >= extent.max().y + margin - 1e-6);
        assert!(view.zoom > DEFAULT_ZOOM);
    }

    #[test]
    fn test_fit_centers_on_extent() {
        let extent = Rect::new((1000.0, 2000.0), (3000.0, 4000.0));
        let view = Viewport::default().fit(extent, &FitOptions::default());
        assert!((view.center.x() - 2000.0).abs() < 1e-6);
        assert!((view.center.y() - 3000.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_degenerate_extent() {
        let extent = Rect::new((10.0, 10.0), (10.0, 10.0));
        let view = Viewport::default().fit(extent, &FitOptions::default());
        assert_eq!(view.zoom, MAX_ZOOM);
    }

    #[test]
    fn test_default_fit_options() {
        let options = FitOptions::default();
        assert_eq!(options.padding, [80.0, 80.0, 80.0, 80.0]);
        assert_eq!(options.duration, Duration::from_millis(600));
    }
}
