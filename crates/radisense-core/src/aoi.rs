//! Area-of-interest generation from a center point.

use crate::error::{RadisenseError, Result};
use crate::models::{Aoi, Coordinate};

/// Half-width of the generated square, in degrees
pub const DEFAULT_MARGIN_DEGREES: f64 = 0.03;

/// Generate the default AOI square centered on `(lon, lat)`
///
/// No range validation is done: out-of-range coordinates give a
/// well-formed ring that is geographically meaningless.
pub fn generate_aoi(lat: f64, lon: f64) -> Aoi {
    square(lat, lon, DEFAULT_MARGIN_DEGREES)
}

/// Generate an AOI square with a custom half-width
pub fn generate_aoi_with_margin(lat: f64, lon: f64, margin: f64) -> Result<Aoi> {
    let margin = validate_margin(margin)?;
    Ok(square(lat, lon, margin))
}

/// Check that a margin produces a ring with non-zero area
pub fn validate_margin(margin: f64) -> Result<f64> {
    if !margin.is_finite() || margin <= 0.0 {
        return Err(RadisenseError::InvalidGeometry {
            reason: format!("AOI margin must be a positive number of degrees, got {}", margin),
        });
    }
    Ok(margin)
}

/// Vertex order: SW, SE, NE, NW, back to SW
pub(crate) fn square(lat: f64, lon: f64, d: f64) -> Aoi {
    Aoi::from_ring_unchecked(vec![
        Coordinate::new(lon - d, lat - d),
        Coordinate::new(lon + d, lat - d),
        Coordinate::new(lon + d, lat + d),
        Coordinate::new(lon - d, lat + d),
        Coordinate::new(lon - d, lat - d),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Coordinate, lon: f64, lat: f64) {
        assert!(
            (actual.lon - lon).abs() < 1e-9 && (actual.lat - lat).abs() < 1e-9,
            "expected ({}, {}), got ({}, {})",
            lon,
            lat,
            actual.lon,
            actual.lat
        );
    }

    #[test]
    fn test_generate_aoi_reference_point() {
        let aoi = generate_aoi(20.0, 80.0);
        let ring = aoi.ring();

        assert_eq!(ring.len(), 5);
        assert_close(ring[0], 79.97, 19.97);
        assert_close(ring[1], 80.03, 19.97);
        assert_close(ring[2], 80.03, 20.03);
        assert_close(ring[3], 79.97, 20.03);
        assert_close(ring[4], 79.97, 19.97);
        assert_eq!(ring[0], ring[4]);
    }

    #[test]
    fn test_generated_ring_is_valid() {
        let aoi = generate_aoi(-8.5, 115.0);
        let revalidated = Aoi::from_ring(aoi.ring().to_vec()).unwrap();
        assert_eq!(revalidated, aoi);
        assert!(aoi.area() > 0.0);
    }

    #[test]
    fn test_out_of_range_input_is_not_rejected() {
        let aoi = generate_aoi(123.0, 400.0);
        assert_eq!(aoi.ring().len(), 5);
        assert_close(aoi.first_vertex(), 399.97, 122.97);
    }

    #[test]
    fn test_custom_margin() {
        let aoi = generate_aoi_with_margin(0.0, 0.0, 0.5).unwrap();
        let bounds = aoi.bounds();
        assert_eq!(bounds.width(), 1.0);
        assert_eq!(bounds.height(), 1.0);
    }

    #[test]
    fn test_invalid_margin_rejected() {
        assert!(generate_aoi_with_margin(0.0, 0.0, 0.0).is_err());
        assert!(generate_aoi_with_margin(0.0, 0.0, -0.1).is_err());
        assert!(generate_aoi_with_margin(0.0, 0.0, f64::NAN).is_err());
        assert!(generate_aoi_with_margin(0.0, 0.0, f64::INFINITY).is_err());
    }
}
