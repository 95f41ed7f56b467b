//! Spherical Web Mercator (EPSG:3857) projection

use geo::Point;
use radisense_core::models::Coordinate;
use std::f64::consts::PI;

/// WGS84 semi-major axis in meters
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude at which Web Mercator becomes a square
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Half the projected world width in meters
pub const HALF_WORLD: f64 = PI * EARTH_RADIUS;

/// Project lon/lat degrees to EPSG:3857 meters
///
/// Latitudes beyond [`MAX_LATITUDE`] are clamped.
pub fn from_lon_lat(coord: Coordinate) -> Point<f64> {
    let lat = coord.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = EARTH_RADIUS * coord.lon.to_radians();
    let y = EARTH_RADIUS * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln();
    Point::new(x, y)
}

/// Unproject EPSG:3857 meters back to lon/lat degrees
pub fn to_lon_lat(point: Point<f64>) -> Coordinate {
    let lon = (point.x() / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (point.y() / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    Coordinate::new(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        let p = from_lon_lat(Coordinate::new(0.0, 0.0));
        assert!(p.x().abs() < 1e-9);
        assert!(p.y().abs() < 1e-9);
    }

    #[test]
    fn test_known_point() {
        // Default map center
        let p = from_lon_lat(Coordinate::new(78.9, 22.5));
        assert!((p.x() - 8_783_107.8).abs() < 1.0);
        assert!((p.y() - 2_571_663.0).abs() < 1.0);
    }

    #[test]
    fn test_world_edge() {
        let p = from_lon_lat(Coordinate::new(180.0, MAX_LATITUDE));
        assert!((p.x() - HALF_WORLD).abs() < 1e-6);
        assert!((p.y() - HALF_WORLD).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        let original = Coordinate::new(79.97, 19.97);
        let back = to_lon_lat(from_lon_lat(original));
        assert!((back.lon - original.lon).abs() < 1e-9);
        assert!((back.lat - original.lat).abs() < 1e-9);
    }

    #[test]
    fn test_polar_latitudes_are_clamped() {
        let p = from_lon_lat(Coordinate::new(0.0, 90.0));
        assert!(p.y().is_finite());
        assert_eq!(p, from_lon_lat(Coordinate::new(0.0, MAX_LATITUDE)));
    }
}
