//! Geometry types for the area of interest.
//!
//! The AOI is always a single closed ring. It serializes as a GeoJSON
//! `Polygon` geometry and converts to `geo` and `geojson` types for
//! computation and export.

use crate::error::{RadisenseError, Result};
use geo::{Area, BoundingRect, Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees, serialized as a GeoJSON `[lon, lat]` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lon, c.lat]
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(c: Coordinate) -> Self {
        Coord { x: c.lon, y: c.lat }
    }
}

/// Axis-aligned bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }
}

/// Area of interest: a single-ring closed polygon
///
/// Rings built by [`crate::aoi::generate_aoi`] are trusted as-is. Rings
/// coming from outside (deserialization, [`Aoi::from_ring`]) are validated
/// for closure, vertex count and non-zero area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonGeometry", into = "PolygonGeometry")]
pub struct Aoi {
    ring: Vec<Coordinate>,
}

impl Aoi {
    /// Minimum number of positions in a closed ring
    pub const MIN_RING_LEN: usize = 4;

    pub(crate) fn from_ring_unchecked(ring: Vec<Coordinate>) -> Self {
        Self { ring }
    }

    /// Build an AOI from an explicit ring, validating it
    pub fn from_ring(ring: Vec<Coordinate>) -> Result<Self> {
        if ring.len() < Self::MIN_RING_LEN {
            return Err(RadisenseError::InvalidGeometry {
                reason: format!(
                    "ring has {} positions, at least {} required",
                    ring.len(),
                    Self::MIN_RING_LEN
                ),
            });
        }

        if ring.iter().any(|c| !c.is_finite()) {
            return Err(RadisenseError::InvalidGeometry {
                reason: "ring contains non-finite coordinates".to_string(),
            });
        }

        if ring.first() != ring.last() {
            return Err(RadisenseError::InvalidGeometry {
                reason: "ring is not closed (first position differs from last)".to_string(),
            });
        }

        let aoi = Self { ring };
        if aoi.area() <= 0.0 {
            return Err(RadisenseError::InvalidGeometry {
                reason: "ring encloses zero area".to_string(),
            });
        }

        Ok(aoi)
    }

    /// The closed ring, first position repeated at the end
    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }

    /// First vertex of the ring (the risk buffer anchor)
    pub fn first_vertex(&self) -> Coordinate {
        self.ring[0]
    }

    /// Planar area in square degrees
    pub fn area(&self) -> f64 {
        self.to_polygon().unsigned_area()
    }

    pub fn bounds(&self) -> Bounds {
        match self.to_polygon().bounding_rect() {
            Some(rect) => Bounds {
                min_lon: rect.min().x,
                min_lat: rect.min().y,
                max_lon: rect.max().x,
                max_lat: rect.max().y,
            },
            None => {
                let c = self.first_vertex();
                Bounds { min_lon: c.lon, min_lat: c.lat, max_lon: c.lon, max_lat: c.lat }
            }
        }
    }

    /// Convert to a `geo` polygon for computation
    pub fn to_polygon(&self) -> Polygon<f64> {
        let exterior: LineString<f64> =
            self.ring.iter().map(|c| Coord::from(*c)).collect::<Vec<_>>().into();
        Polygon::new(exterior, vec![])
    }

    /// Convert to a GeoJSON geometry
    pub fn to_geojson(&self) -> geojson::Geometry {
        let ring: Vec<Vec<f64>> = self.ring.iter().map(|c| vec![c.lon, c.lat]).collect();
        geojson::Geometry::new(geojson::Value::Polygon(vec![ring]))
    }
}

/// Wire form of the AOI: `{ "type": "Polygon", "coordinates": [[[lon, lat], ...]] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PolygonGeometry {
    Polygon { coordinates: Vec<Vec<Coordinate>> },
}

impl TryFrom<PolygonGeometry> for Aoi {
    type Error = RadisenseError;

    fn try_from(value: PolygonGeometry) -> Result<Self> {
        let PolygonGeometry::Polygon { coordinates } = value;
        let mut rings = coordinates.into_iter();
        let exterior = rings.next().ok_or_else(|| RadisenseError::InvalidGeometry {
            reason: "polygon has no rings".to_string(),
        })?;
        if rings.next().is_some() {
            return Err(RadisenseError::InvalidGeometry {
                reason: "AOI must be a single-ring polygon".to_string(),
            });
        }
        Aoi::from_ring(exterior)
    }
}

impl From<Aoi> for PolygonGeometry {
    fn from(aoi: Aoi) -> Self {
        PolygonGeometry::Polygon { coordinates: vec![aoi.ring] }
    }
}
