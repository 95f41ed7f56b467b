//! XYZ basemap tile addressing
//!
//! Templates use the usual placeholders: `{z}`, `{x}`, `{y}`, an optional
//! `{r}` resolution suffix, and an optional single-letter subdomain range such
//! as `{a-c}`.

use crate::projection::MAX_LATITUDE;
use radisense_core::config::DEFAULT_BASEMAP_URL;
use radisense_core::error::{RadisenseError, Result};
use serde::Serialize;
use std::f64::consts::PI;

/// Highest zoom level addressed
pub const MAX_ZOOM: u8 = 22;

/// One XYZ tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    /// The tile containing a lon/lat point at zoom `z`
    ///
    /// Zoom is capped at [`MAX_ZOOM`]; latitude is clamped to the Mercator
    /// range and longitude wraps.
    pub fn containing(lon: f64, lat: f64, z: u8) -> Self {
        let z = z.min(MAX_ZOOM);
        let n = f64::from(1u32 << z);
        let max_index = (1u32 << z) - 1;

        let lon = (lon + 180.0).rem_euclid(360.0) - 180.0;
        let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

        let x = ((lon + 180.0) / 360.0 * n).floor();
        let y = ((1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * n).floor();

        Self { z, x: clamp_index(x, max_index), y: clamp_index(y, max_index) }
    }
}

fn clamp_index(value: f64, max_index: u32) -> u32 {
    value.clamp(0.0, f64::from(max_index)) as u32
}

/// Raster basemap source built from a URL template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileSource {
    template: String,
    subdomains: Vec<char>,
    /// Request `@2x` tiles where the template has `{r}`
    pub retina: bool,
}

impl TileSource {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();

        for placeholder in ["{z}", "{x}", "{y}"] {
            if !template.contains(placeholder) {
                return Err(RadisenseError::ConfigInvalid {
                    key: "basemap_url".to_string(),
                    reason: format!("Tile template '{}' is missing {}", template, placeholder),
                });
            }
        }

        let subdomains = match subdomain_range(&template) {
            Some((_, first, last)) if first <= last => (first..=last).collect(),
            Some((range, _, _)) => {
                return Err(RadisenseError::ConfigInvalid {
                    key: "basemap_url".to_string(),
                    reason: format!("Empty subdomain range {}", range),
                });
            }
            None => Vec::new(),
        };

        Ok(Self { template, subdomains, retina: false })
    }

    /// Dark Carto basemap
    pub fn carto_dark() -> Self {
        Self {
            template: DEFAULT_BASEMAP_URL.to_string(),
            subdomains: vec!['a', 'b', 'c'],
            retina: false,
        }
    }

    pub fn with_retina(mut self, retina: bool) -> Self {
        self.retina = retina;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn subdomains(&self) -> &[char] {
        &self.subdomains
    }

    /// Concrete URL of one tile
    pub fn url(&self, tile: TileCoord) -> String {
        let mut url = self
            .template
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
            .replace("{r}", if self.retina { "@2x" } else { "" });

        if let Some((range, _, _)) = subdomain_range(&self.template) {
            let index = (tile.x as usize + tile.y as usize) % self.subdomains.len();
            url = url.replace(range, &self.subdomains[index].to_string());
        }

        url
    }
}

impl Default for TileSource {
    fn default() -> Self {
        Self::carto_dark()
    }
}

/// Find a `{a-c}` style placeholder: the placeholder text and its bounds
fn subdomain_range(template: &str) -> Option<(&str, char, char)> {
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let candidate = &rest[open..];
        let close = candidate.find('}')?;
        let placeholder = &candidate[..=close];
        let inner: Vec<char> = placeholder[1..close].chars().collect();
        if let &[first, '-', last] = inner.as_slice() {
            return Some((placeholder, first, last));
        }
        rest = &candidate[close + 1..];
    }
    None
}
