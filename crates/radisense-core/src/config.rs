use crate::aoi::{validate_margin, DEFAULT_MARGIN_DEGREES};
use crate::error::{RadisenseError, Result};
use crate::models::{DateRange, Satellite};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default analysis service base URL
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default basemap: Carto dark raster tiles
pub const DEFAULT_BASEMAP_URL: &str =
    "https://{a-c}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";

/// Environment variable overriding the analysis service base URL
pub const API_URL_ENV: &str = "RADISENSE_API_URL";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for RadiSense
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub api_url: ConfigValue<String>,
    pub aoi_margin: ConfigValue<f64>,
    pub start_date: ConfigValue<NaiveDate>,
    pub end_date: ConfigValue<NaiveDate>,
    pub basemap_url: ConfigValue<String>,
    pub satellite: ConfigValue<Option<Satellite>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        let window = DateRange::default_window();
        Self {
            api_url: ConfigValue::new(DEFAULT_API_URL.to_string(), ConfigSource::Default),
            aoi_margin: ConfigValue::new(DEFAULT_MARGIN_DEGREES, ConfigSource::Default),
            start_date: ConfigValue::new(window.start, ConfigSource::Default),
            end_date: ConfigValue::new(window.end, ConfigSource::Default),
            basemap_url: ConfigValue::new(DEFAULT_BASEMAP_URL.to_string(), ConfigSource::Default),
            satellite: ConfigValue::new(None, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| RadisenseError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| RadisenseError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(api_url) = file_config.api_url {
            self.api_url.update(api_url, ConfigSource::File);
        }

        if let Some(aoi_margin) = file_config.aoi_margin {
            self.aoi_margin.update(aoi_margin, ConfigSource::File);
        }

        if let Some(start_date) = file_config.start_date {
            self.start_date.update(start_date, ConfigSource::File);
        }

        if let Some(end_date) = file_config.end_date {
            self.end_date.update(end_date, ConfigSource::File);
        }

        if let Some(basemap_url) = file_config.basemap_url {
            self.basemap_url.update(basemap_url, ConfigSource::File);
        }

        if let Some(satellite) = file_config.satellite {
            self.satellite.update(Some(satellite), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    ///
    /// Only the service endpoint is environment-driven.
    pub fn load_from_env(mut self) -> Self {
        if let Ok(api_url) = env::var(API_URL_ENV) {
            match parse_api_url(&api_url) {
                Ok(url) => self.api_url.update(url, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid {} value '{}': expected an http:// or https:// URL",
                    API_URL_ENV,
                    api_url
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(api_url) = overrides.api_url {
            self.api_url.update(api_url, ConfigSource::Cli);
        }

        if let Some(aoi_margin) = overrides.aoi_margin {
            self.aoi_margin.update(aoi_margin, ConfigSource::Cli);
        }

        if let Some(start_date) = overrides.start_date {
            self.start_date.update(start_date, ConfigSource::Cli);
        }

        if let Some(end_date) = overrides.end_date {
            self.end_date.update(end_date, ConfigSource::Cli);
        }

        if let Some(satellite) = overrides.satellite {
            self.satellite.update(Some(satellite), ConfigSource::Cli);
        }
    }

    /// Check the resolved values
    pub fn validate(&self) -> Result<()> {
        parse_api_url(&self.api_url.value)?;
        validate_margin(self.aoi_margin.value).map_err(|e| RadisenseError::ConfigInvalid {
            key: "aoi_margin".to_string(),
            reason: e.to_string(),
        })?;
        self.date_range().map_err(|e| RadisenseError::ConfigInvalid {
            key: "start_date".to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Default date window for the control surface
    pub fn date_range(&self) -> Result<DateRange> {
        DateRange::new(self.start_date.value, self.end_date.value)
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("api_url".to_string(), (self.api_url.value.clone(), self.api_url.source));

        map.insert(
            "aoi_margin".to_string(),
            (format!("{}°", self.aoi_margin.value), self.aoi_margin.source),
        );

        map.insert(
            "start_date".to_string(),
            (self.start_date.value.to_string(), self.start_date.source),
        );

        map.insert("end_date".to_string(), (self.end_date.value.to_string(), self.end_date.source));

        map.insert(
            "basemap_url".to_string(),
            (self.basemap_url.value.clone(), self.basemap_url.source),
        );

        map.insert(
            "satellite".to_string(),
            (
                self.satellite
                    .value
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "service default".to_string()),
                self.satellite.source,
            ),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    api_url: Option<String>,
    aoi_margin: Option<f64>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    basemap_url: Option<String>,
    satellite: Option<Satellite>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub api_url: Option<String>,
    pub aoi_margin: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub satellite: Option<Satellite>,
}

/// Parse and normalize a service base URL (trailing slashes removed)
pub fn parse_api_url(s: &str) -> Result<String> {
    let trimmed = s.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());

    if !has_host {
        return Err(RadisenseError::ConfigInvalid {
            key: "api_url".to_string(),
            reason: format!("Invalid API URL: {}. Expected http://host[:port]", s),
        });
    }

    Ok(trimmed.to_string())
}

/// Parse an ISO calendar date (`YYYY-MM-DD`)
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| RadisenseError::ConfigInvalid {
        key: "date".to_string(),
        reason: format!("Invalid date '{}': {}. Use YYYY-MM-DD", s, e),
    })
}
