//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use radisense_core::config::{
    parse_date, CliConfigOverrides, ConfigSource, LayeredConfig, API_URL_ENV,
};
use radisense_core::models::Satellite;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_default_configuration() {
    let config = LayeredConfig::with_defaults();

    assert_eq!(config.api_url.value, "http://127.0.0.1:8000");
    assert_eq!(config.api_url.source, ConfigSource::Default);
    assert_eq!(config.aoi_margin.value, 0.03);
    assert!(config.basemap_url.value.contains("dark_all/{z}/{x}/{y}"));
    assert_eq!(config.satellite.value, None);
}

#[test]
fn test_partial_file_configuration() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
aoi_margin = 0.05
# Only override the margin, leave others as defaults
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.aoi_margin.value, 0.05);
    assert_eq!(config.aoi_margin.source, ConfigSource::File);
    assert_eq!(config.api_url.source, ConfigSource::Default);
    assert_eq!(config.start_date.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    env::remove_var(API_URL_ENV);
    env::set_var(API_URL_ENV, "http://env-host:8000/");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"api_url = "http://file-host:8000""#).unwrap();

    let config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.api_url.value, "http://env-host:8000");
    assert_eq!(config.api_url.source, ConfigSource::Environment);

    env::remove_var(API_URL_ENV);
}

#[test]
#[serial]
fn test_invalid_environment_value_is_ignored() {
    env::set_var(API_URL_ENV, "not a url");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.api_url.value, "http://127.0.0.1:8000");
    assert_eq!(config.api_url.source, ConfigSource::Default);

    env::remove_var(API_URL_ENV);
}

#[test]
#[serial]
fn test_configuration_precedence_order() {
    env::remove_var(API_URL_ENV);
    env::set_var(API_URL_ENV, "http://env-host:8000");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"api_url = "http://file-host:8000""#).unwrap();

    let mut config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.api_url.source, ConfigSource::Environment);

    config.update_from_cli(CliConfigOverrides {
        api_url: Some("http://cli-host:8000".to_string()),
        ..Default::default()
    });

    assert_eq!(config.api_url.value, "http://cli-host:8000");
    assert_eq!(config.api_url.source, ConfigSource::Cli);

    assert!(ConfigSource::Cli.precedence() > ConfigSource::Environment.precedence());
    assert!(ConfigSource::Environment.precedence() > ConfigSource::File.precedence());
    assert!(ConfigSource::File.precedence() > ConfigSource::Default.precedence());

    env::remove_var(API_URL_ENV);
}

#[test]
fn test_configuration_source_tracking() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "aoi_margin = 0.1\nsatellite = \"sentinel_2\"").unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();
    let inspection_map = config.to_inspection_map();

    let (margin, margin_source) = &inspection_map["aoi_margin"];
    assert_eq!(margin, "0.1°");
    assert_eq!(*margin_source, ConfigSource::File);

    let (satellite, satellite_source) = &inspection_map["satellite"];
    assert_eq!(satellite, "sentinel_2");
    assert_eq!(*satellite_source, ConfigSource::File);

    let (_, api_source) = &inspection_map["api_url"];
    assert_eq!(*api_source, ConfigSource::Default);
}

#[test]
fn test_invalid_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "invalid toml content [[[").unwrap();

    let result = LayeredConfig::with_defaults().load_from_file(file.path());

    assert!(result.is_err());
}

#[test]
fn test_unknown_satellite_in_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"satellite = "modis""#).unwrap();

    assert!(LayeredConfig::with_defaults().load_from_file(file.path()).is_err());
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let non_existent = temp_dir.path().join("does_not_exist.toml");

    let result = LayeredConfig::with_defaults().load_from_file(&non_existent);

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_full_configuration_workflow() {
    env::remove_var(API_URL_ENV);

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("radisense.toml");
    fs::write(
        &config_path,
        r#"
api_url = "http://file-host:8000"
aoi_margin = 0.02
start_date = "2022-01-01"
end_date = "2022-12-31"
satellite = "landsat_9"
"#,
    )
    .unwrap();

    env::set_var(API_URL_ENV, "http://env-host:8000");

    let mut config =
        LayeredConfig::with_defaults().load_from_file(&config_path).unwrap().load_from_env();

    assert_eq!(config.api_url.value, "http://env-host:8000");
    assert_eq!(config.aoi_margin.value, 0.02);
    assert_eq!(config.satellite.value, Some(Satellite::Landsat9));

    config.update_from_cli(CliConfigOverrides {
        start_date: Some(parse_date("2021-01-01").unwrap()),
        satellite: Some(Satellite::Sentinel2),
        ..Default::default()
    });

    assert_eq!(config.start_date.value.to_string(), "2021-01-01");
    assert_eq!(config.start_date.source, ConfigSource::Cli);
    assert_eq!(config.end_date.source, ConfigSource::File);
    assert_eq!(config.satellite.value, Some(Satellite::Sentinel2));
    assert!(config.validate().is_ok());

    let range = config.date_range().unwrap();
    assert_eq!(range.end.to_string(), "2022-12-31");

    env::remove_var(API_URL_ENV);
}
