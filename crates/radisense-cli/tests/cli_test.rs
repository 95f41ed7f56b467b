//! Integration tests for the radisense binary
//!
//! These run the built binary in a scratch directory so no local
//! radisense.toml or RADISENSE_API_URL leaks into the results.

use serde_json::Value;
use std::process::{Command, Output};
use tempfile::TempDir;

// Nothing listens on port 1.
const DEAD_URL: &str = "http://127.0.0.1:1";

fn radisense(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_radisense"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RADISENSE_API_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn json_stdout(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

#[test]
fn test_aoi_json_output() {
    let dir = TempDir::new().unwrap();
    let output = radisense(&dir, &["aoi", "--lat", "20", "--lon", "80", "--json"]);

    assert!(output.status.success());
    let parsed = json_stdout(&output);
    assert_eq!(parsed["status"], "success");

    let aoi = &parsed["data"]["aoi"];
    assert_eq!(aoi["type"], "Polygon");

    let ring = aoi["coordinates"][0].as_array().unwrap();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[0], ring[4]);

    let first = ring[0].as_array().unwrap();
    assert!((first[0].as_f64().unwrap() - 79.97).abs() < 1e-9);
    assert!((first[1].as_f64().unwrap() - 19.97).abs() < 1e-9);
}

#[test]
fn test_aoi_accepts_negative_coordinates() {
    let dir = TempDir::new().unwrap();
    let output = radisense(&dir, &["aoi", "--lat", "-33.9", "--lon", "-70.6", "--json"]);

    assert!(output.status.success());
    let parsed = json_stdout(&output);
    assert_eq!(parsed["data"]["center"][0], -70.6);
    assert_eq!(parsed["data"]["center"][1], -33.9);
}

#[test]
fn test_aoi_custom_margin_from_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("radisense.toml"), "aoi_margin = 0.1\n").unwrap();

    let output = radisense(&dir, &["aoi", "--lat", "0", "--lon", "0", "--json"]);

    assert!(output.status.success());
    let parsed = json_stdout(&output);
    assert_eq!(parsed["data"]["margin"], 0.1);
}

#[test]
fn test_config_defaults() {
    let dir = TempDir::new().unwrap();
    let output = radisense(&dir, &["config", "--json"]);

    assert!(output.status.success());
    let parsed = json_stdout(&output);
    let data = &parsed["data"];
    assert_eq!(data["api_url"]["value"], "http://127.0.0.1:8000");
    assert_eq!(data["api_url"]["source"], "Default");
    assert_eq!(data["satellite"]["value"], "service default");
    assert!(data["config_file"].is_null());
}

#[test]
fn test_config_cli_override_wins() {
    let dir = TempDir::new().unwrap();
    let output = radisense(&dir, &["config", "--api-url", "http://analysis.local:9000/", "--json"]);

    assert!(output.status.success());
    let parsed = json_stdout(&output);
    assert_eq!(parsed["data"]["api_url"]["source"], "Cli");
}

#[test]
fn test_config_environment_override() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_radisense"))
        .args(["config", "--json"])
        .current_dir(dir.path())
        .env("RADISENSE_API_URL", "http://env.local:8000")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let parsed = json_stdout(&output);
    assert_eq!(parsed["data"]["api_url"]["value"], "http://env.local:8000");
    assert_eq!(parsed["data"]["api_url"]["source"], "Environment");
}

#[test]
fn test_run_with_empty_latitude_fails() {
    let dir = TempDir::new().unwrap();
    let output = radisense(&dir, &["run", "--lat", "", "--lon", "80", "--api-url", DEAD_URL]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "Nothing should be rendered");
}

#[test]
fn test_run_with_reversed_dates_fails() {
    let dir = TempDir::new().unwrap();
    let output = radisense(
        &dir,
        &[
            "run", "--lat", "20", "--lon", "80", "--start", "2024-03-01", "--end", "2024-01-01",
            "--api-url", DEAD_URL,
        ],
    );

    assert!(!output.status.success());
}

#[test]
fn test_run_against_unreachable_service_fails() {
    let dir = TempDir::new().unwrap();
    let output =
        radisense(&dir, &["run", "--lat", "20", "--lon", "80", "--api-url", DEAD_URL, "--json"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"error\""), "JSON error expected on stderr: {}", stderr);
}

#[test]
fn test_health_against_unreachable_service_fails() {
    let dir = TempDir::new().unwrap();
    let output = radisense(&dir, &["health", "--api-url", DEAD_URL]);

    assert!(!output.status.success());
}

#[test]
fn test_invalid_api_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = radisense(&dir, &["config", "--api-url", "not a url"]);

    assert!(!output.status.success());
}
