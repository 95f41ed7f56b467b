//! Config command implementation

use crate::cli::Cli;
use crate::config::{config_path, load_config, DEFAULT_CONFIG_FILE};
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;
use radisense_core::config::ConfigSource;
use std::collections::HashMap;
use tabled::Tabled;

pub fn execute(cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli, None)?;
    let file = config_path(cli.config.as_deref()).map(|p| p.display().to_string());
    let inspection_map = config.to_inspection_map();

    if output.is_json() {
        let entry = |key: &str| config_entry(&inspection_map, key);
        output.result(ConfigOutput {
            config_file: file,
            api_url: entry("api_url"),
            aoi_margin: entry("aoi_margin"),
            start_date: entry("start_date"),
            end_date: entry("end_date"),
            basemap_url: entry("basemap_url"),
            satellite: entry("satellite"),
        })?;
        return Ok(());
    }

    output.section("Configuration Values");

    #[derive(Tabled)]
    struct ConfigRow {
        #[tabled(rename = "Key")]
        key: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    let mut rows: Vec<ConfigRow> = inspection_map
        .into_iter()
        .map(|(key, (value, source))| ConfigRow { key, value, source: format!("{:?}", source) })
        .collect();

    // Sort by key for consistent output
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    output.table(rows);

    match file {
        Some(path) => output.kv("Config file", path),
        None => output.info(format!("No config file (looked for ./{})", DEFAULT_CONFIG_FILE)),
    }

    output.section("Configuration Precedence");
    output.info("CLI arguments > Environment variables > Config file > Defaults");

    Ok(())
}

fn config_entry(map: &HashMap<String, (String, ConfigSource)>, key: &str) -> ConfigEntry {
    let (value, source) = map.get(key).cloned().unwrap_or((String::new(), ConfigSource::Default));
    ConfigEntry { value, source: format!("{:?}", source) }
}
