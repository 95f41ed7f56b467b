//! AOI command implementation

use crate::cli::{AoiArgs, Cli};
use crate::config::load_config;
use crate::output::OutputWriter;
use crate::output_types::AoiOutput;
use anyhow::Result;
use radisense_core::generate_aoi_with_margin;
use tabled::Tabled;

pub fn execute(cli: &Cli, args: &AoiArgs, output: &OutputWriter) -> Result<()> {
    let margin = match args.margin {
        Some(margin) => margin,
        None => load_config(cli, None)?.aoi_margin.value,
    };

    let aoi = generate_aoi_with_margin(args.lat, args.lon, margin)?;

    if output.is_json() {
        output.result(AoiOutput {
            center: [args.lon, args.lat],
            margin,
            bounds: aoi.bounds(),
            area: aoi.area(),
            aoi,
        })?;
        return Ok(());
    }

    output.section("Area of Interest");
    output.kv("Center", format!("{}, {} (lat, lon)", args.lat, args.lon));
    output.kv("Margin", format!("{}°", margin));

    #[derive(Tabled)]
    struct VertexRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Longitude")]
        lon: String,
        #[tabled(rename = "Latitude")]
        lat: String,
    }

    let rows: Vec<VertexRow> = aoi
        .ring()
        .iter()
        .enumerate()
        .map(|(index, c)| VertexRow {
            index,
            lon: format!("{:.6}", c.lon),
            lat: format!("{:.6}", c.lat),
        })
        .collect();
    output.table(rows);

    output.section("GeoJSON");
    println!("{}", serde_json::to_string(&aoi.to_geojson())?);

    Ok(())
}
