//! Distance command: great-circle distance between two points

use super::shared::{configure_colors, load_configuration, write_output};
use crate::app::services::geodesy::distance;
use crate::cli::args::{Args, DistanceArgs, InputArgs, OutputFormat};
use crate::{Error, Result};
use colored::*;
use serde_json::json;

/// Distance command runner
///
/// Returns 1, the number of distances reported.
pub async fn run_distance(args: &Args, distance_args: DistanceArgs) -> Result<usize> {
    distance_args.validate()?;
    let config = load_configuration(args, &InputArgs::default(), &distance_args.output)?;

    let miles = distance(
        distance_args.lat1,
        distance_args.lon1,
        distance_args.lat2,
        distance_args.lon2,
    );

    let output_file = distance_args.output.output_file.as_deref();
    configure_colors(output_file);
    write_output(output_file, &render_distance(&distance_args, miles, config.output_format)?)?;

    Ok(1)
}

/// Render one distance result in the requested format
pub fn render_distance(points: &DistanceArgs, miles: f64, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format!(
            "({:.4}, {:.4}) -> ({:.4}, {:.4}): {} miles",
            points.lat1,
            points.lon1,
            points.lat2,
            points.lon2,
            format!("{:.1}", miles).bright_white().bold()
        )),
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "from": { "lat": points.lat1, "lon": points.lon1 },
            "to": { "lat": points.lat2, "lon": points.lon2 },
            "distance_miles": miles,
            "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
        }))
        .map_err(|e| Error::serialization("Failed to serialize distance", e)),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["lat1", "lon1", "lat2", "lon2", "distance_miles"])?;
            writer.write_record([
                points.lat1.to_string(),
                points.lon1.to_string(),
                points.lat2.to_string(),
                points.lon2.to_string(),
                format!("{:.3}", miles),
            ])?;
            let bytes = writer
                .into_inner()
                .map_err(|e| Error::io("Failed to flush CSV output", e.into_error()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
