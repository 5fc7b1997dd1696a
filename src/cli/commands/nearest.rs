//! Nearest command: rank stations by distance from a point

use super::report::{ReportRow, StationReport};
use super::shared::{configure_colors, load_configuration, load_registry, write_output};
use crate::Result;
use crate::cli::args::{Args, NearestArgs};
use serde_json::json;
use tracing::info;

/// Nearest command runner
///
/// Returns the number of stations listed.
pub async fn run_nearest(args: &Args, nearest_args: NearestArgs) -> Result<usize> {
    nearest_args.validate()?;

    let mut config = load_configuration(args, &nearest_args.input, &nearest_args.output)?;
    if let Some(limit) = nearest_args.limit {
        config = config.with_nearest_limit(limit);
        config.validate()?;
    }

    let (registry, load_stats) = load_registry(&config).await?;
    let ranked = registry.nearest(nearest_args.lat, nearest_args.lon, config.nearest_limit);
    info!(
        "Ranked {} stations around ({}, {})",
        ranked.len(),
        nearest_args.lat,
        nearest_args.lon
    );

    let report = StationReport {
        title: format!(
            "Stations nearest to ({:.4}, {:.4})",
            nearest_args.lat, nearest_args.lon
        ),
        rows: ranked
            .iter()
            .map(|&(station, miles)| ReportRow::with_distance(station, miles))
            .collect(),
        registry: &registry,
        load_stats: &load_stats,
        query: json!({
            "command": "nearest",
            "lat": nearest_args.lat,
            "lon": nearest_args.lon,
            "limit": config.nearest_limit
        }),
    };

    let output_file = nearest_args.output.output_file.as_deref();
    configure_colors(output_file);
    write_output(output_file, &report.render(config.output_format, true)?)?;

    Ok(ranked.len())
}
