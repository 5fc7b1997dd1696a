//! Parse command: load both exports and report the merged registry

use super::report::{ReportRow, StationReport};
use super::shared::{configure_colors, load_configuration, load_registry, write_output};
use crate::Result;
use crate::cli::args::{Args, ParseArgs};
use serde_json::json;
use tracing::info;

/// Parse command runner
///
/// Returns the number of stations in the merged registry.
pub async fn run_parse(args: &Args, parse_args: ParseArgs) -> Result<usize> {
    parse_args.output.validate()?;
    let config = load_configuration(args, &parse_args.input, &parse_args.output)?;

    let (registry, load_stats) = load_registry(&config).await?;
    info!("{}", registry.metadata().summary());

    let report = StationReport {
        title: "Broadcast Station Registry".to_string(),
        rows: registry.iter().map(ReportRow::new).collect(),
        registry: &registry,
        load_stats: &load_stats,
        query: json!({ "command": "parse" }),
    };

    let output_file = parse_args.output.output_file.as_deref();
    configure_colors(output_file);
    write_output(
        output_file,
        &report.render(config.output_format, parse_args.detailed)?,
    )?;

    Ok(registry.station_count())
}
