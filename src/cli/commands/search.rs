//! Search command: call sign or frequency lookup

use super::report::{ReportRow, StationReport};
use super::shared::{configure_colors, load_configuration, load_registry, write_output};
use crate::Result;
use crate::cli::args::{Args, SearchArgs};
use serde_json::json;
use tracing::info;

/// Search command runner
///
/// Returns the number of matching stations.
pub async fn run_search(args: &Args, search_args: SearchArgs) -> Result<usize> {
    search_args.output.validate()?;
    let config = load_configuration(args, &search_args.input, &search_args.output)?;

    let (registry, load_stats) = load_registry(&config).await?;
    let matches = registry.search(&search_args.query);
    info!(
        "Search '{}' matched {} stations",
        search_args.query,
        matches.len()
    );

    let report = StationReport {
        title: format!("Stations matching '{}'", search_args.query.trim()),
        rows: matches.iter().copied().map(ReportRow::new).collect(),
        registry: &registry,
        load_stats: &load_stats,
        query: json!({ "command": "search", "query": search_args.query }),
    };

    let output_file = search_args.output.output_file.as_deref();
    configure_colors(output_file);
    write_output(output_file, &report.render(config.output_format, true)?)?;

    Ok(matches.len())
}
