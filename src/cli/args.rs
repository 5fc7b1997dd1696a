//! Command-line argument definitions for the broadcast registry tool
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::services::canadian_registry::CanadianSchema;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI arguments for the broadcast registry tool
///
/// Parses the US fixed-width AM listing and the Canadian CSV export into one
/// normalized station set, then reports on it or searches it.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "broadcast-registry",
    version,
    about = "Normalize US and Canadian broadcast registry exports into one station list",
    long_about = "Parses the US fixed-width AM query dump and the Canadian broadcast CSV export, \
                  deduplicates transmitters, and reports, searches or ranks the merged stations \
                  by great-circle distance."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// JSON configuration file. If not specified, looks for
    /// <config dir>/broadcast-registry/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse both exports and report the merged registry
    Parse(ParseArgs),
    /// Search stations by call sign or frequency; matches are always listed in full
    Search(SearchArgs),
    /// Rank stations by distance from a point; the ranking is always listed in full
    Nearest(NearestArgs),
    /// Great-circle distance in miles between two points
    Distance(DistanceArgs),
}

/// Registry input selection shared by the loading commands
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct InputArgs {
    /// US fixed-width AM query export
    #[arg(long = "us-file", value_name = "FILE", help = "US fixed-width registry export")]
    pub us_file: Option<PathBuf>,

    /// Canadian CSV export
    #[arg(long = "canada-file", value_name = "FILE", help = "Canadian CSV registry export")]
    pub canada_file: Option<PathBuf>,

    /// Force the Canadian schema instead of sniffing the header row
    #[arg(
        long = "canadian-schema",
        value_name = "SCHEMA",
        help = "Force the Canadian export schema (current or legacy)"
    )]
    pub canadian_schema: Option<CanadianSchema>,
}

/// Report destination shared by all commands
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct OutputArgs {
    /// Output format for results
    #[arg(long = "format", value_enum, help = "Output format for results")]
    pub format: Option<OutputFormat>,

    /// Output file for the report
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the report"
    )]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Include the full station listing in human reports
    #[arg(long = "detailed", help = "Include detailed station listing in report")]
    pub detailed: bool,
}

/// Arguments for the search command
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Call sign (case-insensitive) or frequency in kHz
    #[arg(value_name = "QUERY")]
    pub query: String,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the nearest command
#[derive(Debug, Clone, Parser)]
pub struct NearestArgs {
    /// Latitude in decimal degrees
    #[arg(long = "lat", allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees, negative west of Greenwich
    #[arg(long = "lon", allow_negative_numbers = true)]
    pub lon: f64,

    /// Maximum number of stations to list
    #[arg(short = 'n', long = "limit", value_name = "COUNT")]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the distance command
#[derive(Debug, Clone, Parser)]
pub struct DistanceArgs {
    #[arg(value_name = "LAT1", allow_negative_numbers = true)]
    pub lat1: f64,

    #[arg(value_name = "LON1", allow_negative_numbers = true)]
    pub lon1: f64,

    #[arg(value_name = "LAT2", allow_negative_numbers = true)]
    pub lat2: f64,

    #[arg(value_name = "LON2", allow_negative_numbers = true)]
    pub lon2: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl OutputArgs {
    /// Validate that the output file's directory exists
    pub fn validate(&self) -> Result<()> {
        if let Some(parent) = self.output_file.as_ref().and_then(|path| path.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output file directory does not exist: {}",
                    parent.display()
                )));
            }
        }
        Ok(())
    }
}

impl NearestArgs {
    /// Validate the query point
    pub fn validate(&self) -> Result<()> {
        validate_point(self.lat, self.lon)?;
        self.output.validate()
    }
}

impl DistanceArgs {
    /// Validate both points
    pub fn validate(&self) -> Result<()> {
        validate_point(self.lat1, self.lon1)?;
        validate_point(self.lat2, self.lon2)?;
        self.output.validate()
    }
}

fn validate_point(lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(Error::configuration(format!(
            "Invalid latitude {}: must be between -90 and 90",
            lat
        )));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(Error::configuration(format!(
            "Invalid longitude {}: must be between -180 and 180",
            lon
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_listing_commands_describe_full_output() {
        let command = Args::command();
        for name in ["search", "nearest"] {
            let about = command
                .find_subcommand(name)
                .and_then(|sub| sub.get_about())
                .map(|about| about.to_string())
                .unwrap_or_default();
            assert!(about.contains("always listed in full"), "{}: {}", name, about);
        }
        let search = command.find_subcommand("search").unwrap();
        assert!(search.get_arguments().all(|arg| arg.get_id() != "detailed"));
    }

    #[test]
    fn test_parse_command_flags() {
        let args = Args::try_parse_from([
            "broadcast-registry",
            "parse",
            "--us-file",
            "am.txt",
            "--canada-file",
            "canada.csv",
            "--canadian-schema",
            "legacy",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.verbose, 2);
        match args.command {
            Some(Commands::Parse(parse)) => {
                assert_eq!(parse.input.us_file, Some(PathBuf::from("am.txt")));
                assert_eq!(parse.input.canada_file, Some(PathBuf::from("canada.csv")));
                assert_eq!(parse.input.canadian_schema, Some(CanadianSchema::Legacy));
                assert_eq!(parse.output.format, Some(OutputFormat::Json));
                assert!(!parse.detailed);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_nearest_accepts_negative_longitude() {
        let args = Args::try_parse_from([
            "broadcast-registry",
            "nearest",
            "--lat",
            "40.75",
            "--lon",
            "-73.99",
            "--limit",
            "5",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Nearest(nearest)) => {
                assert_eq!(nearest.lat, 40.75);
                assert_eq!(nearest.lon, -73.99);
                assert_eq!(nearest.limit, Some(5));
                assert!(nearest.validate().is_ok());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_distance_positional_points() {
        let args = Args::try_parse_from([
            "broadcast-registry",
            "distance",
            "40.7128",
            "-74.0060",
            "34.0522",
            "-118.2437",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Distance(distance)) => {
                assert_eq!(distance.lon2, -118.2437);
                assert!(distance.validate().is_ok());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let result = Args::try_parse_from([
            "broadcast-registry",
            "parse",
            "--canadian-schema",
            "v3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_point_validation() {
        assert!(validate_point(91.0, 0.0).is_err());
        assert!(validate_point(0.0, -181.0).is_err());
        assert!(validate_point(f64::NAN, 0.0).is_err());
        assert!(validate_point(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = Args::try_parse_from(["broadcast-registry"]).unwrap();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
