//! Shared components for CLI commands
//!
//! Logging setup, layered configuration and registry loading used by every
//! command.

use crate::app::services::station_registry::{LoadStats, StationRegistry};
use crate::cli::args::{Args, InputArgs, OutputArgs};
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging to stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let initialized = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    initialized
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &Args, input: &InputArgs, output: &OutputArgs) -> Result<Config> {
    if let Some(path) = &args.config_file {
        info!("Using config file: {}", path.display());
    }

    let mut config = Config::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, input, output);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, input: &InputArgs, output: &OutputArgs) {
    if let Some(path) = &input.us_file {
        config.us_path = Some(path.clone());
    }
    if let Some(path) = &input.canada_file {
        config.canada_path = Some(path.clone());
    }
    if let Some(schema) = input.canadian_schema {
        config.canadian_schema = Some(schema);
    }
    if let Some(format) = output.format {
        config.output_format = format;
    }
}

/// Load and merge the configured registry exports
pub async fn load_registry(config: &Config) -> Result<(StationRegistry, LoadStats)> {
    config.require_inputs()?;

    if let Some(path) = &config.us_path {
        info!("US export: {}", path.display());
    }
    if let Some(path) = &config.canada_path {
        info!("Canadian export: {}", path.display());
    }

    StationRegistry::load(
        config.us_path.as_deref(),
        config.canada_path.as_deref(),
        &config.canadian_parser(),
    )
    .await
}

/// Write a rendered report to a file, or stdout when no file is given
pub fn write_output(output_file: Option<&Path>, content: &str) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                Error::io(format!("Failed to write report to {}", path.display()), e)
            })?;
            info!("Report written to: {}", path.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

/// Disable ANSI colors when the report goes to a file
pub fn configure_colors(output_file: Option<&Path>) {
    if output_file.is_some() {
        colored::control::set_override(false);
    }
}
