use anyhow::Context;
use broadcast_registry::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let mut args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command.take() else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result: anyhow::Result<usize> = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args, command) => {
                result.context("Command failed")
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for CTRL+C")?;
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(anyhow::anyhow!("Interrupted by user"))
            }
        }
    });

    match result {
        Ok(_count) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Broadcast Registry - US and Canadian AM/FM station normalizer");
    println!("=============================================================");
    println!();
    println!("Parse the US fixed-width AM query dump and the Canadian broadcast CSV");
    println!("export into one deduplicated station list, then search or rank it.");
    println!();
    println!("USAGE:");
    println!("    broadcast-registry <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse both exports and report the merged registry (--detailed lists every station)");
    println!("    search      Search stations by call sign or frequency (always lists matches)");
    println!("    nearest     Rank stations by distance from a point (always lists the ranking)");
    println!("    distance    Great-circle distance in miles between two points");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    broadcast-registry parse --us-file am_query.txt --canada-file canada.csv --detailed");
    println!("    broadcast-registry search wabc --us-file am_query.txt");
    println!("    broadcast-registry nearest --lat 40.75 --lon -73.99 --limit 5 --us-file am_query.txt");
    println!("    broadcast-registry distance 40.7128 -74.0060 34.0522 -118.2437 --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    broadcast-registry <COMMAND> --help");
}
