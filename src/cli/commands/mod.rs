//! Command implementations for the broadcast registry CLI
//!
//! Each command is implemented in its own module and shares loading,
//! configuration and rendering through [`shared`] and [`report`].

pub mod distance;
pub mod nearest;
pub mod parse;
pub mod report;
pub mod search;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the subcommand handler and returns the number of stations
/// (or distances) it reported:
/// - `parse`: merged registry report
/// - `search`: call sign or frequency matches
/// - `nearest`: stations ranked by distance
/// - `distance`: a single great-circle distance
pub async fn run(args: Args, command: Commands) -> Result<usize> {
    shared::setup_logging(&args)?;

    match command {
        Commands::Parse(parse_args) => parse::run_parse(&args, parse_args).await,
        Commands::Search(search_args) => search::run_search(&args, search_args).await,
        Commands::Nearest(nearest_args) => nearest::run_nearest(&args, nearest_args).await,
        Commands::Distance(distance_args) => distance::run_distance(&args, distance_args).await,
    }
}
