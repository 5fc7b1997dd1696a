//! Merged station registry
//!
//! The registry owns the combined output of both format adapters, US records
//! first and Canadian records after, with no cross-jurisdiction deduplication.
//! It also keeps the per-adapter parse statistics for reporting.

use crate::app::models::{Jurisdiction, StationRecord};
use crate::app::services::canadian_registry::CanadianRegistryParser;
use crate::app::services::parse_stats::{ParseResult, ParseStats};
use crate::app::services::us_registry::UsRegistryParser;

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::{LoadStats, RegistryMetadata};
pub use query::{GeographicBounds, RegistryStatistics};

/// Merged broadcast station registry
#[derive(Debug, Clone)]
pub struct StationRegistry {
    /// Merged records, US first, each adapter's output order preserved
    pub(crate) stations: Vec<StationRecord>,

    /// Statistics from the US adapter
    pub(crate) us_stats: ParseStats,

    /// Statistics from the Canadian adapter
    pub(crate) canada_stats: ParseStats,
}

impl StationRegistry {
    /// Create a new empty station registry
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
            us_stats: ParseStats::new(Jurisdiction::Us),
            canada_stats: ParseStats::new(Jurisdiction::Canada),
        }
    }

    /// Merge the two adapter results into one registry
    ///
    /// A call sign present in both sets yields two records.
    pub fn merge(us: ParseResult, canada: ParseResult) -> Self {
        let mut stations = us.records;
        stations.extend(canada.records);

        Self {
            stations,
            us_stats: us.stats,
            canada_stats: canada.stats,
        }
    }

    /// Parse both exports from memory and merge them
    pub fn from_text(us_text: &str, canada_text: &str, canadian: &CanadianRegistryParser) -> Self {
        let us = UsRegistryParser::new().parse(us_text);
        let canada = canadian.parse(canada_text);
        Self::merge(us, canada)
    }

    /// All records in merged order
    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationRecord> {
        self.stations.iter()
    }

    /// Get the total number of stations in the registry
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn us_stats(&self) -> &ParseStats {
        &self.us_stats
    }

    pub fn canada_stats(&self) -> &ParseStats {
        &self.canada_stats
    }

    /// Get registry metadata
    pub fn metadata(&self) -> RegistryMetadata {
        RegistryMetadata {
            station_count: self.stations.len(),
            us_stats: self.us_stats.clone(),
            canada_stats: self.canada_stats.clone(),
        }
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
