//! Station registry metadata and statistics tracking
//!
//! [`LoadStats`] describes one run of the file loader; [`RegistryMetadata`]
//! is a snapshot of what the registry holds.

use crate::app::services::parse_stats::ParseStats;
use std::time::Duration;

/// Statistics about the station registry loading process
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Number of export files read
    pub files_read: usize,

    /// Total bytes read across all export files
    pub bytes_read: usize,

    /// Number of stations in the merged registry
    pub stations_loaded: usize,

    /// Lines or rows rejected by either adapter
    pub records_skipped: usize,

    /// Lines or rows dropped as duplicates by either adapter
    pub duplicates_removed: usize,

    /// Time taken to read and parse the exports
    pub load_duration: Duration,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            files_read: 0,
            bytes_read: 0,
            stations_loaded: 0,
            records_skipped: 0,
            duplicates_removed: 0,
            load_duration: Duration::ZERO,
        }
    }

    /// Fold one adapter's statistics into the totals
    pub fn absorb(&mut self, stats: &ParseStats) {
        self.stations_loaded += stats.stations_parsed;
        self.records_skipped += stats.records_skipped;
        self.duplicates_removed += stats.duplicates_removed;
    }

    /// Skipped lines as a percentage of everything examined
    pub fn skip_rate(&self) -> f64 {
        let examined = self.stations_loaded + self.records_skipped + self.duplicates_removed;
        if examined == 0 {
            0.0
        } else {
            (self.records_skipped as f64 / examined as f64) * 100.0
        }
    }

    /// Calculate the loading rate in stations per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.stations_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Read {} files ({} bytes), loaded {} stations ({:.1}% skipped, {} duplicates) in {:.2}s",
            self.files_read,
            self.bytes_read,
            self.stations_loaded,
            self.skip_rate(),
            self.duplicates_removed,
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about the station registry
#[derive(Debug, Clone)]
pub struct RegistryMetadata {
    /// Total number of stations in registry
    pub station_count: usize,

    /// US adapter statistics
    pub us_stats: ParseStats,

    /// Canadian adapter statistics
    pub canada_stats: ParseStats,
}

impl RegistryMetadata {
    /// Check whether both registries contributed records
    pub fn is_multi_jurisdiction(&self) -> bool {
        self.us_stats.stations_parsed > 0 && self.canada_stats.stations_parsed > 0
    }

    /// Get a summary string of the registry
    pub fn summary(&self) -> String {
        format!(
            "Registry with {} stations ({} US, {} Canadian)",
            self.station_count, self.us_stats.stations_parsed, self.canada_stats.stations_parsed
        )
    }
}
