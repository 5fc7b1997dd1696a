//! Parsing statistics and result structures shared by the format adapters
//!
//! Line-level failures are never surfaced individually; they only show up
//! here as aggregate counts.

use crate::app::models::{Jurisdiction, StationRecord};
use serde::{Deserialize, Serialize};

/// Parsing result with records and aggregate statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed station records, in output order
    pub records: Vec<StationRecord>,

    /// Aggregate parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    pub fn new(records: Vec<StationRecord>, stats: ParseStats) -> Self {
        Self { records, stats }
    }
}

/// Aggregate statistics for one adapter invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Registry the input came from
    pub jurisdiction: Jurisdiction,

    /// Total number of data lines or rows examined
    pub total_lines: usize,

    /// Number of station records emitted
    pub stations_parsed: usize,

    /// Lines rejected by a length, marker, anchor, column or range check
    pub records_skipped: usize,

    /// Lines dropped because an earlier line already produced the same key
    pub duplicates_removed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new(jurisdiction: Jurisdiction) -> Self {
        Self {
            jurisdiction,
            total_lines: 0,
            stations_parsed: 0,
            records_skipped: 0,
            duplicates_removed: 0,
        }
    }

    /// Calculate success rate as a percentage of examined lines
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.stations_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} stations parsed from {} lines ({} skipped, {} duplicates)",
            self.jurisdiction,
            self.stations_parsed,
            self.total_lines,
            self.records_skipped,
            self.duplicates_removed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_empty() {
        let stats = ParseStats::new(Jurisdiction::Canada);
        assert_eq!(stats.total_lines, 0);
        assert_eq!(stats.stations_parsed, 0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_success_rate_and_summary() {
        let mut stats = ParseStats::new(Jurisdiction::Us);
        stats.total_lines = 8;
        stats.stations_parsed = 6;
        stats.records_skipped = 1;
        stats.duplicates_removed = 1;

        assert_eq!(stats.success_rate(), 75.0);
        let summary = stats.summary();
        assert!(summary.starts_with("US: 6 stations parsed from 8 lines"));
        assert!(summary.contains("1 skipped"));
    }
}
