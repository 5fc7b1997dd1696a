//! Tests for station registry metadata and statistics

use super::create_test_registry;
use crate::app::models::Jurisdiction;
use crate::app::services::parse_stats::ParseStats;
use crate::app::services::station_registry::{LoadStats, StationRegistry};
use std::time::Duration;

#[test]
fn test_load_stats_new() {
    let stats = LoadStats::new();
    assert_eq!(stats.files_read, 0);
    assert_eq!(stats.bytes_read, 0);
    assert_eq!(stats.stations_loaded, 0);
    assert_eq!(stats.load_duration, Duration::ZERO);
    assert_eq!(stats.skip_rate(), 0.0);
    assert_eq!(stats.loading_rate(), 0.0);
}

#[test]
fn test_load_stats_absorb_and_rates() {
    let mut us = ParseStats::new(Jurisdiction::Us);
    us.stations_parsed = 600;
    us.records_skipped = 150;
    us.duplicates_removed = 50;

    let mut canada = ParseStats::new(Jurisdiction::Canada);
    canada.stations_parsed = 200;
    canada.records_skipped = 50;
    canada.duplicates_removed = 0;

    let mut stats = LoadStats::new();
    stats.absorb(&us);
    stats.absorb(&canada);
    stats.load_duration = Duration::from_secs(4);

    assert_eq!(stats.stations_loaded, 800);
    assert_eq!(stats.records_skipped, 200);
    assert_eq!(stats.duplicates_removed, 50);
    assert_eq!(stats.loading_rate(), 200.0);
    assert!((stats.skip_rate() - 200.0 / 1050.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_load_stats_summary() {
    let mut stats = LoadStats::new();
    stats.files_read = 2;
    stats.bytes_read = 4096;
    stats.stations_loaded = 800;
    stats.records_skipped = 200;
    stats.load_duration = Duration::from_millis(1500);

    let summary = stats.summary();
    assert!(summary.contains("2 files"));
    assert!(summary.contains("4096 bytes"));
    assert!(summary.contains("800 stations"));
    assert!(summary.contains("20.0% skipped"));
    assert!(summary.contains("1.50s"));
}

#[test]
fn test_registry_metadata() {
    let metadata = create_test_registry().metadata();

    assert_eq!(metadata.station_count, 6);
    assert!(metadata.is_multi_jurisdiction());
    assert_eq!(metadata.summary(), "Registry with 6 stations (3 US, 3 Canadian)");
}

#[test]
fn test_empty_registry_metadata() {
    let metadata = StationRegistry::new().metadata();
    assert_eq!(metadata.station_count, 0);
    assert!(!metadata.is_multi_jurisdiction());
}
