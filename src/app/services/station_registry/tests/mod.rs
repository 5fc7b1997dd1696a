//! Shared test utilities and fixtures for station registry tests

use crate::app::services::canadian_registry::CanadianRegistryParser;
use crate::app::services::canadian_registry::tests::create_test_current_export;
use crate::app::services::station_registry::StationRegistry;
use crate::app::services::us_registry::tests::create_test_listing;
use std::fs;
use std::path::{Path, PathBuf};

pub mod metadata_tests;

/// Registry built from the US listing and current Canadian fixtures
///
/// Holds, in order: WABC, WCBS, KFI, CBT, CBF, CBW-AX1.
pub fn create_test_registry() -> StationRegistry {
    StationRegistry::from_text(
        &create_test_listing(),
        &create_test_current_export(),
        &CanadianRegistryParser::new(),
    )
}

/// Write both fixture exports into a directory
pub fn write_test_exports(dir: &Path) -> std::io::Result<(PathBuf, PathBuf)> {
    let us_path = dir.join("am_query.txt");
    let canada_path = dir.join("canada.csv");
    fs::write(&us_path, create_test_listing())?;
    fs::write(&canada_path, create_test_current_export())?;
    Ok((us_path, canada_path))
}
