//! Station registry loading from export files
//!
//! Reads the US fixed-width dump and the Canadian CSV export from disk and
//! merges the parsed results. Either file may be omitted; the missing side
//! contributes an empty result.

use super::StationRegistry;
use super::metadata::LoadStats;
use crate::app::models::Jurisdiction;
use crate::app::services::canadian_registry::CanadianRegistryParser;
use crate::app::services::parse_stats::{ParseResult, ParseStats};
use crate::app::services::us_registry::UsRegistryParser;
use crate::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl StationRegistry {
    /// Load and merge the registry exports
    ///
    /// # Arguments
    /// * `us_path` - US fixed-width export, if any
    /// * `canada_path` - Canadian CSV export, if any
    /// * `canadian` - Canadian parser, carrying any forced schema
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if a given path does not exist
    /// * Returns `Error::Io` for any other read failure
    pub async fn load(
        us_path: Option<&Path>,
        canada_path: Option<&Path>,
        canadian: &CanadianRegistryParser,
    ) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();
        let mut stats = LoadStats::new();

        let us = match us_path {
            Some(path) => {
                let text = Self::read_export(path, &mut stats).await?;
                UsRegistryParser::new().parse(&text)
            }
            None => ParseResult::new(Vec::new(), ParseStats::new(Jurisdiction::Us)),
        };

        let canada = match canada_path {
            Some(path) => {
                let text = Self::read_export(path, &mut stats).await?;
                canadian.parse(&text)
            }
            None => ParseResult::new(Vec::new(), ParseStats::new(Jurisdiction::Canada)),
        };

        stats.absorb(&us.stats);
        stats.absorb(&canada.stats);

        let registry = Self::merge(us, canada);
        stats.load_duration = start_time.elapsed();

        info!("{}", stats.summary());
        Ok((registry, stats))
    }

    /// Read one export file as text
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected; the
    /// registries are not consistent about their encoding.
    pub async fn read_export(path: &Path, stats: &mut LoadStats) -> Result<String> {
        debug!("Reading export file: {}", path.display());

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::io(format!("Failed to read {}", path.display()), e)
            }
        })?;

        stats.files_read += 1;
        stats.bytes_read += bytes.len();

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
