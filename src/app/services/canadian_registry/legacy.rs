//! Legacy quoted Canadian export
//!
//! Older exports quote every field and may embed commas inside licensee or
//! city names, so rows go through a quote-aware CSV reader. Columns are found
//! by header name. Deduplication is by exact call sign and frequency: no
//! suffix stripping, no power priority.

use super::current::parse_number;
use super::deduplication::{DedupOutcome, DedupPolicy, RecordAccumulator};
use crate::app::models::{
    Jurisdiction, StationRecord, frequency_from_mhz, record_id, watts_to_kilowatts,
};
use crate::app::services::parse_stats::{ParseResult, ParseStats};
use crate::constants::canada_layout::{
    CALL_SIGN_COLUMN, FREQUENCY_COLUMN, LAT_COLUMN, LON_COLUMN, POWER_COLUMN, legacy_columns,
};
use crate::constants::{CANADA_CITY_SENTINEL, CANADIAN_OPERATOR_SENTINEL};
use crate::{Error, Result};
use csv::StringRecord;
use tracing::{debug, info, warn};

/// Column positions resolved from a legacy header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyColumns {
    pub call_sign: usize,
    pub frequency: usize,
    pub power: usize,
    pub lat: usize,
    pub lon: usize,
    pub licensee: Option<usize>,
    pub city: Option<usize>,
    pub province: Option<usize>,
}

impl LegacyColumns {
    /// Resolve column positions by header name
    ///
    /// Header names are compared after lowercasing and dropping everything
    /// that is not alphanumeric, so `"Call Sign"`, `"call_sign"` and
    /// `"CALLSIGN"` all resolve to the call sign column.
    pub fn locate(headers: &StringRecord) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |prefix: &str| normalized.iter().position(|h| h.starts_with(prefix));
        let require = |prefix: &str| {
            find(prefix).ok_or_else(|| {
                Error::data_validation(format!("legacy header has no '{}' column", prefix))
            })
        };

        Ok(Self {
            call_sign: require(legacy_columns::CALL_SIGN)?,
            frequency: require(legacy_columns::FREQUENCY)?,
            power: require(legacy_columns::POWER)?,
            lat: require(legacy_columns::LAT)?,
            lon: require(legacy_columns::LON)?,
            licensee: find(legacy_columns::LICENSEE),
            city: find(legacy_columns::CITY),
            province: find(legacy_columns::PROVINCE),
        })
    }

    /// Whether the required columns sit where the 7-column export puts them
    pub fn matches_current_layout(&self) -> bool {
        self.call_sign == CALL_SIGN_COLUMN
            && self.frequency == FREQUENCY_COLUMN
            && self.power == POWER_COLUMN
            && self.lat == LAT_COLUMN
            && self.lon == LON_COLUMN
    }
}

fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse the full text of a legacy export
pub fn parse_legacy(text: &str) -> ParseResult {
    let mut stats = ParseStats::new(Jurisdiction::Canada);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => match LegacyColumns::locate(headers) {
            Ok(columns) => columns,
            Err(e) => {
                warn!("Unusable legacy Canadian export: {}", e);
                return ParseResult::new(Vec::new(), stats);
            }
        },
        Err(e) => {
            warn!("Failed to read legacy Canadian header: {}", e);
            return ParseResult::new(Vec::new(), stats);
        }
    };

    let mut accumulator = RecordAccumulator::new(DedupPolicy::KeepFirst);

    for (row_index, row) in reader.records().enumerate() {
        stats.total_lines += 1;

        let parsed = row
            .map_err(|e| Error::csv_parsing("legacy export", "malformed row", Some(e)))
            .and_then(|record| parse_legacy_record(&record, &columns));

        match parsed {
            Ok(record) => {
                if accumulator.offer(record) == DedupOutcome::Discarded {
                    stats.duplicates_removed += 1;
                }
            }
            Err(e) => {
                debug!("Row {}: skipped ({})", row_index + 2, e);
                stats.records_skipped += 1;
            }
        }
    }

    let records = accumulator.into_records();
    stats.stations_parsed = records.len();
    info!("{}", stats.summary());

    ParseResult::new(records, stats)
}

/// Parse a single legacy row using resolved column positions
pub fn parse_legacy_record(record: &StringRecord, columns: &LegacyColumns) -> Result<StationRecord> {
    let field = |index: usize| record.get(index).map(str::trim).unwrap_or("");
    let optional = |index: Option<usize>| index.map(field).filter(|value| !value.is_empty());

    let call_sign = field(columns.call_sign);
    if call_sign.is_empty() {
        return Err(Error::data_validation("empty call sign"));
    }

    let frequency_mhz = parse_number(field(columns.frequency), "frequency")?;
    let power_watts = parse_number(field(columns.power), "power")?;
    let lat = parse_number(field(columns.lat), "latitude")?;
    let lon = parse_number(field(columns.lon), "longitude")?;

    if lat == 0.0 && lon == 0.0 {
        return Err(Error::data_validation("no coordinate data"));
    }

    let frequency = frequency_from_mhz(frequency_mhz);
    let id = record_id(call_sign, &frequency);

    StationRecord::new(
        call_sign.to_string(),
        frequency,
        watts_to_kilowatts(power_watts),
        optional(columns.city).unwrap_or(CANADA_CITY_SENTINEL).to_string(),
        optional(columns.province).unwrap_or_default().to_string(),
        optional(columns.licensee)
            .unwrap_or(CANADIAN_OPERATOR_SENTINEL)
            .to_string(),
        lat,
        lon,
        id,
    )
}
