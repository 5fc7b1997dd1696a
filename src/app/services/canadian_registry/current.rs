//! Current 7-column Canadian export
//!
//! `Channel Type, Frequency(MHz), Power(W), Call sign, Lat, Lon, Licensee`
//!
//! Rows are split on every comma; surrounding quotes and whitespace are
//! stripped from each column afterwards. Auxiliary transmitters (`CBA-1`,
//! `CJBC-AX1`) collapse onto their base call sign and only the strongest
//! transmitter per base call sign and frequency is kept.

use super::deduplication::{DedupOutcome, DedupPolicy, RecordAccumulator};
use crate::app::models::{
    Jurisdiction, StationRecord, frequency_from_mhz, leading_number, record_id,
    watts_to_kilowatts,
};
use crate::app::services::parse_stats::{ParseResult, ParseStats};
use crate::constants::canada_layout::*;
use crate::constants::{CANADA_CITY_SENTINEL, CANADIAN_OPERATOR_SENTINEL};
use crate::{Error, Result};
use tracing::{debug, info};

/// Parse the full text of a current-schema export
pub fn parse_current(text: &str) -> ParseResult {
    let mut stats = ParseStats::new(Jurisdiction::Canada);
    let mut accumulator = RecordAccumulator::new(DedupPolicy::KeepStrongest);

    // Row 0 is the header
    for (row_number, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        stats.total_lines += 1;

        let columns = split_row(line);
        match parse_current_row(&columns) {
            Ok(Some(record)) => match accumulator.offer(record) {
                DedupOutcome::Inserted => {}
                DedupOutcome::Replaced | DedupOutcome::Discarded => {
                    stats.duplicates_removed += 1;
                }
            },
            Ok(None) => {
                debug!("Row {}: skipped repeated header", row_number + 1);
                stats.records_skipped += 1;
            }
            Err(e) => {
                debug!("Row {}: skipped ({})", row_number + 1, e);
                stats.records_skipped += 1;
            }
        }
    }

    let records = accumulator.into_records();
    stats.stations_parsed = records.len();
    info!("{}", stats.summary());

    ParseResult::new(records, stats)
}

/// Split a row on commas and strip quotes and whitespace from each column
pub fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(strip_column).collect()
}

pub(crate) fn strip_column(value: &str) -> String {
    value.trim().trim_matches('"').trim().to_string()
}

/// Strip an auxiliary transmitter suffix, e.g. `CJBC-AX1` becomes `CJBC`
pub fn base_call_sign(call_sign: &str) -> &str {
    call_sign
        .split(AUXILIARY_SUFFIX_SEPARATOR)
        .next()
        .unwrap_or(call_sign)
}

/// Parse one split row
///
/// Returns `Ok(None)` for a repeated header row and an error for rows that
/// fail a column, number or coordinate check.
pub fn parse_current_row(columns: &[String]) -> Result<Option<StationRecord>> {
    if columns.len() < COLUMN_COUNT {
        return Err(Error::data_validation(format!(
            "expected {} columns, found {}",
            COLUMN_COUNT,
            columns.len()
        )));
    }

    let call_sign = columns[CALL_SIGN_COLUMN].as_str();
    if call_sign == SECONDARY_HEADER_MARKER {
        return Ok(None);
    }

    let frequency_mhz = parse_number(&columns[FREQUENCY_COLUMN], "frequency")?;
    let power_watts = parse_number(&columns[POWER_COLUMN], "power")?;
    let lat = parse_number(&columns[LAT_COLUMN], "latitude")?;
    let lon = parse_number(&columns[LON_COLUMN], "longitude")?;

    if call_sign.is_empty() {
        return Err(Error::data_validation("empty call sign"));
    }
    if lat == 0.0 && lon == 0.0 {
        return Err(Error::data_validation("no coordinate data"));
    }

    let operator = match columns[LICENSEE_COLUMN].as_str() {
        "" => CANADIAN_OPERATOR_SENTINEL.to_string(),
        licensee => licensee.to_string(),
    };
    let frequency = frequency_from_mhz(frequency_mhz);
    let id = record_id(base_call_sign(call_sign), &frequency);

    StationRecord::new(
        call_sign.to_string(),
        frequency,
        watts_to_kilowatts(power_watts),
        CANADA_CITY_SENTINEL.to_string(),
        String::new(),
        operator,
        lat,
        lon,
        id,
    )
    .map(Some)
}

/// Parse the leading number of a column, rejecting empty or non-finite values
pub(crate) fn parse_number(value: &str, field: &str) -> Result<f64> {
    leading_number(value)
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::data_validation(format!("invalid {} '{}'", field, value)))
}
