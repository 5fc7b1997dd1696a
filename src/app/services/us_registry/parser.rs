//! Fixed-width US listing parser
//!
//! Turns each qualifying line of the US station listing into a
//! [`StationRecord`]. Call sign and frequency are columnar; the remaining
//! fields are located relative to anchor substrings (see
//! [`crate::constants::us_layout`]).

use super::scanner::LineScanner;
use crate::app::models::{Jurisdiction, StationRecord, record_id};
use crate::app::services::parse_stats::{ParseResult, ParseStats};
use crate::constants::us_layout::*;
use crate::{Error, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, info, trace};

static OPERATOR_STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(OPERATOR_STOP_PATTERN).expect("operator stop pattern is a valid regex")
});

/// Degrees, minutes and seconds as read from the listing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsTriplet {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl DmsTriplet {
    /// Parse the first three whitespace-separated tokens as numbers
    pub fn parse(text: &str) -> Option<Self> {
        let mut values = text
            .split_whitespace()
            .take(3)
            .map(|token| token.parse::<f64>().ok().filter(|v| v.is_finite()));

        let degrees = values.next()??;
        let minutes = values.next()??;
        let seconds = values.next()??;
        Some(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    /// Convert to unsigned decimal degrees
    pub fn to_decimal(self) -> f64 {
        self.degrees + self.minutes / 60.0 + self.seconds / 3600.0
    }
}

/// Outcome of examining a single line
enum LineOutcome {
    Parsed(StationRecord),
    Duplicate,
    Skipped(String),
}

/// Parser for the fixed-width US station listing
///
/// Stateless between calls: the call-sign dedup set lives only for the
/// duration of one [`UsRegistryParser::parse`] invocation.
#[derive(Debug, Clone, Default)]
pub struct UsRegistryParser;

impl UsRegistryParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse the full text of the US listing
    ///
    /// Never fails: lines that cannot be extracted are skipped and only
    /// reflected in the returned statistics.
    pub fn parse(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new(Jurisdiction::Us);
        let mut seen_call_signs = HashSet::new();
        let mut records = Vec::new();

        for (line_number, line) in text.lines().enumerate() {
            stats.total_lines += 1;

            match self.parse_line(line, &mut seen_call_signs) {
                LineOutcome::Parsed(record) => {
                    trace!("Line {}: parsed {}", line_number + 1, record.id);
                    records.push(record);
                }
                LineOutcome::Duplicate => {
                    stats.duplicates_removed += 1;
                }
                LineOutcome::Skipped(reason) => {
                    debug!("Line {}: skipped ({})", line_number + 1, reason);
                    stats.records_skipped += 1;
                }
            }
        }

        stats.stations_parsed = records.len();
        info!("{}", stats.summary());

        ParseResult::new(records, stats)
    }

    fn parse_line(&self, line: &str, seen_call_signs: &mut HashSet<String>) -> LineOutcome {
        let scanner = LineScanner::new(line);

        if scanner.len() < MIN_LINE_LENGTH {
            return LineOutcome::Skipped("line too short".to_string());
        }
        if !scanner.contains(DAYTIME_MARKER) {
            return LineOutcome::Skipped("not a daytime entry".to_string());
        }

        let call_sign = scanner
            .window(CALL_SIGN_COLUMNS.0, CALL_SIGN_COLUMNS.1)
            .trim()
            .to_string();
        let frequency = scanner
            .window(FREQUENCY_COLUMNS.0, FREQUENCY_COLUMNS.1)
            .trim()
            .to_string();

        if call_sign.is_empty() {
            return LineOutcome::Skipped("empty call sign".to_string());
        }

        // First occurrence claims the call sign even if its extraction fails below
        if !seen_call_signs.insert(call_sign.clone()) {
            return LineOutcome::Duplicate;
        }

        match extract_record(&scanner, call_sign, frequency) {
            Ok(record) => LineOutcome::Parsed(record),
            Err(e) => LineOutcome::Skipped(e.to_string()),
        }
    }
}

/// Extract the anchored fields of a line whose columns are already known
fn extract_record(
    scanner: &LineScanner,
    call_sign: String,
    frequency: String,
) -> Result<StationRecord> {
    let country = scanner
        .find_from(COUNTRY_ANCHOR, 0)
        .ok_or_else(|| Error::data_validation("missing country anchor"))?;

    let state = scanner.window_before(country, STATE_WIDTH).trim().to_string();
    let city = scanner
        .window_before(country.saturating_sub(STATE_WIDTH), CITY_WIDTH)
        .trim()
        .to_string();

    let north = scanner
        .find_from(LATITUDE_ANCHOR, country)
        .ok_or_else(|| Error::data_validation("missing latitude anchor"))?;
    let west = scanner
        .find_from(LONGITUDE_ANCHOR, north)
        .ok_or_else(|| Error::data_validation("missing longitude anchor"))?;

    let latitude_text = scanner.window(north + LATITUDE_ANCHOR.len(), west);
    let longitude_start = west + LONGITUDE_ANCHOR.len();
    let longitude_text = scanner.window_after(longitude_start, LONGITUDE_WINDOW);

    let latitude = DmsTriplet::parse(&latitude_text).ok_or_else(|| {
        Error::data_validation(format!("invalid latitude triplet '{}'", latitude_text.trim()))
    })?;
    let longitude = DmsTriplet::parse(&longitude_text).ok_or_else(|| {
        Error::data_validation(format!(
            "invalid longitude triplet '{}'",
            longitude_text.trim()
        ))
    })?;

    if !(0.0..=MAX_LATITUDE_DEGREES).contains(&latitude.degrees) {
        return Err(Error::data_validation(format!(
            "latitude degrees {} out of range",
            latitude.degrees
        )));
    }
    if !(0.0..=MAX_LONGITUDE_DEGREES).contains(&longitude.degrees) {
        return Err(Error::data_validation(format!(
            "longitude degrees {} out of range",
            longitude.degrees
        )));
    }

    let operator = extract_operator(&scanner.rest_from(longitude_start + LONGITUDE_WINDOW));
    let power = extract_power(scanner, country);
    let id = record_id(&call_sign, &frequency);

    StationRecord::new(
        call_sign,
        frequency,
        power,
        city,
        state,
        operator,
        latitude.to_decimal(),
        -longitude.to_decimal(),
        id,
    )
}

/// Operator name: text up to the first double whitespace or multi-digit run
///
/// Names containing numbers are cut at the number ("Radio 104 Inc" yields
/// "Radio"); this matches the existing listing output.
pub fn extract_operator(text: &str) -> String {
    let text = text.trim_start();
    match OPERATOR_STOP.find(text) {
        Some(stop) => text[..stop.start()].trim().to_string(),
        None => text
            .chars()
            .take(OPERATOR_FALLBACK_WIDTH)
            .collect::<String>()
            .trim()
            .to_string(),
    }
}

/// Power in kW from the token just before the first `kW` after `from`
///
/// Missing or unparsable values coerce to `0`.
pub fn extract_power(scanner: &LineScanner, from: usize) -> f64 {
    let Some(unit) = scanner.find_from(POWER_ANCHOR, from) else {
        return 0.0;
    };

    scanner
        .window_before(unit, POWER_LOOKBACK)
        .split_whitespace()
        .last()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|power| !power.is_nan())
        .unwrap_or(0.0)
}
