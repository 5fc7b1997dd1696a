//! Canadian export schema detection and dispatch

use super::current::{parse_current, split_row};
use super::legacy::{LegacyColumns, parse_legacy};
use crate::app::services::parse_stats::ParseResult;
use crate::constants::canada_layout::CURRENT_HEADER;
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known layouts of the Canadian export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanadianSchema {
    /// Fixed 7-column export, strongest transmitter per base call sign
    Current,
    /// Quoted multi-field export, first row per call sign and frequency
    Legacy,
}

impl CanadianSchema {
    /// Pick the schema from the header row
    ///
    /// The 7-column layout is the default. A header is treated as legacy only
    /// when its named columns resolve by name (see [`LegacyColumns::locate`])
    /// to positions other than the fixed 7-column ones. Trailing empty
    /// columns are ignored, and a reworded header that names no recognizable
    /// columns stays on the current layout.
    pub fn sniff(header_line: &str) -> Self {
        let mut columns = split_row(header_line);
        while columns.last().is_some_and(|column| column.is_empty()) {
            columns.pop();
        }

        let exact = columns.len() == CURRENT_HEADER.len()
            && columns
                .iter()
                .zip(CURRENT_HEADER)
                .all(|(found, expected)| found.eq_ignore_ascii_case(expected));
        if exact {
            return CanadianSchema::Current;
        }

        match LegacyColumns::locate(&StringRecord::from(columns)) {
            Ok(located) if !located.matches_current_layout() => CanadianSchema::Legacy,
            _ => CanadianSchema::Current,
        }
    }

    /// Parse a full export with this schema's strategy
    pub fn parse(self, text: &str) -> ParseResult {
        match self {
            CanadianSchema::Current => parse_current(text),
            CanadianSchema::Legacy => parse_legacy(text),
        }
    }
}

impl fmt::Display for CanadianSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanadianSchema::Current => write!(f, "current"),
            CanadianSchema::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for CanadianSchema {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "current" => Ok(CanadianSchema::Current),
            "legacy" => Ok(CanadianSchema::Legacy),
            other => Err(crate::Error::configuration(format!(
                "Unknown Canadian schema '{}': expected 'current' or 'legacy'",
                other
            ))),
        }
    }
}
