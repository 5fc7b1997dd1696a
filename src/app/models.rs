//! Data models for broadcast registry processing
//!
//! This module contains the canonical station record produced by both format
//! adapters, together with the small value types the display and search layers
//! derive from it.

use crate::constants::{
    self, FREQUENCY_UNIT, FREQUENCY_UNIT_SEPARATOR, KHZ_PER_MHZ, power_tiers,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Station Record Structure
// =============================================================================

/// Normalized broadcast station record
///
/// One record per physical transmitter after deduplication. Records are built
/// once by a format adapter and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    /// Trimmed station identifier assigned by the licensing authority
    pub call_sign: String,

    /// Display frequency, `"<kHz>   kHz"` with three spaces before the unit
    pub frequency: String,

    /// Transmitter power in kilowatts, never negative
    pub power: f64,

    /// Free-text city; `"Canada"` when the source has no granular location
    pub city: String,

    /// Free-text state or province code
    pub state: String,

    /// Licensee or broadcaster name
    pub operator: String,

    /// Latitude in signed decimal degrees
    pub lat: f64,

    /// Longitude in signed decimal degrees, negative in the Western hemisphere
    pub lon: f64,

    /// Deduplication key and stable external identifier
    pub id: String,
}

impl StationRecord {
    /// Create a new StationRecord with validation
    ///
    /// Power is normalized (NaN and negative values become `0`) rather than
    /// rejected; coordinates and call sign are rejected when invalid.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        call_sign: String,
        frequency: String,
        power: f64,
        city: String,
        state: String,
        operator: String,
        lat: f64,
        lon: f64,
        id: String,
    ) -> Result<Self> {
        let record = Self {
            call_sign,
            frequency,
            power: normalize_power(power),
            city,
            state,
            operator,
            lat,
            lon,
            id,
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate record data for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        if self.call_sign.trim().is_empty() {
            return Err(Error::data_validation("Call sign cannot be empty"));
        }

        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {}: must be between -90 and 90 degrees",
                self.lat
            )));
        }

        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {}: must be between -180 and 180 degrees",
                self.lon
            )));
        }

        if self.power.is_nan() || self.power < 0.0 {
            return Err(Error::data_validation(format!(
                "Invalid power {}: must be zero or greater",
                self.power
            )));
        }

        Ok(())
    }

    /// Get station location as (latitude, longitude) tuple
    pub fn location(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Integer prefix of the frequency string, e.g. `540` for `"540   kHz"`
    pub fn frequency_khz(&self) -> Option<i64> {
        integer_prefix(&self.frequency)
    }

    /// Display tier derived from transmitter power
    pub fn power_tier(&self) -> PowerTier {
        PowerTier::from_power(self.power)
    }
}

// =============================================================================
// Normalization Helpers
// =============================================================================

/// Build the deduplication key for a call sign and frequency
pub fn record_id(call_sign: &str, frequency: &str) -> String {
    format!("{}-{}", call_sign, frequency)
}

/// Format kilohertz in the canonical display form, e.g. `"540   kHz"`
pub fn canonical_frequency(khz: f64) -> String {
    format!(
        "{}{}{}",
        khz.round() as i64,
        FREQUENCY_UNIT_SEPARATOR,
        FREQUENCY_UNIT
    )
}

/// Convert megahertz to the canonical kilohertz display form
pub fn frequency_from_mhz(mhz: f64) -> String {
    canonical_frequency(mhz * KHZ_PER_MHZ)
}

/// Convert watts to kilowatts
pub fn watts_to_kilowatts(watts: f64) -> f64 {
    watts / constants::WATTS_PER_KILOWATT
}

/// Coerce unusable power values to zero
pub fn normalize_power(power: f64) -> f64 {
    if power.is_nan() || power < 0.0 { 0.0 } else { power }
}

/// Parse the leading run of ASCII digits of a string
pub fn integer_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Parse the leading numeric portion of a string, e.g. `540.5` for `"540.5 kHz"`
///
/// A value that is a complete float (`"5e4"`) is taken whole; otherwise the
/// longest prefix of digits, `.` and a leading sign is used.
pub fn leading_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if let Ok(number) = trimmed.parse::<f64>() {
        return Some(number);
    }

    let end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

// =============================================================================
// Display Types
// =============================================================================

/// Power tier used for marker color and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerTier {
    /// 10 kW and above
    High,
    /// 1 kW up to 10 kW
    Medium,
    /// Below 1 kW
    Low,
}

impl PowerTier {
    /// Classify a power value in kilowatts
    pub fn from_power(power_kw: f64) -> Self {
        if power_kw >= power_tiers::HIGH_KW {
            PowerTier::High
        } else if power_kw >= power_tiers::MEDIUM_KW {
            PowerTier::Medium
        } else {
            PowerTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerTier::High => "high",
            PowerTier::Medium => "medium",
            PowerTier::Low => "low",
        }
    }

    /// All tiers from strongest to weakest
    pub fn all_values() -> [PowerTier; 3] {
        [PowerTier::High, PowerTier::Medium, PowerTier::Low]
    }
}

impl fmt::Display for PowerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Registry a batch of records was parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    Us,
    Canada,
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jurisdiction::Us => write!(f, "US"),
            Jurisdiction::Canada => write!(f, "Canada"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> StationRecord {
        StationRecord::new(
            "WABC".to_string(),
            "770   kHz".to_string(),
            50.0,
            "New York".to_string(),
            "NY".to_string(),
            "Radio License Holding".to_string(),
            40.88,
            -74.07,
            "WABC-770   kHz".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_record_creation() {
        let record = create_test_record();
        assert_eq!(record.call_sign, "WABC");
        assert_eq!(record.location(), (40.88, -74.07));
        assert_eq!(record.frequency_khz(), Some(770));
        assert_eq!(record.power_tier(), PowerTier::High);
    }

    #[test]
    fn test_record_validation() {
        let mut record = create_test_record();
        record.lat = 91.0;
        assert!(record.validate().is_err());

        let mut record = create_test_record();
        record.lon = f64::NAN;
        assert!(record.validate().is_err());

        let mut record = create_test_record();
        record.call_sign = "  ".to_string();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_power_normalization() {
        let record = StationRecord::new(
            "CBA".to_string(),
            "1070   kHz".to_string(),
            f64::NAN,
            "Canada".to_string(),
            String::new(),
            "Canadian Broadcaster".to_string(),
            46.1,
            -64.8,
            "CBA-1070   kHz".to_string(),
        )
        .unwrap();
        assert_eq!(record.power, 0.0);
        assert_eq!(normalize_power(-3.0), 0.0);
        assert_eq!(normalize_power(2.5), 2.5);
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(frequency_from_mhz(0.54), "540   kHz");
        assert_eq!(frequency_from_mhz(1.6), "1600   kHz");
        assert_eq!(canonical_frequency(1009.6), "1010   kHz");
        assert_eq!(watts_to_kilowatts(50000.0), 50.0);
        assert_eq!(record_id("CBA", "1070   kHz"), "CBA-1070   kHz");
    }

    #[test]
    fn test_numeric_prefixes() {
        assert_eq!(integer_prefix("540   kHz"), Some(540));
        assert_eq!(integer_prefix("  1010"), Some(1010));
        assert_eq!(integer_prefix("kHz"), None);
        assert_eq!(leading_number("543"), Some(543.0));
        assert_eq!(leading_number("540.5 kHz"), Some(540.5));
        assert_eq!(leading_number("WABC"), None);
        assert_eq!(leading_number("5e4"), Some(50000.0));
        assert_eq!(leading_number(" 1.5E-3 "), Some(0.0015));
        assert_eq!(leading_number("5e4 W"), Some(5.0));
    }

    #[test]
    fn test_power_tiers() {
        assert_eq!(PowerTier::from_power(50.0), PowerTier::High);
        assert_eq!(PowerTier::from_power(10.0), PowerTier::High);
        assert_eq!(PowerTier::from_power(1.0), PowerTier::Medium);
        assert_eq!(PowerTier::from_power(0.99), PowerTier::Low);
        assert_eq!(PowerTier::from_power(0.0), PowerTier::Low);
        assert_eq!(format!("{}", PowerTier::Medium), "medium");
    }

    #[test]
    fn test_serde_serialization() {
        let record = create_test_record();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"callSign\":\"WABC\""));
        let deserialized: StationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
