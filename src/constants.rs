//! Application constants for the broadcast registry parser
//!
//! This module contains the anchor substrings, window sizes, sentinels and
//! unit factors used by the format adapters and the query layer.

// =============================================================================
// US Fixed-Width Listing Layout
// =============================================================================

/// Layout of the fixed-width US station listing
///
/// Only the call sign and frequency columns are reliably positional. Every other
/// field is located relative to an anchor substring, with the windows below
/// measured in characters from that anchor.
pub mod us_layout {
    /// Lines shorter than this are header, footer or blank noise
    pub const MIN_LINE_LENGTH: usize = 250;

    /// Only daytime-licensed entries are retained
    pub const DAYTIME_MARKER: &str = "Daytime";

    /// Call sign column, `[start, end)`
    pub const CALL_SIGN_COLUMNS: (usize, usize) = (1, 14);

    /// Frequency column, `[start, end)`
    pub const FREQUENCY_COLUMNS: (usize, usize) = (14, 23);

    /// Country anchor; state and city sit immediately before it
    pub const COUNTRY_ANCHOR: &str = " US ";

    /// Characters of state code immediately preceding the country anchor
    pub const STATE_WIDTH: usize = 2;

    /// Characters of city name preceding the state code
    pub const CITY_WIDTH: usize = 27;

    /// Latitude hemisphere anchor, searched at or after the country anchor
    pub const LATITUDE_ANCHOR: &str = " N  ";

    /// Longitude hemisphere anchor, searched at or after the latitude anchor
    pub const LONGITUDE_ANCHOR: &str = " W  ";

    /// Width of the longitude triplet window following the longitude anchor
    pub const LONGITUDE_WINDOW: usize = 16;

    /// Operator fallback width when no stop pattern is found
    pub const OPERATOR_FALLBACK_WIDTH: usize = 60;

    /// Operator ends at 2+ whitespace characters or 2+ digits, whichever comes first
    pub const OPERATOR_STOP_PATTERN: &str = r"\s{2,}|\d{2,}";

    /// Power unit anchor, searched at or after the country anchor
    pub const POWER_ANCHOR: &str = "kW";

    /// Characters before the power anchor searched for the power token
    pub const POWER_LOOKBACK: usize = 20;

    /// Maximum raw latitude degrees in a DMS triplet
    pub const MAX_LATITUDE_DEGREES: f64 = 90.0;

    /// Maximum raw longitude degrees in a DMS triplet
    pub const MAX_LONGITUDE_DEGREES: f64 = 180.0;
}

// =============================================================================
// Canadian CSV Export Layout
// =============================================================================

/// Column layout of the Canadian CSV exports
pub mod canada_layout {
    /// Header of the current 7-column schema
    pub const CURRENT_HEADER: &[&str] = &[
        "Channel Type",
        "Frequency(MHz)",
        "Power(W)",
        "Call sign",
        "Lat",
        "Lon",
        "Licensee",
    ];

    pub const COLUMN_COUNT: usize = 7;
    pub const FREQUENCY_COLUMN: usize = 1;
    pub const POWER_COLUMN: usize = 2;
    pub const CALL_SIGN_COLUMN: usize = 3;
    pub const LAT_COLUMN: usize = 4;
    pub const LON_COLUMN: usize = 5;
    pub const LICENSEE_COLUMN: usize = 6;

    /// Literal content of the call-sign column in repeated header rows
    pub const SECONDARY_HEADER_MARKER: &str = "Call sign";

    /// Separator between a base call sign and an auxiliary transmitter suffix
    pub const AUXILIARY_SUFFIX_SEPARATOR: char = '-';

    /// Header name prefixes used by the legacy quoted schema, compared after
    /// lowercasing and dropping every non-alphanumeric character
    pub mod legacy_columns {
        pub const CALL_SIGN: &str = "callsign";
        pub const FREQUENCY: &str = "frequency";
        pub const POWER: &str = "power";
        pub const LAT: &str = "lat";
        pub const LON: &str = "lon";
        pub const LICENSEE: &str = "licensee";
        pub const CITY: &str = "city";
        pub const PROVINCE: &str = "province";
    }
}

// =============================================================================
// Record Normalization
// =============================================================================

/// Sentinel city for Canadian records without granular location data
pub const CANADA_CITY_SENTINEL: &str = "Canada";

/// Default operator for Canadian records with an empty licensee
pub const CANADIAN_OPERATOR_SENTINEL: &str = "Canadian Broadcaster";

/// Separator between the number and unit of a canonical frequency.
/// Three spaces, matching the historical US listing.
pub const FREQUENCY_UNIT_SEPARATOR: &str = "   ";

/// Unit suffix of a canonical frequency
pub const FREQUENCY_UNIT: &str = "kHz";

pub const KHZ_PER_MHZ: f64 = 1000.0;
pub const WATTS_PER_KILOWATT: f64 = 1000.0;

// =============================================================================
// Geodesy and Display
// =============================================================================

/// Mean Earth radius used by the haversine distance
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Power tier thresholds in kilowatts
pub mod power_tiers {
    pub const HIGH_KW: f64 = 10.0;
    pub const MEDIUM_KW: f64 = 1.0;
}

/// Frequency searches are rounded to this step before comparison
pub const FREQUENCY_SEARCH_STEP: f64 = 10.0;

/// Default number of results for nearest-station queries
pub const DEFAULT_NEAREST_LIMIT: usize = 10;

// =============================================================================
// Configuration
// =============================================================================

/// Application directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "broadcast-registry";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Crate target used by the default log filter
pub const LOG_TARGET: &str = "broadcast_registry";
