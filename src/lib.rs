//! Broadcast Registry Library
//!
//! A Rust library for turning government broadcast-registry exports into a
//! single normalized set of AM station records for geospatial display and search.
//!
//! This library provides tools for:
//! - Scanning the fixed-width US station listing by anchor substrings
//! - Parsing both the legacy and the current Canadian CSV export schemas
//! - Deduplicating transmitters reported more than once
//! - Normalizing frequency and power units into one canonical schema
//! - Great-circle distance and nearest-station queries over the merged set

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Jurisdiction, PowerTier, StationRecord};
pub use app::services::geodesy::distance;
pub use app::services::station_registry::StationRegistry;
pub use config::Config;

/// Result type alias for the broadcast registry
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for registry loading and record construction
///
/// Per-record failures inside the adapters are converted into skipped lines and
/// never reach callers; only loading, configuration and output errors do.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing error
    #[error("CSV error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Record failed an invariant check
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Registry export file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Report or config serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV processing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
