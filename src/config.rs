//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON config
//! file, then command-line overrides applied by the CLI.

use crate::app::services::canadian_registry::{CanadianRegistryParser, CanadianSchema};
use crate::cli::args::OutputFormat;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_NEAREST_LIMIT};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Upper bound on the nearest-station result count
pub const MAX_NEAREST_LIMIT: usize = 10_000;

/// Runtime configuration for loading and reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// US fixed-width registry export
    pub us_path: Option<PathBuf>,

    /// Canadian CSV registry export
    pub canada_path: Option<PathBuf>,

    /// Force a Canadian schema instead of sniffing the header
    pub canadian_schema: Option<CanadianSchema>,

    /// Number of results returned by the nearest command
    pub nearest_limit: usize,

    /// Report format
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            us_path: None,
            canada_path: None,
            canadian_schema: None,
            nearest_limit: DEFAULT_NEAREST_LIMIT,
            output_format: OutputFormat::Human,
        }
    }
}

impl Config {
    pub fn with_us_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.us_path = Some(path.into());
        self
    }

    pub fn with_canada_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.canada_path = Some(path.into());
        self
    }

    /// Force the Canadian schema
    pub fn with_canadian_schema(mut self, schema: CanadianSchema) -> Self {
        self.canadian_schema = Some(schema);
        self
    }

    pub fn with_nearest_limit(mut self, limit: usize) -> Self {
        self.nearest_limit = limit;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.nearest_limit == 0 {
            return Err(Error::configuration("nearest_limit must be greater than 0"));
        }

        if self.nearest_limit > MAX_NEAREST_LIMIT {
            return Err(Error::configuration(format!(
                "nearest_limit cannot exceed {}",
                MAX_NEAREST_LIMIT
            )));
        }

        Ok(())
    }

    /// Check that at least one registry export is configured
    pub fn require_inputs(&self) -> Result<()> {
        if self.us_path.is_none() && self.canada_path.is_none() {
            return Err(Error::configuration(
                "No registry exports given: pass --us-file and/or --canada-file",
            ));
        }
        Ok(())
    }

    /// Canadian parser honoring the forced schema, if any
    pub fn canadian_parser(&self) -> CanadianRegistryParser {
        match self.canadian_schema {
            Some(schema) => CanadianRegistryParser::with_schema(schema),
            None => CanadianRegistryParser::new(),
        }
    }

    /// Default config file location under the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::io(format!("Failed to read config file {}", path.display()), e)
            }
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::serialization(format!("Invalid config file {}", path.display()), e)
        })
    }

    /// Load defaults overlaid with a config file
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when a file is present there, otherwise built-in defaults apply.
    pub fn load_layered(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::serialization("Failed to serialize configuration", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.nearest_limit, DEFAULT_NEAREST_LIMIT);
        assert_eq!(config.output_format, OutputFormat::Human);
        assert!(config.us_path.is_none());
        assert!(config.canadian_schema.is_none());
        assert!(config.validate().is_ok());
        assert!(config.require_inputs().is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_us_path("am.txt")
            .with_canada_path("canada.csv")
            .with_canadian_schema(CanadianSchema::Legacy)
            .with_nearest_limit(3)
            .with_output_format(OutputFormat::Json);

        assert_eq!(config.us_path, Some(PathBuf::from("am.txt")));
        assert_eq!(config.canada_path, Some(PathBuf::from("canada.csv")));
        assert_eq!(config.nearest_limit, 3);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.require_inputs().is_ok());
        assert_eq!(
            config.canadian_parser().detect_schema("anything"),
            CanadianSchema::Legacy
        );
    }

    #[test]
    fn test_validation_failures() {
        assert!(Config::default().with_nearest_limit(0).validate().is_err());
        assert!(
            Config::default()
                .with_nearest_limit(MAX_NEAREST_LIMIT + 1)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::default()
            .with_us_path("/data/am.txt")
            .with_canadian_schema(CanadianSchema::Current);

        let json = config.to_json().unwrap();
        assert!(json.contains("\"canadian_schema\": \"current\""));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "nearest_limit": 25, "output_format": "csv" }"#).unwrap();

        let config = Config::load_layered(Some(&path)).unwrap();
        assert_eq!(config.nearest_limit, 25);
        assert_eq!(config.output_format, OutputFormat::Csv);
        assert!(config.canada_path.is_none());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_layered(Some(&temp_dir.path().join("nope.json")));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(Error::Serialization { .. })
        ));
    }
}
