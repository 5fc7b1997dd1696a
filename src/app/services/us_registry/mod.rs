//! Fixed-width US station listing adapter
//!
//! The legacy US dump is a columnar text file whose column positions drift
//! from record to record. Only the call sign and frequency columns are
//! reliable; every other field is found by searching for an anchor substring
//! and reading a documented window around it.
//!
//! ## Architecture
//!
//! - [`scanner`] - character-indexed anchor search and clamped windows
//! - [`parser`] - per-line field extraction, call-sign dedup and statistics
//!
//! ## Usage
//!
//! ```rust
//! use broadcast_registry::app::services::us_registry::UsRegistryParser;
//!
//! let result = UsRegistryParser::new().parse("header line\n");
//! assert!(result.records.is_empty());
//! assert_eq!(result.stats.records_skipped, 1);
//! ```

pub mod parser;
pub mod scanner;

#[cfg(test)]
pub mod tests;

pub use parser::{DmsTriplet, UsRegistryParser};
pub use scanner::LineScanner;
