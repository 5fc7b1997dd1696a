//! Delimited Canadian registry adapter
//!
//! The Canadian export has shipped in two layouts. The schema is detected from
//! the header row (or forced by configuration) and the matching strategy runs
//! over the whole text.
//!
//! ## Architecture
//!
//! - [`schema`] - header sniffing and strategy dispatch
//! - [`current`] - the 7-column export with unit conversion and suffix stripping
//! - [`legacy`] - the quoted export with header-name column lookup
//! - [`deduplication`] - per-call, order-preserving id accumulator

pub mod current;
pub mod deduplication;
pub mod legacy;
pub mod schema;

#[cfg(test)]
pub mod tests;

pub use current::base_call_sign;
pub use schema::CanadianSchema;

use crate::app::models::Jurisdiction;
use crate::app::services::parse_stats::{ParseResult, ParseStats};
use tracing::debug;

/// Parser for Canadian registry CSV exports
#[derive(Debug, Clone, Default)]
pub struct CanadianRegistryParser {
    schema_override: Option<CanadianSchema>,
}

impl CanadianRegistryParser {
    /// Create a parser that sniffs the schema from the header row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that always uses the given schema
    pub fn with_schema(schema: CanadianSchema) -> Self {
        Self {
            schema_override: Some(schema),
        }
    }

    /// Schema that would be used for this text
    pub fn detect_schema(&self, text: &str) -> CanadianSchema {
        self.schema_override.unwrap_or_else(|| {
            let header = strip_bom(text).lines().next().unwrap_or("");
            CanadianSchema::sniff(header)
        })
    }

    /// Parse the full text of a Canadian export
    ///
    /// Never fails; rows that cannot be parsed are skipped and counted.
    pub fn parse(&self, text: &str) -> ParseResult {
        let text = strip_bom(text);
        if text.trim().is_empty() {
            return ParseResult::new(Vec::new(), ParseStats::new(Jurisdiction::Canada));
        }

        let schema = self.detect_schema(text);
        debug!("Parsing Canadian export with {} schema", schema);
        schema.parse(text)
    }
}

#[inline]
fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}
