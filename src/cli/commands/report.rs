//! Report rendering shared by the station commands
//!
//! Every command that lists stations renders through here, so the human,
//! JSON and CSV layouts stay identical across `parse`, `search` and `nearest`.

use crate::app::models::{PowerTier, StationRecord};
use crate::app::services::station_registry::{LoadStats, StationRegistry};
use crate::cli::args::OutputFormat;
use crate::{Error, Result};
use colored::*;
use serde_json::{Value, json};

/// A station in a report, with its distance from the query point if any
#[derive(Debug, Clone, Copy)]
pub struct ReportRow<'a> {
    pub station: &'a StationRecord,
    pub distance_miles: Option<f64>,
}

impl<'a> ReportRow<'a> {
    pub fn new(station: &'a StationRecord) -> Self {
        Self {
            station,
            distance_miles: None,
        }
    }

    pub fn with_distance(station: &'a StationRecord, miles: f64) -> Self {
        Self {
            station,
            distance_miles: Some(miles),
        }
    }
}

/// Rows of a report plus the context printed above them
#[derive(Debug, Clone)]
pub struct StationReport<'a> {
    pub title: String,
    pub rows: Vec<ReportRow<'a>>,
    pub registry: &'a StationRegistry,
    pub load_stats: &'a LoadStats,
    /// Extra key/value pairs for the JSON metadata block
    pub query: Value,
}

impl StationReport<'_> {
    pub fn render(&self, format: OutputFormat, detailed: bool) -> Result<String> {
        match format {
            OutputFormat::Human => Ok(self.render_human(detailed)),
            OutputFormat::Json => self.render_json(),
            OutputFormat::Csv => render_csv(&self.rows),
        }
    }

    fn render_human(&self, detailed: bool) -> String {
        let metadata = self.registry.metadata();
        let mut output = format!(
            "{}\n{}\n",
            self.title.bright_green().bold(),
            "=".repeat(self.title.chars().count())
        );

        output.push_str(&format!(
            "Registry: {}\n",
            metadata.summary().bright_white()
        ));
        output.push_str(&format!("  {}\n", metadata.us_stats.summary()));
        output.push_str(&format!("  {}\n", metadata.canada_stats.summary()));

        let statistics = self.registry.get_statistics();
        let tiers: Vec<String> = PowerTier::all_values()
            .into_iter()
            .map(|tier| format!("{} {}", tier, statistics.tier_count(tier)))
            .collect();
        output.push_str(&format!("Power tiers: {}\n", tiers.join(", ")));

        output.push_str(&format!(
            "Load: {} files, {:.2}s ({:.0} stations/s)\n\n",
            self.load_stats.files_read,
            self.load_stats.load_duration.as_secs_f64(),
            self.load_stats.loading_rate()
        ));

        if self.rows.is_empty() {
            output.push_str("No stations found.\n");
            return output;
        }

        if !detailed {
            output.push_str(&format!(
                "{} stations (use --detailed for the full listing)\n",
                self.rows.len().to_string().bright_white().bold()
            ));
            return output;
        }

        output.push_str(&human_table(&self.rows));
        output
    }

    fn render_json(&self) -> Result<String> {
        let metadata = self.registry.metadata();
        let stations = self
            .rows
            .iter()
            .map(station_json)
            .collect::<Result<Vec<_>>>()?;

        let statistics = self.registry.get_statistics();
        let power_tiers: serde_json::Map<String, Value> = PowerTier::all_values()
            .into_iter()
            .map(|tier| (tier.to_string(), json!(statistics.tier_count(tier))))
            .collect();

        let report = json!({
            "metadata": {
                "title": self.title,
                "total_stations_in_registry": metadata.station_count,
                "stations_in_report": self.rows.len(),
                "multi_jurisdiction": metadata.is_multi_jurisdiction(),
                "us": metadata.us_stats,
                "canada": metadata.canada_stats,
                "power_tiers": power_tiers,
                "geographic_bounds": statistics.geographic_bounds,
                "files_read": self.load_stats.files_read,
                "load_duration_seconds": self.load_stats.load_duration.as_secs_f64(),
                "stations_per_second": self.load_stats.loading_rate(),
                "query": self.query,
                "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
            },
            "stations": stations
        });

        serde_json::to_string_pretty(&report)
            .map_err(|e| Error::serialization("Failed to serialize station report", e))
    }
}

/// Fixed-width station table for terminal output
pub fn human_table(rows: &[ReportRow<'_>]) -> String {
    let with_distance = rows.iter().any(|row| row.distance_miles.is_some());
    let mut output = String::new();

    output.push_str(&format!(
        "{:<10} | {:<11} | {:>8} | {:<6} | {:<22} | {:<5} | {:>8} | {:>9}",
        "Call", "Frequency", "Power kW", "Tier", "City", "State", "Lat", "Lon"
    ));
    if with_distance {
        output.push_str(&format!(" | {:>9}", "Miles"));
    }
    output.push('\n');

    for row in rows {
        let station = row.station;
        let tier = station.power_tier();
        let tier_label = match tier {
            PowerTier::High => format!("{:<6}", tier).bright_red(),
            PowerTier::Medium => format!("{:<6}", tier).bright_yellow(),
            PowerTier::Low => format!("{:<6}", tier).bright_blue(),
        };

        output.push_str(&format!(
            "{} | {:<11} | {:>8.2} | {} | {:<22} | {:<5} | {:>8.4} | {:>9.4}",
            format!("{:<10}", station.call_sign).bold(),
            station.frequency,
            station.power,
            tier_label,
            truncate(&station.city, 22),
            station.state,
            station.lat,
            station.lon
        ));
        if let Some(miles) = row.distance_miles {
            output.push_str(&format!(" | {:>9.1}", miles));
        }
        output.push('\n');
    }

    output
}

/// JSON object for one report row
pub fn station_json(row: &ReportRow<'_>) -> Result<Value> {
    let mut value = serde_json::to_value(row.station)
        .map_err(|e| Error::serialization("Failed to serialize station record", e))?;

    if let Value::Object(map) = &mut value {
        map.insert("powerTier".to_string(), json!(row.station.power_tier()));
        if let Some(miles) = row.distance_miles {
            map.insert("distanceMiles".to_string(), json!(miles));
        }
    }

    Ok(value)
}

/// CSV listing with one row per station
pub fn render_csv(rows: &[ReportRow<'_>]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "id",
        "call_sign",
        "frequency",
        "power_kw",
        "power_tier",
        "city",
        "state",
        "operator",
        "lat",
        "lon",
        "distance_miles",
    ])?;

    for row in rows {
        let station = row.station;
        writer.write_record([
            station.id.clone(),
            station.call_sign.clone(),
            station.frequency.clone(),
            station.power.to_string(),
            station.power_tier().to_string(),
            station.city.clone(),
            station.state.clone(),
            station.operator.clone(),
            station.lat.to_string(),
            station.lon.to_string(),
            row.distance_miles
                .map(|miles| format!("{:.3}", miles))
                .unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::io("Failed to flush CSV report", e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::data_validation(format!("CSV report is not valid UTF-8: {}", e)))
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let head: String = value.chars().take(width - 3).collect();
        head + "..."
    } else {
        value.to_string()
    }
}
