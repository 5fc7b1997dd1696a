//! Station lookup and search functionality
//!
//! This module provides the query methods the display and search layers use:
//! call sign and frequency search, nearest-station ranking, bounding box and
//! power tier filters. Every query returns records in merged order unless it
//! says otherwise.

use super::StationRegistry;
use crate::app::models::{PowerTier, StationRecord, leading_number};
use crate::app::services::geodesy::distance;
use crate::constants::FREQUENCY_SEARCH_STEP;
use serde::Serialize;

impl StationRegistry {
    /// Find stations whose call sign equals the query, ignoring case
    pub fn find_by_call_sign(&self, call_sign: &str) -> Vec<&StationRecord> {
        let call_sign = call_sign.trim();
        self.stations
            .iter()
            .filter(|station| station.call_sign.eq_ignore_ascii_case(call_sign))
            .collect()
    }

    /// Find stations on the frequency nearest to a numeric query
    ///
    /// The query is read as a number of kilohertz and rounded to the nearest
    /// multiple of 10 before comparison with the integer prefix of each
    /// record's frequency, so `"543"` finds `"540   kHz"`. A query with no
    /// leading number matches nothing.
    pub fn find_by_frequency(&self, query: &str) -> Vec<&StationRecord> {
        match search_frequency(query) {
            Some(target) => self
                .stations
                .iter()
                .filter(|station| station.frequency_khz() == Some(target))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Free-text search by call sign or frequency
    ///
    /// # Examples
    /// ```
    /// # use broadcast_registry::StationRegistry;
    /// let registry = StationRegistry::new();
    /// assert!(registry.search("wabc").is_empty());
    /// assert!(registry.search("540").is_empty());
    /// ```
    pub fn search(&self, query: &str) -> Vec<&StationRecord> {
        let call_sign = query.trim();
        let frequency = search_frequency(query);

        self.stations
            .iter()
            .filter(|station| {
                station.call_sign.eq_ignore_ascii_case(call_sign)
                    || (frequency.is_some() && station.frequency_khz() == frequency)
            })
            .collect()
    }

    /// Rank stations by great-circle distance from a point
    ///
    /// Returns at most `limit` `(record, miles)` pairs, closest first. Records
    /// whose distance is not finite are left out; ties keep merged order.
    pub fn nearest(&self, lat: f64, lon: f64, limit: usize) -> Vec<(&StationRecord, f64)> {
        let mut ranked: Vec<(&StationRecord, f64)> = self
            .stations
            .iter()
            .map(|station| (station, distance(lat, lon, station.lat, station.lon)))
            .filter(|(_, miles)| miles.is_finite())
            .collect();

        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(limit);
        ranked
    }

    /// Find stations within a geographic bounding box
    ///
    /// # Arguments
    /// * `min_lat` - Southern boundary (minimum latitude)
    /// * `max_lat` - Northern boundary (maximum latitude)
    /// * `min_lon` - Western boundary (minimum longitude)
    /// * `max_lon` - Eastern boundary (maximum longitude)
    pub fn find_stations_in_region(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Vec<&StationRecord> {
        self.stations
            .iter()
            .filter(|station| {
                station.lat >= min_lat
                    && station.lat <= max_lat
                    && station.lon >= min_lon
                    && station.lon <= max_lon
            })
            .collect()
    }

    /// Find stations in a display power tier
    pub fn find_by_power_tier(&self, tier: PowerTier) -> Vec<&StationRecord> {
        self.stations
            .iter()
            .filter(|station| station.power_tier() == tier)
            .collect()
    }

    /// Get basic statistics about the station registry
    pub fn get_statistics(&self) -> RegistryStatistics {
        let mut statistics = RegistryStatistics {
            total_stations: self.stations.len(),
            ..Default::default()
        };

        for station in &self.stations {
            match station.power_tier() {
                PowerTier::High => statistics.high_power += 1,
                PowerTier::Medium => statistics.medium_power += 1,
                PowerTier::Low => statistics.low_power += 1,
            }

            let bounds = statistics
                .geographic_bounds
                .get_or_insert(GeographicBounds {
                    min_lat: station.lat,
                    max_lat: station.lat,
                    min_lon: station.lon,
                    max_lon: station.lon,
                });
            bounds.min_lat = bounds.min_lat.min(station.lat);
            bounds.max_lat = bounds.max_lat.max(station.lat);
            bounds.min_lon = bounds.min_lon.min(station.lon);
            bounds.max_lon = bounds.max_lon.max(station.lon);
        }

        statistics
    }
}

fn search_frequency(query: &str) -> Option<i64> {
    leading_number(query)
        .filter(|value| value.is_finite())
        .map(|value| ((value / FREQUENCY_SEARCH_STEP).round() * FREQUENCY_SEARCH_STEP) as i64)
}

/// Geographic bounds of all stations in the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Basic statistics about the station registry
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistryStatistics {
    pub total_stations: usize,
    pub high_power: usize,
    pub medium_power: usize,
    pub low_power: usize,
    /// `None` for an empty registry
    pub geographic_bounds: Option<GeographicBounds>,
}

impl RegistryStatistics {
    /// Number of stations in one power tier
    pub fn tier_count(&self, tier: PowerTier) -> usize {
        match tier {
            PowerTier::High => self.high_power,
            PowerTier::Medium => self.medium_power,
            PowerTier::Low => self.low_power,
        }
    }
}
