//! Core business logic services

pub mod canadian_registry;
pub mod geodesy;
pub mod parse_stats;
pub mod station_registry;
pub mod us_registry;
