//! Tests for the id-keyed record accumulator

use crate::app::models::StationRecord;
use crate::app::services::canadian_registry::deduplication::*;

fn record(call_sign: &str, id: &str, power: f64) -> StationRecord {
    StationRecord::new(
        call_sign.to_string(),
        "540   kHz".to_string(),
        power,
        "Canada".to_string(),
        String::new(),
        "Canadian Broadcaster".to_string(),
        45.0,
        -75.0,
        id.to_string(),
    )
    .unwrap()
}

#[test]
fn test_keep_strongest_replaces_weaker() {
    let mut accumulator = RecordAccumulator::new(DedupPolicy::KeepStrongest);

    assert_eq!(accumulator.offer(record("CBW", "CBW-990", 10.0)), DedupOutcome::Inserted);
    assert_eq!(
        accumulator.offer(record("CBW-AX1", "CBW-990", 50.0)),
        DedupOutcome::Replaced
    );
    assert_eq!(accumulator.offer(record("CBW-2", "CBW-990", 20.0)), DedupOutcome::Discarded);

    let records = accumulator.into_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].call_sign, "CBW-AX1");
}

#[test]
fn test_keep_strongest_tie_keeps_first() {
    let mut accumulator = RecordAccumulator::new(DedupPolicy::KeepStrongest);
    accumulator.offer(record("CBL", "CBL-740", 50.0));

    assert_eq!(accumulator.offer(record("CBL-2", "CBL-740", 50.0)), DedupOutcome::Discarded);
    assert_eq!(accumulator.into_records()[0].call_sign, "CBL");
}

#[test]
fn test_keep_first_ignores_power() {
    let mut accumulator = RecordAccumulator::new(DedupPolicy::KeepFirst);
    accumulator.offer(record("CKNW", "CKNW-980", 1.0));

    assert_eq!(accumulator.offer(record("CKNW", "CKNW-980", 100.0)), DedupOutcome::Discarded);
    assert_eq!(accumulator.len(), 1);
    assert_eq!(accumulator.into_records()[0].power, 1.0);
}

#[test]
fn test_replacement_keeps_original_slot() {
    let mut accumulator = RecordAccumulator::new(DedupPolicy::KeepStrongest);
    assert!(accumulator.is_empty());

    accumulator.offer(record("AAA", "AAA-1", 1.0));
    accumulator.offer(record("BBB", "BBB-1", 1.0));
    accumulator.offer(record("AAA-X", "AAA-1", 5.0));
    accumulator.offer(record("CCC", "CCC-1", 1.0));

    let call_signs: Vec<String> = accumulator
        .into_records()
        .into_iter()
        .map(|r| r.call_sign)
        .collect();
    assert_eq!(call_signs, vec!["AAA-X", "BBB", "CCC"]);
}
