//! Record deduplication for the Canadian exports
//!
//! Both schema variants funnel their rows through a [`RecordAccumulator`]
//! owned by a single parse call. The policy decides what happens when a row
//! maps to an `id` that is already held.

use crate::app::models::StationRecord;
use std::collections::HashMap;
use tracing::trace;

/// Conflict resolution between two records with the same `id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupPolicy {
    /// Keep the record with strictly greater power; ties keep the first
    KeepStrongest,
    /// Keep the first record seen
    KeepFirst,
}

/// What happened to a record offered to the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupOutcome {
    /// First record with this id
    Inserted,
    /// Replaced the held record, which is dropped
    Replaced,
    /// Dropped in favor of the held record
    Discarded,
}

/// Id-keyed accumulator that preserves first-seen order
///
/// A replacing record takes over the slot of the record it replaces, so the
/// output order is fully determined by the input.
#[derive(Debug, Clone)]
pub struct RecordAccumulator {
    policy: DedupPolicy,
    index: HashMap<String, usize>,
    records: Vec<StationRecord>,
}

impl RecordAccumulator {
    pub fn new(policy: DedupPolicy) -> Self {
        Self {
            policy,
            index: HashMap::new(),
            records: Vec::new(),
        }
    }

    /// Offer a record, resolving any conflict with the configured policy
    pub fn offer(&mut self, record: StationRecord) -> DedupOutcome {
        match self.index.get(&record.id) {
            None => {
                self.index.insert(record.id.clone(), self.records.len());
                self.records.push(record);
                DedupOutcome::Inserted
            }
            Some(&slot) => {
                let held = &self.records[slot];
                let replace = match self.policy {
                    DedupPolicy::KeepStrongest => record.power > held.power,
                    DedupPolicy::KeepFirst => false,
                };

                if replace {
                    trace!(
                        "Replacing {} ({} kW) with {} ({} kW)",
                        held.call_sign, held.power, record.call_sign, record.power
                    );
                    self.records[slot] = record;
                    DedupOutcome::Replaced
                } else {
                    DedupOutcome::Discarded
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the accumulator, yielding records in first-seen id order
    pub fn into_records(self) -> Vec<StationRecord> {
        self.records
    }
}
