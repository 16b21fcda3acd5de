//! Planning-accuracy calculation over PI commitment records

use serde::{Deserialize, Serialize};

use crate::analysis::scope::ScopeSelector;
use crate::core::PICommitmentRecord;

/// Delivered-vs-committed summary for one scope and PI
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanningSummary {
    pub committed_count: usize,
    pub uncommitted_count: usize,
    pub delivered_count: usize,
    pub planning_accuracy: f64,
}

/// Partition commitments and compute the accuracy percentage.
///
/// An item is committed iff `planned_committed` normalizes to set;
/// otherwise it may be uncommitted. An item is never counted in both
/// partitions. Zero committed items yield 0.0, not a division error.
pub fn planning_accuracy(
    records: &[PICommitmentRecord],
    selector: &ScopeSelector,
) -> PlanningSummary {
    let mut committed_count = 0usize;
    let mut uncommitted_count = 0usize;
    let mut delivered_count = 0usize;

    for record in records
        .iter()
        .filter(|record| selector.matches_commitment(record))
    {
        if record.planned_committed.is_set() {
            committed_count += 1;
            if record.plc_delivery.is_set() {
                delivered_count += 1;
            }
        } else if record.planned_uncommitted.is_set() {
            uncommitted_count += 1;
        }
    }

    let planning_accuracy = if committed_count == 0 {
        0.0
    } else {
        delivered_count as f64 / committed_count as f64 * 100.0
    };

    PlanningSummary {
        committed_count,
        uncommitted_count,
        delivered_count,
        planning_accuracy,
    }
}
