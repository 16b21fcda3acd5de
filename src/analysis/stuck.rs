//! Stuck-item matching
//!
//! Consumes the same [`StagePopulation`] the statistics were computed over,
//! so any record carrying the reported `max` is guaranteed to appear here
//! whenever the threshold allows it.

use crate::analysis::stages::StagePopulation;
use crate::core::StuckItem;

/// Every record in the population whose stage duration strictly exceeds
/// the threshold, worst first. The sort is stable: items with equal
/// durations keep their original relative order.
pub fn stuck_items(population: &StagePopulation, threshold_days: f64) -> Vec<StuckItem> {
    let mut items: Vec<StuckItem> = population
        .entries()
        .iter()
        .filter(|(_, days)| *days > threshold_days)
        .map(|(record, days)| StuckItem {
            issue_key: record.issue_key.clone(),
            art: record.art.clone(),
            team: record.team.clone(),
            pi: record.pi.clone(),
            stage: population.stage(),
            days_in_stage: *days,
            status: record.status.clone(),
        })
        .collect();

    items.sort_by(|a, b| {
        b.days_in_stage
            .partial_cmp(&a.days_in_stage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    items
}
