//! Lead-time and flow-efficiency metrics over the shared population
//!
//! Records with no activity (all-zero durations) never entered the flow
//! and are excluded from every calculation here.

use serde::{Deserialize, Serialize};

use crate::analysis::scope::FilteredPopulation;
use crate::config::FlowConfig;
use crate::core::metrics;

/// Lead-time distribution for a population
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeadTimeStats {
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
    pub max: f64,
    pub count: usize,
}

pub fn lead_time_statistics(population: &FilteredPopulation) -> LeadTimeStats {
    let lead_times: Vec<f64> = population
        .records()
        .iter()
        .filter(|record| record.has_activity() && record.total_leadtime > 0.0)
        .map(|record| record.total_leadtime)
        .collect();

    if lead_times.is_empty() {
        return LeadTimeStats::default();
    }

    LeadTimeStats {
        mean: metrics::mean(&lead_times),
        median: metrics::median(&lead_times),
        p95: metrics::percentile(&lead_times, 95.0),
        max: metrics::max_value(&lead_times),
        count: lead_times.len(),
    }
}

/// Mean share of lead time spent in active stages, as a percentage
pub fn flow_efficiency(population: &FilteredPopulation) -> f64 {
    let ratios: Vec<f64> = population
        .records()
        .iter()
        .filter(|record| record.has_activity() && record.total_leadtime > 0.0)
        .map(|record| (record.active_days() / record.total_leadtime * 100.0).clamp(0.0, 100.0))
        .collect();

    metrics::mean(&ratios)
}

/// In-flight items per terminal item; 0 when nothing has finished yet
pub fn wip_ratio(population: &FilteredPopulation, config: &FlowConfig) -> f64 {
    let (mut in_flight, mut finished) = (0usize, 0usize);
    for record in population.records() {
        if config.is_terminal(&record.status) {
            finished += 1;
        } else {
            in_flight += 1;
        }
    }

    if finished == 0 {
        return 0.0;
    }
    in_flight as f64 / finished as f64
}
