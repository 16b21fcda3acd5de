//! Stage duration aggregation
//!
//! [`StagePopulation`] is the one place where "which records count for this
//! stage" is decided. Statistics and the stuck-item matcher both consume
//! the same selection, so a summary number and the itemized list behind it
//! can never be computed over different populations.

use crate::analysis::scope::FilteredPopulation;
use crate::config::FlowConfig;
use crate::core::{metrics, IssueFlowRecord, Stage, StageStatistics};

/// The records that actually visited one stage, with their durations.
///
/// Selection rules:
/// - a record with no duration (or a zero duration) for the stage never
///   visited it and is excluded, not counted as zero;
/// - terminal-status records are excluded unless `include_completed` is
///   set, in which case their historical stage time is valid signal.
#[derive(Debug)]
pub struct StagePopulation<'a> {
    stage: Stage,
    entries: Vec<(&'a IssueFlowRecord, f64)>,
}

impl<'a> StagePopulation<'a> {
    pub fn select(
        population: &'a FilteredPopulation,
        stage: Stage,
        include_completed: bool,
        config: &FlowConfig,
    ) -> Self {
        let entries = population
            .records()
            .iter()
            .filter(|record| include_completed || !config.is_terminal(&record.status))
            .filter_map(|record| record.duration_in(stage).map(|days| (record, days)))
            .collect();

        Self { stage, entries }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn entries(&self) -> &[(&'a IssueFlowRecord, f64)] {
        &self.entries
    }

    pub fn durations(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, days)| *days).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Duration statistics over a stage population.
///
/// An empty population yields all-zero statistics so downstream scoring can
/// render "insufficient data" instead of failing. `max` is computed from
/// the same entries as every other figure; the stuck-item matcher relies on
/// that equality.
pub fn statistics_for(population: &StagePopulation, threshold_days: f64) -> StageStatistics {
    let durations = population.durations();
    if durations.is_empty() {
        return StageStatistics::default();
    }

    StageStatistics {
        mean: metrics::mean(&durations),
        median: metrics::median(&durations),
        p95: metrics::percentile(&durations, 95.0),
        max: metrics::max_value(&durations),
        count: durations.len(),
        count_exceeding: metrics::count_exceeding(&durations, threshold_days),
    }
}
