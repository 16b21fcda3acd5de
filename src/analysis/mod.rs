//! Flow Analysis Module
//!
//! This module provides the delivery-flow analysis pipeline:
//! - Scope filtering into a single shared request population
//! - Time-window resolution against the configured PI table
//! - Per-stage duration statistics and bottleneck ranking
//! - Stuck-item matching over the same per-stage populations
//! - Planning-accuracy calculation over PI commitments
//! - Lead-time and flow-efficiency metrics

pub mod bottleneck;
pub mod leadtime;
pub mod planning;
pub mod scope;
pub mod stages;
pub mod stuck;
pub mod window;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::FlowConfig;
use crate::core::{IssueFlowRecord, PICommitmentRecord, Result, Stage, StageStatistics, StuckItem};

pub use bottleneck::{rank_bottlenecks, BottleneckEntry};
pub use leadtime::{flow_efficiency, lead_time_statistics, wip_ratio, LeadTimeStats};
pub use planning::{planning_accuracy, PlanningSummary};
pub use scope::{FilteredPopulation, ScopeSelector};
pub use stages::{statistics_for, StagePopulation};
pub use stuck::stuck_items;
pub use window::{pi_containing, resolve, TimeWindow, WindowSelector};

/// Per-request analysis options, defaulted from the configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub threshold_days: f64,
    pub include_completed: bool,
}

impl AnalysisOptions {
    pub fn from_config(config: &FlowConfig) -> Self {
        Self {
            threshold_days: config.thresholds.stuck_threshold_days,
            include_completed: config.thresholds.include_completed,
        }
    }
}

/// The engine's flow output: statistics, ranking, and the itemized list
/// explaining them, all derived from one shared population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowAnalysis {
    pub stage_statistics: BTreeMap<Stage, StageStatistics>,
    pub bottleneck_ranking: Vec<BottleneckEntry>,
    pub stuck_items: Vec<StuckItem>,
}

/// Stateless analysis engine; holds only the configuration it was given
#[derive(Debug, Clone)]
pub struct FlowAnalyzer {
    config: FlowConfig,
}

impl FlowAnalyzer {
    pub fn new(config: FlowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Build the shared working set for one request. Every downstream call
    /// takes the returned population by reference; nothing re-filters.
    pub fn filter(
        &self,
        records: impl IntoIterator<Item = IssueFlowRecord>,
        selector: &ScopeSelector,
        window: &TimeWindow,
    ) -> Result<FilteredPopulation> {
        let population = FilteredPopulation::build(records, selector, window)?;
        if population.len() < self.config.thresholds.min_population {
            log::warn!(
                "population of {} records is below the minimum of {}; statistics will be noisy",
                population.len(),
                self.config.thresholds.min_population
            );
        }
        Ok(population)
    }

    /// Resolve a window selector against this configuration's PI table
    pub fn resolve_window(
        &self,
        selector: &WindowSelector,
        today: chrono::NaiveDate,
    ) -> Result<TimeWindow> {
        window::resolve(selector, &self.config.pi_windows, today)
    }

    /// Stage statistics, bottleneck ranking, and stuck items for one
    /// population. Each stage's statistics and its stuck items come from
    /// the same [`StagePopulation`] selection, so the itemized list always
    /// agrees with the summary figures.
    pub fn analyze_flow(
        &self,
        population: &FilteredPopulation,
        options: &AnalysisOptions,
    ) -> FlowAnalysis {
        let per_stage: Vec<(Stage, StageStatistics, Vec<StuckItem>)> = Stage::ALL
            .par_iter()
            .map(|&stage| {
                let stage_population = StagePopulation::select(
                    population,
                    stage,
                    options.include_completed,
                    &self.config,
                );
                let statistics = statistics_for(&stage_population, options.threshold_days);
                let stuck = stuck_items(&stage_population, options.threshold_days);
                (stage, statistics, stuck)
            })
            .collect();

        let mut stage_statistics = BTreeMap::new();
        let mut all_stuck = Vec::new();
        for (stage, statistics, stuck) in per_stage {
            stage_statistics.insert(stage, statistics);
            all_stuck.extend(stuck);
        }
        all_stuck.sort_by(|a, b| {
            b.days_in_stage
                .partial_cmp(&a.days_in_stage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let bottleneck_ranking = rank_bottlenecks(&stage_statistics);

        FlowAnalysis {
            stage_statistics,
            bottleneck_ranking,
            stuck_items: all_stuck,
        }
    }

    /// One-shot entry point: filter once, then analyze the population
    pub fn analyze(
        &self,
        records: impl IntoIterator<Item = IssueFlowRecord>,
        selector: &ScopeSelector,
        window: &TimeWindow,
        options: &AnalysisOptions,
    ) -> Result<FlowAnalysis> {
        let population = self.filter(records, selector, window)?;
        Ok(self.analyze_flow(&population, options))
    }

    /// Delivered-vs-committed summary for one scope
    pub fn planning_accuracy(
        &self,
        records: &[PICommitmentRecord],
        selector: &ScopeSelector,
    ) -> PlanningSummary {
        planning::planning_accuracy(records, selector)
    }

    /// Assemble the metric map the dimension scorer consumes. Metrics the
    /// engine cannot derive (defect escape rate, team stability) are merged
    /// in from the caller via `extra`.
    pub fn flow_metrics(
        &self,
        population: &FilteredPopulation,
        planning: Option<&PlanningSummary>,
        extra: &BTreeMap<String, f64>,
    ) -> BTreeMap<String, f64> {
        let lead_times = lead_time_statistics(population);

        let mut metrics = BTreeMap::new();
        metrics.insert("avg_lead_time".to_string(), lead_times.mean);
        metrics.insert("median_lead_time".to_string(), lead_times.median);
        metrics.insert("p95_lead_time".to_string(), lead_times.p95);
        metrics.insert("flow_efficiency".to_string(), flow_efficiency(population));
        metrics.insert(
            "wip_ratio".to_string(),
            wip_ratio(population, &self.config),
        );
        if let Some(planning) = planning {
            metrics.insert(
                "pi_predictability".to_string(),
                planning.planning_accuracy,
            );
        }
        for (name, value) in extra {
            metrics.insert(name.clone(), *value);
        }

        metrics
    }
}
