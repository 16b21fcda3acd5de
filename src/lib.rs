// Export modules for library usage
pub mod analysis;
pub mod config;
pub mod core;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Dimension, Error, IssueFlowRecord, PICommitmentRecord, PIWindowConfig, RawFlag, Result, Scope,
    Scorecard, Stage, StageStatistics, StuckItem,
};

pub use crate::analysis::{
    flow_efficiency, lead_time_statistics, pi_containing, planning_accuracy, rank_bottlenecks,
    resolve, statistics_for, stuck_items, wip_ratio, AnalysisOptions, BottleneckEntry,
    FilteredPopulation, FlowAnalysis, FlowAnalyzer, LeadTimeStats, PlanningSummary, ScopeSelector,
    StagePopulation, TimeWindow, WindowSelector,
};

pub use crate::config::{FlowConfig, MetricMapping, ScoreScale, ScoringConfig, ThresholdsConfig};

pub use crate::scoring::{build_scorecard, DimensionScorer, DimensionScores};
