// Sub-modules
mod core;
mod loader;
mod scoring;
mod thresholds;

// Re-export core configuration types
pub use core::{default_terminal_statuses, FlowConfig};

// Re-export threshold types
pub use thresholds::{default_min_population, default_stuck_threshold_days, ThresholdsConfig};

// Re-export scoring types
pub use scoring::{
    default_metric_mappings, default_mapping_weight, MetricMapping, ScoreScale, ScoringConfig,
};

// Re-export loader functions
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
