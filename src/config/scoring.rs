//! Scoring configuration for health dimension mapping
//!
//! The metric-to-dimension wiring is data, not code: each mapping entry
//! names a metric, the dimension it feeds, a weight, and the scale that
//! turns the raw value into a 0-100 score. New metrics are wired in by
//! adding table entries, never by touching the scoring algorithm.

use serde::{Deserialize, Serialize};

use crate::core::Dimension;

/// Dimension scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Metric-to-dimension mapping table
    #[serde(default = "default_metric_mappings")]
    pub mappings: Vec<MetricMapping>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mappings: default_metric_mappings(),
        }
    }
}

impl ScoringConfig {
    /// Validate that every mapping carries a usable weight and scale
    pub fn validate(&self) -> Result<(), String> {
        for mapping in &self.mappings {
            if !mapping.weight.is_finite() || mapping.weight <= 0.0 {
                return Err(format!(
                    "mapping for metric '{}' has invalid weight {}",
                    mapping.metric, mapping.weight
                ));
            }
            mapping.scale.validate(&mapping.metric)?;
        }
        Ok(())
    }
}

/// One row of the metric-to-dimension table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricMapping {
    /// Metric name as it appears in the computed metrics map
    pub metric: String,

    /// Health dimension this metric feeds
    pub dimension: Dimension,

    /// Relative weight within the dimension
    #[serde(default = "default_mapping_weight")]
    pub weight: f64,

    /// How the raw value becomes a 0-100 score
    #[serde(default)]
    pub scale: ScoreScale,
}

/// Raw-value to score transformation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreScale {
    /// Value is already a percentage; clamp to [0, 100]
    #[default]
    Percentage,
    /// Higher is better: score = value / target * 100
    TargetHigh { target: f64 },
    /// Lower is better: score = (1 - value / ceiling) * 100
    TargetLow { ceiling: f64 },
}

impl ScoreScale {
    /// Map a raw metric value to a score in [0, 100]
    pub fn apply(&self, value: f64) -> f64 {
        let score = match self {
            ScoreScale::Percentage => value,
            ScoreScale::TargetHigh { target } => {
                if *target > 0.0 {
                    value / target * 100.0
                } else {
                    0.0
                }
            }
            ScoreScale::TargetLow { ceiling } => {
                if *ceiling > 0.0 {
                    (1.0 - value / ceiling) * 100.0
                } else {
                    0.0
                }
            }
        };
        score.clamp(0.0, 100.0)
    }

    fn validate(&self, metric: &str) -> Result<(), String> {
        match self {
            ScoreScale::Percentage => Ok(()),
            ScoreScale::TargetHigh { target } if *target > 0.0 && target.is_finite() => Ok(()),
            ScoreScale::TargetLow { ceiling } if *ceiling > 0.0 && ceiling.is_finite() => Ok(()),
            _ => Err(format!("mapping for metric '{metric}' has a non-positive scale anchor")),
        }
    }
}

pub fn default_mapping_weight() -> f64 {
    1.0
}

/// Default wiring: flow efficiency and WIP ratio feed flow, PI
/// predictability feeds predictability, defect escape rate feeds quality,
/// team stability feeds stability, lead time feeds efficiency.
pub fn default_metric_mappings() -> Vec<MetricMapping> {
    vec![
        MetricMapping {
            metric: "flow_efficiency".to_string(),
            dimension: Dimension::Flow,
            weight: 0.6,
            scale: ScoreScale::Percentage,
        },
        MetricMapping {
            metric: "wip_ratio".to_string(),
            dimension: Dimension::Flow,
            weight: 0.4,
            scale: ScoreScale::TargetLow { ceiling: 3.0 },
        },
        MetricMapping {
            metric: "pi_predictability".to_string(),
            dimension: Dimension::Predictability,
            weight: 1.0,
            scale: ScoreScale::Percentage,
        },
        MetricMapping {
            metric: "defect_escape_rate".to_string(),
            dimension: Dimension::Quality,
            weight: 1.0,
            scale: ScoreScale::TargetLow { ceiling: 25.0 },
        },
        MetricMapping {
            metric: "team_stability".to_string(),
            dimension: Dimension::Stability,
            weight: 1.0,
            scale: ScoreScale::Percentage,
        },
        MetricMapping {
            metric: "avg_lead_time".to_string(),
            dimension: Dimension::Efficiency,
            weight: 1.0,
            scale: ScoreScale::TargetLow { ceiling: 90.0 },
        },
    ]
}
