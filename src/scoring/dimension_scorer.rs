//! Dimension scoring driven by the configured metric-to-dimension table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{MetricMapping, ScoringConfig};
use crate::core::Dimension;

/// Scores for the five fixed dimensions plus their arithmetic mean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub overall: f64,
    pub by_dimension: BTreeMap<Dimension, f64>,
}

/// Maps raw metric values into dimension scores.
///
/// The scorer has no knowledge of individual metrics; all wiring lives in
/// the configuration table. A dimension whose mapped metrics are all absent
/// scores 0 (insufficient data), never an error.
pub struct DimensionScorer {
    mappings: Vec<MetricMapping>,
}

impl DimensionScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            mappings: config.mappings.clone(),
        }
    }

    pub fn score(&self, metrics: &BTreeMap<String, f64>) -> DimensionScores {
        let by_dimension: BTreeMap<Dimension, f64> = Dimension::ALL
            .iter()
            .map(|&dimension| (dimension, self.dimension_score(dimension, metrics)))
            .collect();

        let overall = by_dimension.values().sum::<f64>() / Dimension::ALL.len() as f64;

        DimensionScores {
            overall,
            by_dimension,
        }
    }

    /// Weighted mean of the scaled values of the metrics wired to one
    /// dimension, skipping metrics absent from the input
    fn dimension_score(&self, dimension: Dimension, metrics: &BTreeMap<String, f64>) -> f64 {
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        for mapping in self.mappings.iter().filter(|m| m.dimension == dimension) {
            if let Some(value) = metrics.get(&mapping.metric) {
                weighted_sum += mapping.scale.apply(*value) * mapping.weight;
                weight_total += mapping.weight;
            }
        }

        if weight_total == 0.0 {
            return 0.0;
        }
        (weighted_sum / weight_total).clamp(0.0, 100.0)
    }
}
