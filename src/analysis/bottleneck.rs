//! Bottleneck detection over per-stage statistics

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{Stage, StageStatistics};

/// Share of the score carried by the fraction of items over threshold
const EXCEED_WEIGHT: f64 = 0.6;
/// Share carried by the stage's mean relative to the slowest stage
const MEAN_WEIGHT: f64 = 0.4;

/// One stage's position in the bottleneck ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleneckEntry {
    pub stage: Stage,
    pub bottleneck_score: f64,
    pub mean_time: f64,
    pub max_time: f64,
    pub items_exceeding_threshold: usize,
}

/// Rank stages by bottleneck score, worst first.
///
/// Score = 100 * (0.6 * exceed_fraction + 0.4 * mean / max_mean), bounded
/// [0, 100] and monotone in both the exceed fraction and the mean. Empty
/// stages score 0. Ties break by higher mean, then stage name.
pub fn rank_bottlenecks(statistics: &BTreeMap<Stage, StageStatistics>) -> Vec<BottleneckEntry> {
    let max_mean = statistics
        .values()
        .map(|stats| stats.mean)
        .fold(0.0_f64, f64::max);

    let mut ranking: Vec<BottleneckEntry> = statistics
        .iter()
        .map(|(&stage, stats)| BottleneckEntry {
            stage,
            bottleneck_score: bottleneck_score(stats, max_mean),
            mean_time: stats.mean,
            max_time: stats.max,
            items_exceeding_threshold: stats.count_exceeding,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.bottleneck_score
            .partial_cmp(&a.bottleneck_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                b.mean_time
                    .partial_cmp(&a.mean_time)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
            .then(a.stage.name().cmp(b.stage.name()))
    });

    if let Some(top) = ranking.first() {
        log::debug!(
            "dominant constraint: {} (score {:.1}, mean {:.1}d)",
            top.stage,
            top.bottleneck_score,
            top.mean_time
        );
    }

    ranking
}

fn bottleneck_score(stats: &StageStatistics, max_mean: f64) -> f64 {
    if stats.count == 0 {
        return 0.0;
    }

    let exceed_fraction = stats.count_exceeding as f64 / stats.count as f64;
    let relative_mean = if max_mean > 0.0 {
        stats.mean / max_mean
    } else {
        0.0
    };

    (100.0 * (EXCEED_WEIGHT * exceed_fraction + MEAN_WEIGHT * relative_mean)).clamp(0.0, 100.0)
}
