//! Scorecard assembly
//!
//! The scorecard is the persisted output of one analysis request. The
//! engine only constructs it; persistence belongs to the storage
//! collaborator. Identical inputs produce an identical scorecard apart
//! from the caller-supplied creation timestamp.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::dimension_scorer::DimensionScorer;
use crate::analysis::TimeWindow;
use crate::core::{Scope, Scorecard};

pub fn build_scorecard(
    scope: Scope,
    scope_id: impl Into<String>,
    window: &TimeWindow,
    metrics: BTreeMap<String, f64>,
    scorer: &DimensionScorer,
    created_at: DateTime<Utc>,
) -> Scorecard {
    let scores = scorer.score(&metrics);

    Scorecard {
        scope,
        scope_id: scope_id.into(),
        window_start: window.start,
        window_end: window.end,
        overall_score: scores.overall,
        dimension_scores: scores.by_dimension,
        metrics,
        created_at,
    }
}
