//! Common type definitions used across the codebase

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::core::errors::{Error, Result};

/// The fixed set of delivery stages an issue moves through
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Backlog,
    Analysis,
    InProgress,
    InSit,
    InUat,
    ReadyForRelease,
}

impl Stage {
    /// All stages in pipeline order
    pub const ALL: [Stage; 6] = [
        Stage::Backlog,
        Stage::Analysis,
        Stage::InProgress,
        Stage::InSit,
        Stage::InUat,
        Stage::ReadyForRelease,
    ];

    /// Canonical (snake_case) name for this stage
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Backlog => "backlog",
            Stage::Analysis => "analysis",
            Stage::InProgress => "in_progress",
            Stage::InSit => "in_sit",
            Stage::InUat => "in_uat",
            Stage::ReadyForRelease => "ready_for_release",
        }
    }

    /// Get the display name for this stage
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Backlog => "Backlog",
            Stage::Analysis => "Analysis",
            Stage::InProgress => "In Progress",
            Stage::InSit => "In SIT",
            Stage::InUat => "In UAT",
            Stage::ReadyForRelease => "Ready for Release",
        }
    }

    /// Whether time spent in this stage counts as active work
    /// (queue stages ahead of development do not)
    pub fn is_active(&self) -> bool {
        !matches!(self, Stage::Backlog | Stage::Analysis)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Stage::ALL
            .iter()
            .copied()
            .find(|stage| stage.name() == s.trim())
            .ok_or_else(|| Error::validation(format!("unknown stage name '{s}'")))
    }
}

/// Boolean-like flag as it arrives from the tracking source.
///
/// Upstream exports are not consistently typed: the same field may carry
/// integer `1`/`0`, string `"1"`/`"0"`, a real boolean, or nothing at all.
/// [`RawFlag::is_set`] is the single normalization point; no other code
/// compares flag representations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    #[default]
    Absent,
}

impl RawFlag {
    /// A flag is set iff its trimmed textual form is `"1"` or its numeric
    /// value equals 1 (or it is a genuine `true`). Everything else,
    /// including `"no"`, `"0"`, and absent values, is unset.
    pub fn is_set(&self) -> bool {
        match self {
            RawFlag::Int(n) => *n == 1,
            RawFlag::Float(x) => *x == 1.0,
            RawFlag::Bool(b) => *b,
            RawFlag::Text(s) => s.trim() == "1",
            RawFlag::Absent => false,
        }
    }
}

/// One delivery item's stage-by-stage timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueFlowRecord {
    pub issue_key: String,
    pub art: String,
    pub team: String,
    pub pi: String,
    pub status: String,
    #[serde(default)]
    pub resolved_date: Option<NaiveDate>,
    /// Days spent per stage; absent stages were never visited
    #[serde(default)]
    pub durations: BTreeMap<Stage, f64>,
    #[serde(default)]
    pub total_leadtime: f64,
}

impl IssueFlowRecord {
    /// Duration for a stage, or `None` when the issue never visited it.
    /// A recorded zero counts as "never visited", not as a zero-day stay.
    pub fn duration_in(&self, stage: Stage) -> Option<f64> {
        match self.durations.get(&stage) {
            Some(days) if *days > 0.0 => Some(*days),
            _ => None,
        }
    }

    /// Whether the issue spent time in any stage at all
    pub fn has_activity(&self) -> bool {
        self.durations.values().any(|days| *days > 0.0)
    }

    /// Days spent in active (post-queue) stages
    pub fn active_days(&self) -> f64 {
        self.durations
            .iter()
            .filter(|(stage, _)| stage.is_active())
            .map(|(_, days)| *days)
            .sum()
    }

    /// Reject malformed records before they enter a working set
    pub fn validate(&self) -> Result<()> {
        for (stage, days) in &self.durations {
            if days.is_nan() || *days < 0.0 {
                return Err(Error::validation(format!(
                    "issue {}: invalid duration {} for stage {}",
                    self.issue_key, days, stage
                )));
            }
        }
        if self.total_leadtime.is_nan() || self.total_leadtime < 0.0 {
            return Err(Error::validation(format!(
                "issue {}: invalid total leadtime {}",
                self.issue_key, self.total_leadtime
            )));
        }
        Ok(())
    }
}

/// A named program increment with an inclusive calendar range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PIWindowConfig {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl PIWindowConfig {
    /// Inclusive containment check
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// One issue's planning status within a PI
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PICommitmentRecord {
    #[serde(default)]
    pub issue_key: String,
    #[serde(default)]
    pub art: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub pi: String,
    #[serde(default)]
    pub planned_committed: RawFlag,
    #[serde(default)]
    pub planned_uncommitted: RawFlag,
    #[serde(default)]
    pub plc_delivery: RawFlag,
}

/// Per-stage duration statistics, recomputed on every analysis request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StageStatistics {
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
    pub max: f64,
    pub count: usize,
    pub count_exceeding: usize,
}

/// An individual issue whose stage duration exceeds the threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StuckItem {
    pub issue_key: String,
    pub art: String,
    pub team: String,
    pub pi: String,
    pub stage: Stage,
    pub days_in_stage: f64,
    pub status: String,
}

/// The five health dimensions of a scorecard
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Flow,
    Predictability,
    Quality,
    Stability,
    Efficiency,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Flow,
        Dimension::Predictability,
        Dimension::Quality,
        Dimension::Stability,
        Dimension::Efficiency,
    ];

    /// Get the display name for this dimension
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Flow => "Flow",
            Dimension::Predictability => "Predictability",
            Dimension::Quality => "Quality",
            Dimension::Stability => "Stability",
            Dimension::Efficiency => "Efficiency",
        }
    }
}

/// Organizational level a scorecard was computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Portfolio,
    Art,
    Team,
}

/// The persisted analysis output, immutable after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub scope: Scope,
    pub scope_id: String,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub overall_score: f64,
    pub dimension_scores: BTreeMap<Dimension, f64>,
    pub metrics: BTreeMap<String, f64>,
    pub created_at: DateTime<Utc>,
}
