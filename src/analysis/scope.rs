//! Scope filtering and the shared request population
//!
//! Filtering happens exactly once per analysis request. Every downstream
//! component receives the same [`FilteredPopulation`] by reference, so two
//! components can never disagree about which records a report describes.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::window::TimeWindow;
use crate::core::{IssueFlowRecord, PICommitmentRecord, Result};

/// ART / team / PI selection. An empty axis means "no filter on that axis".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSelector {
    #[serde(default)]
    pub arts: Vec<String>,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub pis: Vec<String>,
}

impl ScopeSelector {
    pub fn for_art(art: impl Into<String>) -> Self {
        Self {
            arts: vec![art.into()],
            ..Default::default()
        }
    }

    pub fn for_team(team: impl Into<String>) -> Self {
        Self {
            teams: vec![team.into()],
            ..Default::default()
        }
    }

    pub fn with_pi(mut self, pi: impl Into<String>) -> Self {
        self.pis.push(pi.into());
        self
    }

    /// Case-folded, whitespace-trimmed membership test
    fn axis_matches(selectors: &[String], value: &str) -> bool {
        if selectors.is_empty() {
            return true;
        }
        let value = value.trim().to_lowercase();
        selectors
            .iter()
            .any(|candidate| candidate.trim().to_lowercase() == value)
    }

    pub fn matches(&self, record: &IssueFlowRecord) -> bool {
        Self::axis_matches(&self.arts, &record.art)
            && Self::axis_matches(&self.teams, &record.team)
            && Self::axis_matches(&self.pis, &record.pi)
    }

    pub fn matches_commitment(&self, record: &PICommitmentRecord) -> bool {
        Self::axis_matches(&self.arts, &record.art)
            && Self::axis_matches(&self.teams, &record.team)
            && Self::axis_matches(&self.pis, &record.pi)
    }
}

/// The scope- and window-filtered working set of one analysis request.
///
/// Built once, immutable afterwards; the selector and window it was built
/// with travel along so results can always be traced back to their filter.
#[derive(Debug, Clone)]
pub struct FilteredPopulation {
    records: Vector<IssueFlowRecord>,
    selector: ScopeSelector,
    window: TimeWindow,
}

impl FilteredPopulation {
    /// Validate and filter the raw record collection.
    ///
    /// Malformed records (negative or NaN durations) fail the whole build;
    /// corrupt input must never leak into statistics. A record with no
    /// resolved date is still in flight and always counts as in-window.
    pub fn build(
        records: impl IntoIterator<Item = IssueFlowRecord>,
        selector: &ScopeSelector,
        window: &TimeWindow,
    ) -> Result<Self> {
        let mut kept = Vector::new();
        let mut seen = 0usize;

        for record in records {
            seen += 1;
            record.validate()?;
            if !selector.matches(&record) {
                continue;
            }
            let in_window = match record.resolved_date {
                Some(date) => window.contains(date),
                None => true,
            };
            if in_window {
                kept.push_back(record);
            }
        }

        log::debug!("scope filter kept {} of {} records", kept.len(), seen);

        Ok(Self {
            records: kept,
            selector: selector.clone(),
            window: *window,
        })
    }

    pub fn records(&self) -> &Vector<IssueFlowRecord> {
        &self.records
    }

    pub fn selector(&self) -> &ScopeSelector {
        &self.selector
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
