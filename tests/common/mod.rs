// Test utility module for flowhealth integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::BTreeMap;

use flowhealth::{
    FilteredPopulation, FlowConfig, IssueFlowRecord, PICommitmentRecord, PIWindowConfig, RawFlag,
    ScopeSelector, Stage, TimeWindow,
};

/// Builder for issue-flow fixtures
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: IssueFlowRecord,
}

impl RecordBuilder {
    pub fn new(issue_key: &str) -> Self {
        Self {
            record: IssueFlowRecord {
                issue_key: issue_key.to_string(),
                art: "SAART".to_string(),
                team: "Falcons".to_string(),
                pi: "26Q1".to_string(),
                status: "In Progress".to_string(),
                resolved_date: None,
                durations: BTreeMap::new(),
                total_leadtime: 0.0,
            },
        }
    }

    pub fn art(mut self, art: &str) -> Self {
        self.record.art = art.to_string();
        self
    }

    pub fn team(mut self, team: &str) -> Self {
        self.record.team = team.to_string();
        self
    }

    pub fn pi(mut self, pi: &str) -> Self {
        self.record.pi = pi.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.record.status = status.to_string();
        self
    }

    pub fn resolved(mut self, y: i32, m: u32, d: u32) -> Self {
        self.record.resolved_date = NaiveDate::from_ymd_opt(y, m, d);
        self
    }

    pub fn stage(mut self, stage: Stage, days: f64) -> Self {
        self.record.durations.insert(stage, days);
        self.record.total_leadtime = self.record.durations.values().sum();
        self
    }

    pub fn build(self) -> IssueFlowRecord {
        self.record
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 26Q1 reporting window, half-open
pub fn q1_window() -> TimeWindow {
    TimeWindow::new(date(2026, 1, 1), date(2026, 4, 1))
}

pub fn q1_pi_table() -> Vec<PIWindowConfig> {
    vec![
        PIWindowConfig {
            name: "25Q4".to_string(),
            start_date: date(2025, 10, 1),
            end_date: date(2025, 12, 31),
        },
        PIWindowConfig {
            name: "26Q1".to_string(),
            start_date: date(2026, 1, 1),
            end_date: date(2026, 3, 31),
        },
    ]
}

pub fn population(records: Vec<IssueFlowRecord>) -> FilteredPopulation {
    FilteredPopulation::build(records, &ScopeSelector::default(), &q1_window())
        .expect("valid fixture records")
}

pub fn config_with_pi_table() -> FlowConfig {
    FlowConfig {
        pi_windows: q1_pi_table(),
        ..Default::default()
    }
}

/// Commitment fixture with integer-typed flags
pub fn commitment(issue_key: &str, committed: i64, delivery: RawFlag) -> PICommitmentRecord {
    PICommitmentRecord {
        issue_key: issue_key.to_string(),
        art: "SAART".to_string(),
        team: "Falcons".to_string(),
        pi: "26Q1".to_string(),
        planned_committed: RawFlag::Int(committed),
        planned_uncommitted: RawFlag::Int(1 - committed),
        plc_delivery: delivery,
    }
}
