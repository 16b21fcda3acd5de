use serde::{Deserialize, Serialize};

use super::scoring::ScoringConfig;
use super::thresholds::ThresholdsConfig;
use crate::core::PIWindowConfig;

/// Top-level flowhealth configuration, as parsed from `.flowhealth.toml`.
///
/// The engine never reads this ambiently; callers load it once and pass it
/// into the analyzer's entry points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Statuses counted as terminal, matched case-insensitively
    #[serde(default = "default_terminal_statuses")]
    pub terminal_statuses: Vec<String>,

    /// Ordered PI window table; list order is resolution order
    #[serde(default)]
    pub pi_windows: Vec<PIWindowConfig>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdsConfig::default(),
            scoring: ScoringConfig::default(),
            terminal_statuses: default_terminal_statuses(),
            pi_windows: Vec::new(),
        }
    }
}

impl FlowConfig {
    /// Whether a raw status string counts as terminal
    pub fn is_terminal(&self, status: &str) -> bool {
        let status = status.trim();
        self.terminal_statuses
            .iter()
            .any(|terminal| terminal.trim().eq_ignore_ascii_case(status))
    }
}

pub fn default_terminal_statuses() -> Vec<String> {
    vec!["Done".to_string(), "Deployed".to_string()]
}
