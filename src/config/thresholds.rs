use serde::{Deserialize, Serialize};

/// Thresholds governing stuck-item detection and population selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Days in a stage beyond which an item counts as stuck
    #[serde(default = "default_stuck_threshold_days")]
    pub stuck_threshold_days: f64,

    /// Whether terminal-status records are included in stage statistics
    #[serde(default)]
    pub include_completed: bool,

    /// Populations smaller than this produce a small-sample warning
    #[serde(default = "default_min_population")]
    pub min_population: usize,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            stuck_threshold_days: default_stuck_threshold_days(),
            include_completed: false,
            min_population: default_min_population(),
        }
    }
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.stuck_threshold_days.is_nan() || self.stuck_threshold_days < 0.0 {
            return Err(format!(
                "stuck_threshold_days must be non-negative, got {}",
                self.stuck_threshold_days
            ));
        }
        Ok(())
    }
}

pub fn default_stuck_threshold_days() -> f64 {
    30.0
}
pub fn default_min_population() -> usize {
    5
}
