use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Bounds and seeding for the base cost/time draws.
///
/// The defaults give a base cost in `(0, 0.4 × max_budget]` and 1 to 48
/// hours. Overrides may widen either range; the generator still clamps the
/// final cost to the budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConfig {
    /// Fixed seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Base cost is drawn from `(0, budget_share × max_budget]`.
    pub base_cost_budget_share: f64,
    pub min_base_hours: u32,
    pub max_base_hours: u32,
}

impl EstimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_cost_budget_share.is_finite()
            || self.base_cost_budget_share <= 0.0
            || self.base_cost_budget_share > 1.0
        {
            return Err(ConfigError::InvalidValue {
                field: "estimation.base_cost_budget_share".into(),
                message: format!("must be within (0, 1], got {}", self.base_cost_budget_share),
            });
        }
        if self.min_base_hours == 0 || self.min_base_hours > self.max_base_hours {
            return Err(ConfigError::InvalidValue {
                field: "estimation.min_base_hours".into(),
                message: format!(
                    "need 1 <= min_base_hours <= max_base_hours, got {}..={}",
                    self.min_base_hours, self.max_base_hours
                ),
            });
        }
        Ok(())
    }
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            base_cost_budget_share: defaults::DEFAULT_BASE_COST_BUDGET_SHARE,
            min_base_hours: defaults::DEFAULT_MIN_BASE_HOURS,
            max_base_hours: defaults::DEFAULT_MAX_BASE_HOURS,
        }
    }
}
