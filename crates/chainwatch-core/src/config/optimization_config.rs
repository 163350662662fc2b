use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;
use crate::errors::ConfigError;

/// The goal that shapes a recommendation's cost/time trade-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    #[default]
    MinimizeCost,
    MinimizeTime,
    MaximizeSatisfaction,
}

impl Objective {
    pub const ALL: [Objective; 3] = [
        Objective::MinimizeCost,
        Objective::MinimizeTime,
        Objective::MaximizeSatisfaction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MinimizeCost => "minimize_cost",
            Self::MinimizeTime => "minimize_time",
            Self::MaximizeSatisfaction => "maximize_satisfaction",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommendation generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct OptimizationConfig {
    pub objective: Objective,
    /// Upper clamp on estimated cost. Currency-agnostic.
    pub max_budget: f64,
    /// Events below this confidence get no recommendation.
    pub confidence_threshold: f64,
}

impl OptimizationConfig {
    pub fn new(objective: Objective, max_budget: f64, confidence_threshold: f64) -> Self {
        Self {
            objective,
            max_budget,
            confidence_threshold,
        }
    }

    /// Reject budgets and thresholds the generator cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_budget.is_finite() || self.max_budget <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "optimization.max_budget".into(),
                message: format!("must be a positive number, got {}", self.max_budget),
            });
        }
        if !self.confidence_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.confidence_threshold)
        {
            return Err(ConfigError::InvalidValue {
                field: "optimization.confidence_threshold".into(),
                message: format!("must be within [0, 1], got {}", self.confidence_threshold),
            });
        }
        Ok(())
    }

    /// Whether the budget sits inside the range the dashboard offers.
    pub fn budget_in_recommended_range(&self) -> bool {
        (defaults::RECOMMENDED_MIN_BUDGET..=defaults::RECOMMENDED_MAX_BUDGET)
            .contains(&self.max_budget)
    }
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            objective: Objective::default(),
            max_budget: defaults::DEFAULT_MAX_BUDGET,
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}
