use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::event::Impact;

/// Urgency band of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => f.write_str("high"),
            Self::Medium => f.write_str("medium"),
            Self::Low => f.write_str("low"),
        }
    }
}

/// A prioritized, budget-bounded action plan for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub id: String,
    /// The event this responds to. Non-owning reference.
    pub event_id: String,
    pub action: String,
    /// Never above the configured budget.
    pub estimated_cost: f64,
    /// Hours.
    pub estimated_time: f64,
    /// Copied from the event at generation time.
    pub confidence: f64,
    pub priority: Priority,
    pub category: String,
    pub timestamp: DateTime<Utc>,
    /// Ordered action steps.
    pub details: Vec<String>,
    pub impact: Impact,
}
