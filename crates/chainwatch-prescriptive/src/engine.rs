//! PrescriptiveEngine: couples the generator with the ledger.
//!
//! `respond` is the automatic path: events that already hold a
//! recommendation are skipped. `regenerate` is the manual path and always
//! replaces. Both honor the confidence gate.

use std::sync::Arc;

use chainwatch_core::config::{ChainwatchConfig, OptimizationConfig};
use chainwatch_core::errors::{ChainwatchResult, ConfigError};
use chainwatch_core::models::{Event, Recommendation};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::estimate::{EstimateSource, SeededEstimator};
use crate::generator::RecommendationGenerator;
use crate::ledger::RecommendationLedger;

/// What happened to one event.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    Generated {
        recommendation: Recommendation,
        superseded: Option<Recommendation>,
    },
    /// The ledger already holds this recommendation for the event.
    AlreadyCovered { recommendation_id: String },
    BelowThreshold,
}

impl ResponseOutcome {
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Self::Generated { recommendation, .. } => Some(recommendation),
            _ => None,
        }
    }
}

pub struct PrescriptiveEngine<S: EstimateSource = SeededEstimator> {
    generator: RecommendationGenerator<S>,
    ledger: Arc<RecommendationLedger>,
    config: OptimizationConfig,
}

impl PrescriptiveEngine<SeededEstimator> {
    /// Engine with a fresh ledger, built from the full configuration.
    pub fn from_config(config: &ChainwatchConfig) -> ChainwatchResult<Self> {
        let generator = RecommendationGenerator::from_config(config.estimation.clone())?;
        Self::new(generator, config.optimization.clone())
    }
}

impl<S: EstimateSource> PrescriptiveEngine<S> {
    pub fn new(
        generator: RecommendationGenerator<S>,
        config: OptimizationConfig,
    ) -> ChainwatchResult<Self> {
        Self::with_ledger(generator, config, Arc::new(RecommendationLedger::new()))
    }

    /// Engine writing into a ledger shared with other readers.
    pub fn with_ledger(
        generator: RecommendationGenerator<S>,
        config: OptimizationConfig,
        ledger: Arc<RecommendationLedger>,
    ) -> ChainwatchResult<Self> {
        config.validate()?;
        warn_if_outside_recommended(&config);
        Ok(Self {
            generator,
            ledger,
            config,
        })
    }

    pub fn ledger(&self) -> &Arc<RecommendationLedger> {
        &self.ledger
    }

    pub fn config(&self) -> &OptimizationConfig {
        &self.config
    }

    /// Swap the optimization settings. Held recommendations are kept.
    pub fn set_config(&mut self, config: OptimizationConfig) -> Result<(), ConfigError> {
        config.validate()?;
        warn_if_outside_recommended(&config);
        info!(
            objective = %config.objective,
            max_budget = config.max_budget,
            "optimization config updated"
        );
        self.config = config;
        Ok(())
    }

    pub fn respond(&mut self, event: &Event) -> ChainwatchResult<ResponseOutcome> {
        self.respond_at(event, Utc::now())
    }

    /// Generate for an event the ledger has not seen yet.
    pub fn respond_at(
        &mut self,
        event: &Event,
        now: DateTime<Utc>,
    ) -> ChainwatchResult<ResponseOutcome> {
        event.validate()?;
        if let Some(existing) = self.ledger.get_for_event(&event.id)? {
            debug!(event_id = %event.id, recommendation_id = %existing.id, "event already covered");
            return Ok(ResponseOutcome::AlreadyCovered {
                recommendation_id: existing.id,
            });
        }
        self.generate_and_store(event, now)
    }

    pub fn regenerate(&mut self, event: &Event) -> ChainwatchResult<ResponseOutcome> {
        self.regenerate_at(event, Utc::now())
    }

    /// Generate and replace whatever the ledger holds for the event.
    /// Below the threshold the existing entry is left in place.
    pub fn regenerate_at(
        &mut self,
        event: &Event,
        now: DateTime<Utc>,
    ) -> ChainwatchResult<ResponseOutcome> {
        self.generate_and_store(event, now)
    }

    /// Run `respond` over a feed, in order.
    pub fn respond_all(&mut self, events: &[Event]) -> ChainwatchResult<Vec<ResponseOutcome>> {
        let now = Utc::now();
        events.iter().map(|e| self.respond_at(e, now)).collect()
    }

    fn generate_and_store(
        &mut self,
        event: &Event,
        now: DateTime<Utc>,
    ) -> ChainwatchResult<ResponseOutcome> {
        let Some(recommendation) = self.generator.generate_at(event, &self.config, now)? else {
            return Ok(ResponseOutcome::BelowThreshold);
        };
        let superseded = self.ledger.upsert(recommendation.clone())?;
        info!(
            event_id = %event.id,
            recommendation_id = %recommendation.id,
            priority = %recommendation.priority,
            replaced = superseded.is_some(),
            "recommendation stored"
        );
        Ok(ResponseOutcome::Generated {
            recommendation,
            superseded,
        })
    }
}

fn warn_if_outside_recommended(config: &OptimizationConfig) {
    if !config.budget_in_recommended_range() {
        warn!(
            max_budget = config.max_budget,
            "max_budget outside the recommended range"
        );
    }
}
