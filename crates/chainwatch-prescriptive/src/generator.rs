//! RecommendationGenerator: one event in, at most one recommendation out.

use chainwatch_core::config::{EstimationConfig, OptimizationConfig};
use chainwatch_core::errors::ChainwatchResult;
use chainwatch_core::models::{Event, Recommendation};
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Builder;

use crate::estimate::{EstimateBounds, EstimateSource, SeededEstimator};
use crate::objective;
use crate::playbooks::Playbook;
use crate::priority;

/// Builds recommendations from events using an injected estimate source.
pub struct RecommendationGenerator<S: EstimateSource = SeededEstimator> {
    source: S,
    estimation: EstimationConfig,
}

impl RecommendationGenerator<SeededEstimator> {
    /// Generator seeded from `estimation.seed`, or from entropy when unset.
    pub fn from_config(estimation: EstimationConfig) -> ChainwatchResult<Self> {
        estimation.validate()?;
        let source = SeededEstimator::from_config(&estimation);
        Ok(Self { source, estimation })
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            source: SeededEstimator::from_seed(seed),
            estimation: EstimationConfig::default(),
        }
    }
}

impl<S: EstimateSource> RecommendationGenerator<S> {
    pub fn new(source: S, estimation: EstimationConfig) -> ChainwatchResult<Self> {
        estimation.validate()?;
        Ok(Self { source, estimation })
    }

    pub fn estimation(&self) -> &EstimationConfig {
        &self.estimation
    }

    /// Generate at the current time.
    pub fn generate(
        &mut self,
        event: &Event,
        config: &OptimizationConfig,
    ) -> ChainwatchResult<Option<Recommendation>> {
        self.generate_at(event, config, Utc::now())
    }

    /// Generate with a caller-supplied timestamp.
    ///
    /// Returns `Ok(None)` when the event's confidence is below the threshold.
    /// Nothing is drawn from the source in that case.
    pub fn generate_at(
        &mut self,
        event: &Event,
        config: &OptimizationConfig,
        now: DateTime<Utc>,
    ) -> ChainwatchResult<Option<Recommendation>> {
        event.validate()?;
        config.validate()?;

        if event.confidence < config.confidence_threshold {
            debug!(
                event_id = %event.id,
                confidence = event.confidence,
                threshold = config.confidence_threshold,
                "event below confidence threshold"
            );
            return Ok(None);
        }

        let base = EstimateBounds::new(&self.estimation, config.max_budget).draw(&mut self.source);
        let factors = objective::factors(config.objective);
        let estimated_cost = (base.cost * factors.cost).min(config.max_budget);
        let estimated_time = base.hours * factors.time;

        let category = event.category().to_string();
        let playbook = Playbook::select(&category);
        let priority = priority::classify(event.confidence, event.effective_intensity());
        let id = Builder::from_random_bytes(self.source.next_id_bytes())
            .into_uuid()
            .to_string();

        debug!(
            event_id = %event.id,
            %playbook,
            %priority,
            estimated_cost,
            estimated_time,
            "recommendation generated"
        );

        Ok(Some(Recommendation {
            id,
            event_id: event.id.clone(),
            action: objective::action(config.objective, &category),
            estimated_cost,
            estimated_time,
            confidence: event.confidence,
            priority,
            category,
            timestamp: now,
            details: playbook.details(),
            impact: event.effective_impact(),
        }))
    }
}
