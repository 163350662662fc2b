//! # chainwatch-prescriptive
//!
//! Turns disruption events into prioritized, budget-bounded recommendations
//! and keeps at most one active recommendation per event.
//!
//! ## Pipeline (per event)
//! 1. Boundary check of the event and the optimization config
//! 2. Confidence gate (below threshold: no recommendation, no draws)
//! 3. Base cost/time drawn from an injected [`EstimateSource`]
//! 4. Playbook selected by event type
//! 5. Objective multipliers, then the budget clamp
//! 6. Priority from confidence and intensity

pub mod engine;
pub mod estimate;
pub mod generator;
pub mod ledger;
pub mod objective;
pub mod playbooks;
pub mod priority;

pub use engine::{PrescriptiveEngine, ResponseOutcome};
pub use estimate::{EstimateBounds, EstimateSource, FixedEstimator, SeededEstimator};
pub use generator::RecommendationGenerator;
pub use ledger::{LedgerStats, RecommendationLedger};
pub use playbooks::Playbook;
