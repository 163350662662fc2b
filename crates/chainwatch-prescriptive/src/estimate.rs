//! Base cost/time estimation.
//!
//! The generator never touches a global RNG. It pulls every random value
//! from an [`EstimateSource`], so a seeded source reproduces a run exactly,
//! recommendation ids included.

use chainwatch_core::config::EstimationConfig;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Supplier of the random draws behind a recommendation.
pub trait EstimateSource: Send {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Whole hours in `[min, max]`.
    fn next_hours(&mut self, min: u32, max: u32) -> u32;

    /// Raw bytes for the recommendation id.
    fn next_id_bytes(&mut self) -> [u8; 16];
}

/// `StdRng`-backed source. Equal seeds give equal draw sequences.
pub struct SeededEstimator {
    rng: StdRng,
}

impl SeededEstimator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when the config carries a seed, entropy otherwise.
    pub fn from_config(config: &EstimationConfig) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl EstimateSource for SeededEstimator {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_hours(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn next_id_bytes(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }
}

/// Constant draws, for callers that need exact figures.
///
/// Ids stay unique: each draw encodes an incrementing counter.
#[derive(Debug, Clone)]
pub struct FixedEstimator {
    unit: f64,
    hours: u32,
    counter: u64,
}

impl FixedEstimator {
    /// `unit` is clamped into `[0, 1)`.
    pub fn new(unit: f64, hours: u32) -> Self {
        let unit = if unit.is_finite() {
            unit.clamp(0.0, 1.0 - f64::EPSILON)
        } else {
            0.0
        };
        Self {
            unit,
            hours,
            counter: 0,
        }
    }
}

impl EstimateSource for FixedEstimator {
    fn next_unit(&mut self) -> f64 {
        self.unit
    }

    fn next_hours(&mut self, min: u32, max: u32) -> u32 {
        self.hours.clamp(min, max.max(min))
    }

    fn next_id_bytes(&mut self) -> [u8; 16] {
        self.counter += 1;
        let mut bytes = [0u8; 16];
        bytes[8..].copy_from_slice(&self.counter.to_be_bytes());
        bytes
    }
}

/// Ranges the base draws fall into for one budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateBounds {
    /// Base cost lies in `(0, cost_ceiling]`.
    pub cost_ceiling: f64,
    pub min_hours: u32,
    pub max_hours: u32,
}

/// Unadjusted cost and time, before objective multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseEstimate {
    pub cost: f64,
    pub hours: f64,
}

impl EstimateBounds {
    pub fn new(config: &EstimationConfig, max_budget: f64) -> Self {
        Self {
            cost_ceiling: config.base_cost_budget_share * max_budget,
            min_hours: config.min_base_hours,
            max_hours: config.max_base_hours,
        }
    }

    /// Draw cost first, then time.
    pub fn draw<S: EstimateSource + ?Sized>(&self, source: &mut S) -> BaseEstimate {
        // 1 - [0, 1) keeps the cost strictly positive.
        let cost = self.cost_ceiling * (1.0 - source.next_unit());
        let hours = source.next_hours(self.min_hours, self.max_hours);
        BaseEstimate {
            cost,
            hours: f64::from(hours),
        }
    }
}
