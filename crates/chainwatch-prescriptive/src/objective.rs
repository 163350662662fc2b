//! Objective-specific cost/time trade-offs.

use chainwatch_core::config::Objective;

/// Multipliers applied to the base estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveFactors {
    pub cost: f64,
    pub time: f64,
}

pub fn factors(objective: Objective) -> ObjectiveFactors {
    match objective {
        Objective::MinimizeCost => ObjectiveFactors { cost: 0.7, time: 1.2 },
        Objective::MinimizeTime => ObjectiveFactors { cost: 1.3, time: 0.6 },
        Objective::MaximizeSatisfaction => ObjectiveFactors { cost: 1.1, time: 0.8 },
    }
}

/// Action headline naming the objective and the event category.
pub fn action(objective: Objective, category: &str) -> String {
    match objective {
        Objective::MinimizeCost => format!("Cost-optimized solution for {category}"),
        Objective::MinimizeTime => format!("Time-critical response for {category}"),
        Objective::MaximizeSatisfaction => format!("Customer-focused solution for {category}"),
    }
}
