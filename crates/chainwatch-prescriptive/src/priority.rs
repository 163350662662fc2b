//! Priority banding from confidence and intensity.

use chainwatch_core::models::Priority;

const HIGH_CONFIDENCE: f64 = 0.9;
const HIGH_INTENSITY: u8 = 7;
const LOW_CONFIDENCE: f64 = 0.7;
const LOW_INTENSITY: u8 = 4;

/// High needs both strict upper bounds; either lower bound alone gives low.
pub fn classify(confidence: f64, intensity: u8) -> Priority {
    if confidence > HIGH_CONFIDENCE && intensity > HIGH_INTENSITY {
        Priority::High
    } else if confidence < LOW_CONFIDENCE || intensity < LOW_INTENSITY {
        Priority::Low
    } else {
        Priority::Medium
    }
}
