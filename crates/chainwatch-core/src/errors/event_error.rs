use super::error_code::{self, ErrorCode};

/// Caller contract violations on disruption events.
///
/// Only required fields raise these. Optional fields (`type`, `intensity`,
/// `impact`) are defaulted instead.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("malformed event: {reason}")]
    Malformed { reason: String },

    #[error("event is missing its id")]
    MissingId,

    #[error("event {event_id} has confidence {confidence} outside [0, 1]")]
    ConfidenceOutOfRange { event_id: String, confidence: f64 },

    #[error("event {event_id} has intensity {intensity} outside [{min}, {max}]")]
    IntensityOutOfRange {
        event_id: String,
        intensity: u8,
        min: u8,
        max: u8,
    },
}

impl ErrorCode for EventError {
    fn error_code(&self) -> &'static str {
        error_code::EVENT_ERROR
    }
}
