use super::error_code::{self, ErrorCode};

/// Recommendation ledger errors.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Non-fatal: the caller asked for a recommendation that is not held.
    #[error("recommendation not found: {recommendation_id}")]
    NotFound { recommendation_id: String },

    /// The id is already held for a different event.
    #[error("recommendation {recommendation_id} is already held for event {held_for}, not {event_id}")]
    DuplicateId {
        recommendation_id: String,
        held_for: String,
        event_id: String,
    },

    #[error("ledger lock poisoned: {reason}")]
    LockPoisoned { reason: String },
}

impl ErrorCode for LedgerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::DuplicateId { .. } => error_code::DUPLICATE_ID,
            Self::LockPoisoned { .. } => error_code::LEDGER_UNAVAILABLE,
        }
    }
}
