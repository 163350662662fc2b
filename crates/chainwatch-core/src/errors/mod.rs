//! Error hierarchy. One enum per subsystem, unified under [`ChainwatchError`].

pub mod config_error;
pub mod error_code;
pub mod event_error;
pub mod ingest_error;
pub mod ledger_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use event_error::EventError;
pub use ingest_error::IngestError;
pub use ledger_error::LedgerError;

/// Top-level error for every fallible Chainwatch operation.
#[derive(Debug, thiserror::Error)]
pub enum ChainwatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ErrorCode for ChainwatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Event(e) => e.error_code(),
            Self::Ingest(e) => e.error_code(),
            Self::Ledger(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Result alias used across the workspace.
pub type ChainwatchResult<T> = Result<T, ChainwatchError>;
