//! Stable error codes for the TypeScript boundary.

/// Every error enum implements this to give the presentation layer a
/// structured code string alongside the human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "EVENT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EVENT_ERROR: &str = "EVENT_ERROR";
pub const INGEST_ERROR: &str = "INGEST_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const DUPLICATE_ID: &str = "DUPLICATE_ID";
pub const LEDGER_UNAVAILABLE: &str = "LEDGER_UNAVAILABLE";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
