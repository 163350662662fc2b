use super::error_code::{self, ErrorCode};

/// Shape violations found while ingesting raw location records.
///
/// These cover structure only. Field values the validator judges
/// (unparseable coordinates, blank names, negative stock) are not errors here.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("record {index} is missing its id")]
    MissingId { index: usize },

    #[error("record {record_id}: field {field} must be {expected}")]
    WrongType {
        record_id: String,
        field: String,
        expected: String,
    },

    #[error("record {record_id}: cannot tell a store from a distribution center ({reason})")]
    AmbiguousKind { record_id: String, reason: String },
}

impl ErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        error_code::INGEST_ERROR
    }
}
