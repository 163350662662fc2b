use chainwatch_core::errors::*;

#[test]
fn event_confidence_error_carries_id_and_value() {
    let err = EventError::ConfidenceOutOfRange {
        event_id: "event_7".into(),
        confidence: 1.4,
    };
    let msg = err.to_string();
    assert!(msg.contains("event_7"));
    assert!(msg.contains("1.4"));
}

#[test]
fn ledger_not_found_carries_recommendation_id() {
    let err = LedgerError::NotFound {
        recommendation_id: "rec-123".into(),
    };
    assert!(err.to_string().contains("rec-123"));
}

#[test]
fn ingest_wrong_type_names_field_and_expectation() {
    let err = IngestError::WrongType {
        record_id: "store-1".into(),
        field: "stock".into(),
        expected: "an integer".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("store-1"));
    assert!(msg.contains("stock"));
    assert!(msg.contains("an integer"));
}

// --- From impls ---

#[test]
fn subsystem_errors_convert_to_chainwatch_error() {
    let err: ChainwatchError = EventError::MissingId.into();
    assert!(matches!(err, ChainwatchError::Event(EventError::MissingId)));

    let err: ChainwatchError = LedgerError::NotFound {
        recommendation_id: "x".into(),
    }
    .into();
    assert!(matches!(err, ChainwatchError::Ledger(_)));
}

// --- Error codes ---

#[test]
fn error_codes_survive_wrapping() {
    let err: ChainwatchError = ConfigError::InvalidValue {
        field: "optimization.max_budget".into(),
        message: "must be a positive number".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err: ChainwatchError = LedgerError::NotFound {
        recommendation_id: "rec-9".into(),
    }
    .into();
    assert_eq!(err.error_code(), "NOT_FOUND");

    let err: ChainwatchError = LedgerError::LockPoisoned {
        reason: "poisoned".into(),
    }
    .into();
    assert_eq!(err.error_code(), "LEDGER_UNAVAILABLE");
}

#[test]
fn boundary_string_prefixes_code() {
    let err = EventError::MissingId;
    assert_eq!(err.boundary_string(), "[EVENT_ERROR] event is missing its id");
}
