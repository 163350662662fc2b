//! Record validation: runs every field rule over a batch.

use chainwatch_core::models::{DataIssue, LocationRecord, QualityReport};
use tracing::debug;

use crate::rules::{capacity, coordinates, inventory, naming};
use crate::scoring;

/// The outcome of validating one record.
#[derive(Debug, Clone)]
pub struct RecordVerdict {
    pub record_id: String,
    /// Issues in rule order: latitude, longitude, name, stock, capacity.
    pub issues: Vec<DataIssue>,
}

impl RecordVerdict {
    /// A record is valid only if no rule raised an issue on it.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Issues and report for a whole batch.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub issues: Vec<DataIssue>,
    pub report: QualityReport,
}

impl ValidationOutcome {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate one record at its batch position.
pub fn validate_record(record: &LocationRecord, index: usize) -> RecordVerdict {
    let mut issues = coordinates::check(record, index);
    issues.extend(naming::check(record, index));
    issues.extend(inventory::check(record, index));
    issues.extend(capacity::check(record, index));

    if !issues.is_empty() {
        debug!(
            record_id = %record.id,
            index,
            issue_count = issues.len(),
            "record failed validation"
        );
    }

    RecordVerdict {
        record_id: record.id.clone(),
        issues,
    }
}

/// Per-record verdicts for a batch, in batch order.
pub fn verdicts(records: &[LocationRecord]) -> Vec<RecordVerdict> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_record(record, index))
        .collect()
}

/// Validate a batch. Never fails: the worst outcome is a flagged record.
pub fn validate(records: &[LocationRecord]) -> ValidationOutcome {
    let verdicts = verdicts(records);
    let report = scoring::aggregate(&verdicts);
    let issues = verdicts.into_iter().flat_map(|v| v.issues).collect();
    ValidationOutcome { issues, report }
}
