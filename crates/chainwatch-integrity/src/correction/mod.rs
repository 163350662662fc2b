//! Auto-correction: fixed default policies applied per record.
//!
//! Every fix is keyed off the same predicates the validator uses, so
//! corrected output always validates clean and a second pass is a no-op.

pub mod capacity;
pub mod coordinates;
pub mod inventory;
pub mod naming;

use chainwatch_core::models::{IssueField, LocationRecord};
use serde::Serialize;
use tracing::debug;

/// Which policy produced a correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionKind {
    /// Unusable coordinate replaced with the `"0"` sentinel. Not geocoded.
    SentinelCoordinate,
    /// Negative stock raised to 0.
    ClampStock,
    /// Missing or blank name replaced with "Unnamed Location".
    DefaultName,
    /// Non-positive capacity replaced with the policy default.
    DefaultCapacity,
    /// Name trimmed and internal whitespace collapsed.
    NormalizeName,
}

/// One field change made by the corrector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedCorrection {
    pub record_id: String,
    pub field: IssueField,
    pub kind: CorrectionKind,
    pub before: String,
    pub after: String,
}

/// Corrected batch plus what changed.
#[derive(Debug, Clone)]
pub struct CorrectionOutcome {
    /// Same length and order as the input.
    pub corrected: Vec<LocationRecord>,
    /// Number of records that received at least one fix.
    pub correction_count: usize,
    /// Every individual fix, in record order.
    pub applied: Vec<AppliedCorrection>,
}

/// Correct one record. Returns the fixed copy and the fixes applied.
pub fn correct_record(record: &LocationRecord) -> (LocationRecord, Vec<AppliedCorrection>) {
    let mut fixed = record.clone();
    let mut applied = coordinates::apply(&mut fixed);
    applied.extend(inventory::apply(&mut fixed));
    applied.extend(naming::apply_default(&mut fixed));
    applied.extend(capacity::apply(&mut fixed));
    applied.extend(naming::apply_normalization(&mut fixed));
    (fixed, applied)
}

/// Correct every record independently. No cross-record logic.
pub fn correct(records: &[LocationRecord]) -> CorrectionOutcome {
    let mut corrected = Vec::with_capacity(records.len());
    let mut applied = Vec::new();
    let mut correction_count = 0;

    for record in records {
        let (fixed, fixes) = correct_record(record);
        if !fixes.is_empty() {
            debug!(record_id = %record.id, fixes = fixes.len(), "record corrected");
            correction_count += 1;
            applied.extend(fixes);
        }
        corrected.push(fixed);
    }

    CorrectionOutcome {
        corrected,
        correction_count,
        applied,
    }
}

fn applied(
    record: &LocationRecord,
    field: IssueField,
    kind: CorrectionKind,
    before: String,
    after: String,
) -> AppliedCorrection {
    AppliedCorrection {
        record_id: record.id.clone(),
        field,
        kind,
        before,
        after,
    }
}
