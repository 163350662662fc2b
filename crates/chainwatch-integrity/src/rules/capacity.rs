use chainwatch_core::models::{DataIssue, IssueField, LocationRecord, Severity};

use super::issue;

pub fn is_valid(capacity: i64) -> bool {
    capacity > 0
}

/// Only records that report capacity are checked.
pub fn check(record: &LocationRecord, index: usize) -> Option<DataIssue> {
    let capacity = record.capacity()?;
    if is_valid(capacity) {
        return None;
    }
    Some(issue(
        IssueField::Capacity,
        index,
        &record.id,
        Severity::Low,
        format!("Invalid capacity value: {capacity}"),
        "Set to reasonable default value",
    ))
}
