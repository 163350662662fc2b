use chainwatch_core::models::{DataIssue, IssueField, LocationRecord, Severity};

use super::issue;

/// A name is valid when present and non-empty after trimming.
pub fn is_valid(name: Option<&str>) -> bool {
    name.is_some_and(|n| !n.trim().is_empty())
}

pub fn check(record: &LocationRecord, index: usize) -> Option<DataIssue> {
    if is_valid(record.name.as_deref()) {
        return None;
    }
    Some(issue(
        IssueField::Name,
        index,
        &record.id,
        Severity::Medium,
        "Missing or empty name field".to_string(),
        "Provide default name or require user input",
    ))
}
