//! Field rules. Each module owns one field's predicate and the issue it raises.
//!
//! The predicates are shared with the corrector so that a corrected value
//! always passes validation.

pub mod capacity;
pub mod coordinates;
pub mod inventory;
pub mod naming;

use chainwatch_core::models::{DataIssue, IssueField, Severity};

/// Issue id for a field at a batch position, e.g. `coord_lat_3`.
pub(crate) fn issue_id(field: IssueField, index: usize) -> String {
    let prefix = match field {
        IssueField::Latitude => "coord_lat",
        IssueField::Longitude => "coord_lng",
        IssueField::Name => "name",
        IssueField::Stock => "stock",
        IssueField::Capacity => "capacity",
    };
    format!("{prefix}_{index}")
}

pub(crate) fn issue(
    field: IssueField,
    index: usize,
    record_id: &str,
    severity: Severity,
    description: String,
    suggested_fix: &str,
) -> DataIssue {
    DataIssue {
        id: issue_id(field, index),
        description,
        severity,
        field,
        category: field.category(),
        record_id: Some(record_id.to_string()),
        suggested_fix: Some(suggested_fix.to_string()),
    }
}
