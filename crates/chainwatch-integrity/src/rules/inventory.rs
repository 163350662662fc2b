use chainwatch_core::models::{DataIssue, IssueField, LocationRecord, Severity};

use super::issue;

pub fn is_valid(stock: i64) -> bool {
    stock >= 0
}

/// Only records that report stock are checked.
pub fn check(record: &LocationRecord, index: usize) -> Option<DataIssue> {
    let stock = record.stock()?;
    if is_valid(stock) {
        return None;
    }
    Some(issue(
        IssueField::Stock,
        index,
        &record.id,
        Severity::Medium,
        format!("Negative stock value: {stock}"),
        "Set to 0 or validate input",
    ))
}
