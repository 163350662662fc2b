//! Coordinate validation for latitude and longitude.

use chainwatch_core::models::{Coordinate, DataIssue, IssueField, LocationRecord, Severity};

use super::issue;

/// Whether a coordinate is usable. Delegates to the shared coordinate rule.
pub fn is_valid(coordinate: &Coordinate) -> bool {
    coordinate.is_valid()
}

/// Check latitude then longitude, in that order.
pub fn check(record: &LocationRecord, index: usize) -> Vec<DataIssue> {
    [
        (IssueField::Latitude, &record.latitude),
        (IssueField::Longitude, &record.longitude),
    ]
    .into_iter()
    .filter(|(_, coordinate)| !is_valid(coordinate))
    .map(|(field, coordinate)| {
        issue(
            field,
            index,
            &record.id,
            Severity::High,
            format!("Invalid {field} coordinate: {coordinate}"),
            "Set to default value or validate input",
        )
    })
    .collect()
}
