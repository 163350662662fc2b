//! Name defaulting and whitespace normalization.

use chainwatch_core::constants::UNNAMED_LOCATION;
use chainwatch_core::models::{IssueField, LocationRecord};

use super::{applied, AppliedCorrection, CorrectionKind};
use crate::rules::naming::is_valid;

/// Trim and collapse every whitespace run to a single space.
pub fn normalize(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Give a missing or blank name the placeholder.
pub fn apply_default(record: &mut LocationRecord) -> Option<AppliedCorrection> {
    if is_valid(record.name.as_deref()) {
        return None;
    }
    let before = record.name.clone().unwrap_or_default();
    record.name = Some(UNNAMED_LOCATION.to_string());
    Some(applied(
        record,
        IssueField::Name,
        CorrectionKind::DefaultName,
        before,
        UNNAMED_LOCATION.to_string(),
    ))
}

/// Normalize whitespace in a valid name. Only counts when the string changes.
pub fn apply_normalization(record: &mut LocationRecord) -> Option<AppliedCorrection> {
    let name = record.name.as_deref()?;
    let normalized = normalize(name);
    if normalized == name {
        return None;
    }
    let before = name.to_string();
    record.name = Some(normalized.clone());
    Some(applied(
        record,
        IssueField::Name,
        CorrectionKind::NormalizeName,
        before,
        normalized,
    ))
}
