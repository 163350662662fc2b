use chainwatch_core::models::{IssueField, LocationRecord, Site};

use super::{applied, AppliedCorrection, CorrectionKind};
use crate::rules::inventory::is_valid;

/// Raise negative stock to zero.
pub fn apply(record: &mut LocationRecord) -> Option<AppliedCorrection> {
    let Site::Store { stock: Some(stock) } = &mut record.site else {
        return None;
    };
    if is_valid(*stock) {
        return None;
    }
    let before = *stock;
    *stock = 0;
    Some(applied(
        record,
        IssueField::Stock,
        CorrectionKind::ClampStock,
        before.to_string(),
        "0".to_string(),
    ))
}
