use chainwatch_core::constants::DEFAULT_CAPACITY;
use chainwatch_core::models::{IssueField, LocationRecord, Site};

use super::{applied, AppliedCorrection, CorrectionKind};
use crate::rules::capacity::is_valid;

/// Replace non-positive capacity with the policy default.
///
/// The default is fixed, not derived from the record or its neighbours.
pub fn apply(record: &mut LocationRecord) -> Option<AppliedCorrection> {
    let Site::DistributionCenter {
        capacity: Some(capacity),
    } = &mut record.site
    else {
        return None;
    };
    if is_valid(*capacity) {
        return None;
    }
    let before = *capacity;
    *capacity = DEFAULT_CAPACITY;
    Some(applied(
        record,
        IssueField::Capacity,
        CorrectionKind::DefaultCapacity,
        before.to_string(),
        DEFAULT_CAPACITY.to_string(),
    ))
}
