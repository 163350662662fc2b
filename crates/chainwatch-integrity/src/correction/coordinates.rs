//! Replace unusable coordinates with the sentinel.

use chainwatch_core::constants::SENTINEL_COORDINATE;
use chainwatch_core::models::{Coordinate, IssueField, LocationRecord};

use super::{applied, AppliedCorrection, CorrectionKind};
use crate::rules::coordinates::is_valid;

pub fn apply(record: &mut LocationRecord) -> Vec<AppliedCorrection> {
    let mut fixes = Vec::new();
    for field in [IssueField::Latitude, IssueField::Longitude] {
        let slot = match field {
            IssueField::Latitude => &mut record.latitude,
            _ => &mut record.longitude,
        };
        if is_valid(slot) {
            continue;
        }
        let before = slot.to_string();
        *slot = Coordinate::text(SENTINEL_COORDINATE);
        fixes.push((field, before));
    }
    fixes
        .into_iter()
        .map(|(field, before)| {
            applied(
                record,
                field,
                CorrectionKind::SentinelCoordinate,
                before,
                SENTINEL_COORDINATE.to_string(),
            )
        })
        .collect()
}
