//! Quality scoring over validator verdicts.

use std::collections::BTreeMap;

use chainwatch_core::models::{LocationRecord, QualityReport};

use crate::validator::{self, RecordVerdict};

/// Score a batch. Same verdicts as [`validator::validate`], report only.
pub fn score(records: &[LocationRecord]) -> QualityReport {
    aggregate(&validator::verdicts(records))
}

/// Fold per-record verdicts into a report.
///
/// `categories` counts issues, not records: a record with a blank name and
/// a bad latitude adds one to `naming` and one to `coordinates`.
pub fn aggregate(verdicts: &[RecordVerdict]) -> QualityReport {
    if verdicts.is_empty() {
        return QualityReport::empty();
    }

    let total_records = verdicts.len();
    let valid_records = verdicts.iter().filter(|v| v.is_valid()).count();

    let mut categories = BTreeMap::new();
    let mut issues_found = 0;
    for issue in verdicts.iter().flat_map(|v| &v.issues) {
        *categories.entry(issue.category).or_insert(0) += 1;
        issues_found += 1;
    }

    QualityReport {
        score: percentage(valid_records, total_records),
        total_records,
        valid_records,
        issues_found,
        categories,
    }
}

/// `round(100 × valid / total)` with halves rounded up, in integer arithmetic.
/// 100 when `total` is 0.
pub fn percentage(valid: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let valid = valid.min(total) as u64;
    let total = total as u64;
    ((200 * valid + total) / (2 * total)) as u32
}
