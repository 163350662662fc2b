use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::data_issue::IssueCategory;

/// Aggregate validity summary over a record batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityReport {
    /// Percentage of valid records, 0–100. 100 for an empty batch.
    pub score: u32,
    pub total_records: usize,
    pub valid_records: usize,
    pub issues_found: usize,
    /// Occurrences per category. One record can count toward several.
    pub categories: BTreeMap<IssueCategory, usize>,
}

impl QualityReport {
    /// Report for a batch with no records.
    pub fn empty() -> Self {
        Self {
            score: 100,
            total_records: 0,
            valid_records: 0,
            issues_found: 0,
            categories: BTreeMap::new(),
        }
    }

    pub fn grade(&self) -> QualityGrade {
        QualityGrade::from_score(self.score)
    }

    /// Occurrence count for one category, 0 if it never appeared.
    pub fn category_count(&self, category: IssueCategory) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }
}

/// Coarse banding of a quality score as the dashboard presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum QualityGrade {
    /// Score ≥ 90.
    Good,
    /// Score ≥ 70.
    Fair,
    Poor,
}

impl QualityGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::Good,
            70..=89 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

/// The data-quality summary kept by the state container between checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualitySnapshot {
    pub score: u32,
    pub issues_count: usize,
    pub last_check: Option<DateTime<Utc>>,
}

impl QualitySnapshot {
    pub fn from_report(report: &QualityReport, checked_at: DateTime<Utc>) -> Self {
        Self {
            score: report.score,
            issues_count: report.issues_found,
            last_check: Some(checked_at),
        }
    }
}

impl Default for QualitySnapshot {
    fn default() -> Self {
        Self {
            score: 100,
            issues_count: 0,
            last_check: None,
        }
    }
}
