//! IntegrityEngine: validates a batch, optionally applies correction,
//! and produces the data-quality snapshot the dashboard keeps.

use chainwatch_core::config::IntegrityConfig;
use chainwatch_core::models::{
    DataIssue, LocationRecord, QualityReport, QualitySnapshot, RecordBatch,
};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::correction::{self, AppliedCorrection};
use crate::validator;

/// Result of one audit pass.
#[derive(Debug, Clone)]
pub struct IntegrityAudit {
    /// Issues found on the incoming batch.
    pub issues: Vec<DataIssue>,
    /// Report for the incoming batch, before any correction.
    pub report: QualityReport,
    /// Corrected batch, when auto-correction is enabled and changed something.
    pub corrected: Option<Vec<LocationRecord>>,
    pub correction_count: usize,
    pub corrections: Vec<AppliedCorrection>,
    pub snapshot: QualitySnapshot,
}

/// Batch validation with an auto-correct toggle.
pub struct IntegrityEngine {
    config: IntegrityConfig,
}

impl IntegrityEngine {
    pub fn new(config: IntegrityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntegrityConfig {
        &self.config
    }

    pub fn auto_correct_enabled(&self) -> bool {
        self.config.auto_correct
    }

    /// Audit a batch at the current time.
    pub fn audit(&self, records: &[LocationRecord]) -> IntegrityAudit {
        self.audit_at(records, Utc::now())
    }

    /// Audit a batch, stamping the snapshot with `now`.
    pub fn audit_at(&self, records: &[LocationRecord], now: DateTime<Utc>) -> IntegrityAudit {
        let outcome = validator::validate(records);

        let (corrected, correction_count, corrections) = if self.config.auto_correct {
            let fixed = correction::correct(records);
            let corrected = (fixed.correction_count > 0).then_some(fixed.corrected);
            (corrected, fixed.correction_count, fixed.applied)
        } else {
            (None, 0, Vec::new())
        };

        info!(
            total = outcome.report.total_records,
            valid = outcome.report.valid_records,
            issues = outcome.report.issues_found,
            score = outcome.report.score,
            corrections = correction_count,
            "integrity audit complete"
        );

        let snapshot = QualitySnapshot::from_report(&outcome.report, now);
        IntegrityAudit {
            issues: outcome.issues,
            report: outcome.report,
            corrected,
            correction_count,
            corrections,
            snapshot,
        }
    }

    /// Audit the feed as the state container holds it. Stores are indexed
    /// first, distribution centers continue the numbering.
    pub fn audit_batch(&self, batch: &RecordBatch) -> (IntegrityAudit, Option<RecordBatch>) {
        let audit = self.audit(&batch.combined());
        let corrected = audit.corrected.clone().map(RecordBatch::from_combined);
        (audit, corrected)
    }
}

impl Default for IntegrityEngine {
    fn default() -> Self {
        Self::new(IntegrityConfig::default())
    }
}
