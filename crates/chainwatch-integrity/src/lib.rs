//! # chainwatch-integrity
//!
//! Field-level validation of store and distribution-center records,
//! batch quality scoring, and automatic correction.
//!
//! ## Rules (evaluated in this order per record)
//! 1. **Latitude**: finite number or plain decimal string (high)
//! 2. **Longitude**: same rule (high)
//! 3. **Name**: present and non-blank (medium)
//! 4. **Stock**: non-negative when present (medium)
//! 5. **Capacity**: positive when present (low)
//!
//! ## Corrections
//! - Unusable coordinates become `"0"`
//! - Negative stock becomes 0
//! - Missing or blank names become `"Unnamed Location"`
//! - Non-positive capacity becomes 1000
//! - Names with irregular whitespace are normalized
//!
//! Correction is idempotent: correcting corrected output changes nothing.

pub mod correction;
pub mod engine;
pub mod rules;
pub mod scoring;
pub mod validator;

pub use correction::{correct, AppliedCorrection, CorrectionKind, CorrectionOutcome};
pub use engine::{IntegrityAudit, IntegrityEngine};
pub use scoring::score;
pub use validator::{validate, RecordVerdict, ValidationOutcome};
