pub mod data_issue;
pub mod event;
pub mod location;
pub mod quality_report;
pub mod recommendation;

pub use data_issue::{DataIssue, IssueCategory, IssueField, Severity};
pub use event::{Event, Impact};
pub use location::{Coordinate, LocationRecord, RecordBatch, Site, SiteKind};
pub use quality_report::{QualityGrade, QualityReport, QualitySnapshot};
pub use recommendation::{Priority, Recommendation};
