//! Checks that every boundary type carries its TypeScript derive.
//!
//! Run with: cargo test -p chainwatch-core export_bindings
//! ts-rs writes the .ts files to `TS_RS_EXPORT_DIR` or `<crate>/bindings/`.

fn assert_exportable<T: ts_rs::TS>() {}

#[test]
fn export_bindings() {
    use chainwatch_core::config::{Objective, OptimizationConfig};
    use chainwatch_core::models::{
        DataIssue, Event, Impact, IssueCategory, IssueField, Priority, QualityGrade,
        QualityReport, QualitySnapshot, Recommendation, Severity,
    };

    assert_exportable::<DataIssue>();
    assert_exportable::<Event>();
    assert_exportable::<Impact>();
    assert_exportable::<IssueCategory>();
    assert_exportable::<IssueField>();
    assert_exportable::<Objective>();
    assert_exportable::<OptimizationConfig>();
    assert_exportable::<Priority>();
    assert_exportable::<QualityGrade>();
    assert_exportable::<QualityReport>();
    assert_exportable::<QualitySnapshot>();
    assert_exportable::<Recommendation>();
    assert_exportable::<Severity>();
}
