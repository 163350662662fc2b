use chainwatch_core::models::*;

// ── Coordinate rule ──────────────────────────────────────────────────────

#[test]
fn coordinate_accepts_plain_decimals() {
    for s in ["28.4089", "-77.3178", "+12", "0", "0.0", "180"] {
        assert!(Coordinate::text(s).is_valid(), "{s} should be valid");
    }
}

#[test]
fn coordinate_rejects_non_plain_forms() {
    for s in [
        "invalid", "", " 28.4", "28.4 ", "1e5", "1,000.5", ".5", "5.", "--1", "NaN", "inf",
    ] {
        assert!(!Coordinate::text(s).is_valid(), "{s:?} should be invalid");
    }
}

#[test]
fn coordinate_rejects_non_ascii_digits() {
    assert!(!Coordinate::text("٢٨.٤").is_valid());
}

#[test]
fn coordinate_numbers_must_be_finite() {
    assert!(Coordinate::Number(28.4).is_valid());
    assert!(!Coordinate::Number(f64::NAN).is_valid());
    assert!(!Coordinate::Number(f64::INFINITY).is_valid());
    assert!(!Coordinate::Missing.is_valid());
}

#[test]
fn coordinate_with_overflowing_digits_is_invalid() {
    let huge = "9".repeat(400);
    assert!(!Coordinate::text(huge).is_valid());
}

#[test]
fn coordinate_deserializes_number_string_and_null() {
    let n: Coordinate = serde_json::from_str("28.5").unwrap();
    assert_eq!(n, Coordinate::Number(28.5));
    let s: Coordinate = serde_json::from_str("\"28.5\"").unwrap();
    assert_eq!(s, Coordinate::text("28.5"));
    let m: Coordinate = serde_json::from_str("null").unwrap();
    assert_eq!(m, Coordinate::Missing);
}

// ── LocationRecord serde ─────────────────────────────────────────────────

#[test]
fn store_record_uses_kind_tag() {
    let json = r#"{"id":"s1","name":"Noida Store","latitude":"28.53","longitude":77.39,"kind":"store","stock":12}"#;
    let record: LocationRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.kind(), SiteKind::Store);
    assert_eq!(record.stock(), Some(12));
    assert_eq!(record.capacity(), None);
    assert_eq!(record.longitude, Coordinate::Number(77.39));

    let back = serde_json::to_value(&record).unwrap();
    assert_eq!(back["kind"], "store");
    assert_eq!(back["stock"], 12);
}

#[test]
fn distribution_center_without_capacity_omits_field() {
    let record = LocationRecord::distribution_center("dc1", "Gurgaon DC", "28.45", "77.02", None);
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["kind"], "distribution_center");
    assert!(value.get("capacity").is_none());
}

#[test]
fn record_batch_combines_stores_first() {
    let batch = RecordBatch {
        stores: vec![LocationRecord::store("s1", "A", "1", "1", Some(1))],
        distribution_centers: vec![LocationRecord::distribution_center(
            "dc1",
            "B",
            "2",
            "2",
            Some(10),
        )],
    };
    let combined = batch.combined();
    assert_eq!(combined[0].id, "s1");
    assert_eq!(combined[1].id, "dc1");
    assert_eq!(RecordBatch::from_combined(combined), batch);
}

// ── Events ───────────────────────────────────────────────────────────────

#[test]
fn event_from_json_requires_id() {
    let err = Event::from_json(r#"{"type":"Weather Disruption","confidence":0.9}"#).unwrap_err();
    assert!(err.to_string().contains("id"));
}

#[test]
fn event_from_json_rejects_non_numeric_confidence() {
    let err = Event::from_json(r#"{"id":"e1","confidence":"high"}"#).unwrap_err();
    assert!(matches!(err, chainwatch_core::errors::EventError::Malformed { .. }));
}

#[test]
fn event_from_json_defaults_optional_fields() {
    let event = Event::from_json(r#"{"id":"e1","confidence":0.8}"#).unwrap();
    assert_eq!(event.category(), "General");
    assert_eq!(event.effective_intensity(), 5);
    assert_eq!(event.effective_impact(), Impact::Medium);
}

#[test]
fn event_validate_rejects_out_of_range_values() {
    assert!(Event::new("e1", "Route Closure", 1.2).validate().is_err());
    assert!(Event::new("e1", "Route Closure", f64::NAN).validate().is_err());
    assert!(Event::new("e1", "Route Closure", 0.8)
        .with_intensity(11)
        .validate()
        .is_err());
    assert!(Event::new("", "Route Closure", 0.8).validate().is_err());
    assert!(Event::new("e1", "Route Closure", 0.8)
        .with_intensity(10)
        .validate()
        .is_ok());
}

#[test]
fn event_type_serializes_as_type() {
    let event = Event::new("e1", "Demand Surge", 0.7).with_impact(Impact::High);
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "Demand Surge");
    assert_eq!(value["impact"], "High");
}

// ── Quality grading ──────────────────────────────────────────────────────

#[test]
fn quality_grade_bands() {
    assert_eq!(QualityGrade::from_score(100), QualityGrade::Good);
    assert_eq!(QualityGrade::from_score(90), QualityGrade::Good);
    assert_eq!(QualityGrade::from_score(89), QualityGrade::Fair);
    assert_eq!(QualityGrade::from_score(70), QualityGrade::Fair);
    assert_eq!(QualityGrade::from_score(69), QualityGrade::Poor);
    assert_eq!(QualityGrade::from_score(0), QualityGrade::Poor);
}

#[test]
fn empty_report_is_a_vacuous_pass() {
    let report = QualityReport::empty();
    assert_eq!(report.score, 100);
    assert_eq!(report.category_count(IssueCategory::Naming), 0);
    assert_eq!(QualitySnapshot::default().last_check, None);
}

#[test]
fn issue_fields_roll_up_to_categories() {
    assert_eq!(IssueField::Latitude.category(), IssueCategory::Coordinates);
    assert_eq!(IssueField::Longitude.category(), IssueCategory::Coordinates);
    assert_eq!(IssueField::Name.category(), IssueCategory::Naming);
    assert_eq!(IssueField::Stock.category(), IssueCategory::Inventory);
    assert_eq!(IssueField::Capacity.category(), IssueCategory::Capacity);
}
