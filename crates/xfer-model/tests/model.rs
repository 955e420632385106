//! Tests for the shared import model.

use xfer_model::{HeaderMapping, LabelMap, Row, ValidationConfig, fields};

#[test]
fn row_serializes_without_transient_flag() {
    let mut row: Row = [("serial_number", "A-1"), ("status", "受注")]
        .into_iter()
        .collect();
    row.mark_duplicate();
    row.set_validation_result("OK");

    let json = serde_json::to_value(&row).expect("serialize row");
    assert_eq!(
        json,
        serde_json::json!({
            "serial_number": "A-1",
            "status": "受注",
            "validation_result": "OK"
        })
    );
}

#[test]
fn row_round_trips_validation_result() {
    let json = r#"{"serial_number":"A-1","validation_result":"OK"}"#;
    let row: Row = serde_json::from_str(json).expect("deserialize row");
    assert_eq!(row.get(fields::SERIAL_NUMBER), "A-1");
    assert_eq!(row.validation_result(), Some("OK"));
    assert!(!row.contains_key(fields::VALIDATION_RESULT));
    assert!(!row.is_duplicate());
}

#[test]
fn unvalidated_row_is_not_ok() {
    let row: Row = [("serial_number", "A-1")].into_iter().collect();
    assert!(!row.is_ok());
    assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"serial_number":"A-1"}"#);
}

#[test]
fn header_mapping_merge_overrides_defaults() {
    let mut mapping = HeaderMapping::default();
    mapping.merge([("#通番", ""), ("管理番号", "serial_number")].into_iter().collect());

    assert_eq!(mapping.resolve("#通番"), None);
    assert_eq!(mapping.resolve("管理番号"), Some("serial_number"));
    assert!(mapping.canonical_keys().contains("serial_number"));
}

#[test]
fn header_mapping_deserializes_from_table() {
    let mapping: HeaderMapping =
        toml::from_str("\"顧客\" = \"customer_name\"\n").expect("parse mapping");
    assert_eq!(mapping.resolve("顧客"), Some("customer_name"));
    assert_eq!(mapping.len(), 1);
}

#[test]
fn label_overrides_win_over_derived_labels() {
    let mut labels = LabelMap::from_header_mapping(&HeaderMapping::default());
    labels.merge([("serial_number", "通番")].into_iter().collect());
    assert_eq!(labels.label("serial_number"), "通番");
    assert_eq!(labels.label("application_date"), "申込日");
}

#[test]
fn validation_config_builders() {
    let config = ValidationConfig::default()
        .with_past_limit_months(6)
        .with_transfer_offset_months(1)
        .with_date_fields(["application_date"]);
    assert_eq!(config.past_limit_months, 6);
    assert_eq!(config.transfer_offset_months, 1);
    assert_eq!(config.date_fields, vec!["application_date".to_string()]);
}
