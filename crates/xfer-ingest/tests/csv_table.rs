//! Tests for CSV table parsing and header mapping.

use std::fs;

use proptest::prelude::*;

use xfer_ingest::{IngestError, parse_csv, parse_csv_table, read_csv_file};
use xfer_model::HeaderMapping;

const EXPORT: &str = "\
ステータス,#通番,顧客名,備考,申込日
受注,A-001,\"山田, 太郎\",社内メモ,2024/01/15
失注,A-002,\"鈴木 \"\"花子\"\"\"
";

#[test]
fn maps_default_headers_and_drops_unknown_columns() {
    let table = parse_csv_table(EXPORT, &HeaderMapping::default()).expect("parse export");

    assert_eq!(
        table.columns,
        vec!["status", "serial_number", "customer_name", "application_date"]
    );
    assert_eq!(table.rows.len(), 2);

    let first = &table.rows[0];
    assert_eq!(first.get("status"), "受注");
    assert_eq!(first.get("customer_name"), "山田, 太郎");
    assert_eq!(first.get("application_date"), "2024/01/15");
    assert_eq!(first.len(), 4);
    assert!(first.keys().all(|key| key != "備考"));

    // Short line: trailing columns default to empty.
    let second = &table.rows[1];
    assert_eq!(second.get("customer_name"), "鈴木 \"花子\"");
    assert!(second.contains_key("application_date"));
    assert_eq!(second.get("application_date"), "");
}

#[test]
fn surplus_values_are_ignored() {
    let mapping: HeaderMapping = [("ID", "serial_number")].into_iter().collect();
    let rows = parse_csv("ID\nA,extra,more\n", &mapping).expect("parse");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[0].get("serial_number"), "A");
}

#[test]
fn unmapped_header_line_is_rejected() {
    let err = parse_csv("foo,bar\n1,2\n", &HeaderMapping::default()).unwrap_err();
    match err {
        IngestError::HeaderMapping { headers } => assert_eq!(headers, vec!["foo", "bar"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn header_only_text_is_not_checked_against_mapping() {
    let rows = parse_csv("foo,bar", &HeaderMapping::default()).expect("parse");
    assert!(rows.is_empty());
    assert!(parse_csv("", &HeaderMapping::default()).expect("parse").is_empty());
    assert!(parse_csv("\n\n  \n", &HeaderMapping::default()).expect("parse").is_empty());
}

#[test]
fn byte_order_mark_is_stripped() {
    let text = format!("\u{feff}{EXPORT}");
    let rows = parse_csv(&text, &HeaderMapping::default()).expect("parse");
    assert_eq!(rows[0].get("status"), "受注");
}

#[test]
fn reads_utf8_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("export.csv");
    fs::write(&path, EXPORT).expect("write file");

    let table = read_csv_file(&path, &HeaderMapping::default()).expect("read csv");
    assert_eq!(table.rows.len(), 2);
}

#[test]
fn rejects_non_utf8_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sjis.csv");
    // "申込日" in Shift-JIS.
    fs::write(&path, [0x90, 0x5C, 0x8D, 0x9E, 0x93, 0xFA, b'\n', b'1']).expect("write file");

    let err = read_csv_file(&path, &HeaderMapping::default()).unwrap_err();
    assert!(matches!(err, IngestError::InvalidEncoding { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_csv_file(&dir.path().join("absent.csv"), &HeaderMapping::default())
        .unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

proptest! {
    #[test]
    fn mapped_header_never_fails(
        cells in prop::collection::vec("[a-z0-9 ,\"]{0,12}", 1..8)
    ) {
        let mapping: HeaderMapping = [("ID", "serial_number")].into_iter().collect();
        let text = format!("ID,other\n{}\n", cells.join(","));
        prop_assert!(parse_csv(&text, &mapping).is_ok());
    }

    #[test]
    fn fewer_than_two_lines_yield_nothing(line in "[^\r\n]*") {
        let rows = parse_csv(&line, &HeaderMapping::default());
        prop_assert!(rows.map(|rows| rows.is_empty()).unwrap_or(false));
    }
}
