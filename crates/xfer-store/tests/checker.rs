//! Tests for duplicate detection against a record store.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use xfer_model::Row;
use xfer_store::{DuplicateChecker, MemoryStore, Record, RecordStore, StoreError};

fn row(serial: &str) -> Row {
    [("serial_number", serial), ("customer_name", "顧客")]
        .into_iter()
        .collect()
}

fn record(serial: &str) -> Record {
    match json!({ "serial_number": serial }) {
        serde_json::Value::Object(record) => record,
        _ => unreachable!(),
    }
}

fn registered(serials: &[&str]) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_records(
        "contracts",
        serials.iter().map(|serial| record(serial)).collect(),
    ))
}

/// Records every query and fails for serials starting with "ERR".
#[derive(Default)]
struct ScriptedStore {
    queries: Mutex<Vec<(String, String, String, usize)>>,
}

#[async_trait]
impl RecordStore for ScriptedStore {
    async fn search_equal(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        limit: usize,
    ) -> xfer_store::Result<Vec<Record>> {
        self.queries.lock().unwrap().push((
            collection.to_string(),
            field.to_string(),
            value.to_string(),
            limit,
        ));
        if value.starts_with("ERR") {
            return Err(StoreError::query("connection reset"));
        }
        if value.starts_with("DUP") {
            return Ok(vec![record(value)]);
        }
        Ok(Vec::new())
    }
}

/// Answers later rows faster than earlier ones.
struct SlowFirstStore;

#[async_trait]
impl RecordStore for SlowFirstStore {
    async fn search_equal(
        &self,
        _collection: &str,
        _field: &str,
        value: &str,
        _limit: usize,
    ) -> xfer_store::Result<Vec<Record>> {
        let delay: u64 = value.trim_start_matches("S").parse().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(50 - delay * 10)).await;
        Ok(if delay % 2 == 0 { vec![record(value)] } else { Vec::new() })
    }
}

#[tokio::test]
async fn marks_registered_serial_numbers() {
    let checker = DuplicateChecker::new(registered(&["A-1"]), "contracts");
    let rows = checker.check(vec![row("A-1"), row("A-2")]).await;

    assert!(rows[0].is_duplicate());
    assert!(!rows[1].is_duplicate());
}

#[tokio::test]
async fn disabled_checker_passes_rows_through() {
    let input = vec![row("A-1"), row("A-2")];
    let rows = DuplicateChecker::disabled().check(input.clone()).await;
    assert_eq!(rows, input);
    assert!(!DuplicateChecker::disabled().is_enabled());
}

#[tokio::test]
async fn empty_collection_name_disables_lookups() {
    let store = Arc::new(ScriptedStore::default());
    let checker = DuplicateChecker::new(store.clone(), "");
    let rows = checker.check(vec![row("DUP-1")]).await;

    assert!(!rows[0].is_duplicate());
    assert!(store.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn queries_exact_serial_with_limit_one() {
    let store = Arc::new(ScriptedStore::default());
    let checker = DuplicateChecker::new(store.clone(), "contracts");
    let rows = vec![row("A-1"), row(""), Row::new()];

    let (rows, stats) = checker.check_with_stats(rows).await;

    assert_eq!(rows.len(), 3);
    assert_eq!(stats.checked, 1);
    let queries = store.queries.lock().unwrap();
    assert_eq!(
        *queries,
        vec![(
            "contracts".to_string(),
            "serial_number".to_string(),
            "A-1".to_string(),
            1
        )]
    );
}

#[tokio::test]
async fn failed_lookup_leaves_row_unmarked() {
    let store = Arc::new(ScriptedStore::default());
    let checker = DuplicateChecker::new(store, "contracts");

    let (rows, stats) = checker
        .check_with_stats(vec![row("ERR-1"), row("DUP-2"), row("NEW-3")])
        .await;

    assert!(!rows[0].is_duplicate());
    assert!(rows[1].is_duplicate());
    assert!(!rows[2].is_duplicate());
    assert_eq!(stats.checked, 3);
    assert_eq!(stats.duplicates, 1);
    assert_eq!(stats.failed, 1);
}

#[tokio::test]
async fn keeps_input_order_when_lookups_finish_out_of_order() {
    let serials = ["S0", "S1", "S2", "S3", "S4"];
    let rows: Vec<Row> = serials.iter().map(|serial| row(serial)).collect();

    for limit in [0, 2] {
        let checker =
            DuplicateChecker::new(Arc::new(SlowFirstStore), "contracts").with_max_in_flight(limit);
        let checked = checker.check(rows.clone()).await;

        let order: Vec<&str> = checked.iter().map(|row| row.get("serial_number")).collect();
        assert_eq!(order, serials);
        let flags: Vec<bool> = checked.iter().map(Row::is_duplicate).collect();
        assert_eq!(flags, vec![true, false, true, false, true]);
    }
}

#[tokio::test]
async fn loads_registered_records_from_json_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("registered.json");
    std::fs::write(
        &path,
        r#"[{"serial_number": "A-1"}, {"serial_number": 1024, "status": "done"}]"#,
    )
    .expect("write records");

    let store = MemoryStore::load_json(&path, "contracts").expect("load store");
    assert_eq!(store.record_count(), 2);

    let hits = store
        .search_equal("contracts", "serial_number", "1024", 1)
        .await
        .expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["status"], "done");

    let misses = store
        .search_equal("other", "serial_number", "A-1", 1)
        .await
        .expect("search");
    assert!(misses.is_empty());
}
