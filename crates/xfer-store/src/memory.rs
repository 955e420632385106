//! In-process record store.
//!
//! Backs the CLI's `--registered` option and the tests. Records come from a
//! JSON array of objects, e.g. an export of the production store.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::store::{Record, RecordStore};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `records` under `collection`.
    pub fn with_records(collection: impl Into<String>, records: Vec<Record>) -> Self {
        let mut store = Self::new();
        store.collections.insert(collection.into(), records);
        store
    }

    /// Parses a JSON array of objects into `collection`.
    pub fn from_json_str(collection: impl Into<String>, text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Array(items) = value else {
            return Err(StoreError::Format {
                message: "top-level value is not an array".to_string(),
            });
        };
        let mut records = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(record) => records.push(record),
                _ => {
                    return Err(StoreError::Format {
                        message: format!("element {idx} is not an object"),
                    });
                }
            }
        }
        Ok(Self::with_records(collection, records))
    }

    pub fn load_json(path: &Path, collection: impl Into<String>) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(collection, &text)?;
        tracing::debug!(
            path = %path.display(),
            records = store.record_count(),
            "loaded registered records"
        );
        Ok(store)
    }

    /// Total number of records across collections.
    pub fn record_count(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn search_equal(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        limit: usize,
    ) -> Result<Vec<Record>> {
        let Some(records) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(records
            .iter()
            .filter(|record| record.get(field).is_some_and(|stored| matches_text(stored, value)))
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Exact match of a stored scalar against its text form.
fn matches_text(stored: &Value, value: &str) -> bool {
    match stored {
        Value::String(text) => text == value,
        Value::Number(number) => number.to_string() == value,
        _ => false,
    }
}
