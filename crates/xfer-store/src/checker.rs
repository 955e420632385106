//! Duplicate detection against the record store.
//!
//! Each row with a serial number is looked up independently; a hit marks the
//! row as a duplicate. Lookups that fail are logged and leave the row
//! unmarked, so one broken query never aborts the batch.

use std::sync::Arc;

use futures::StreamExt;
use futures::future::join_all;
use futures::stream;

use xfer_model::{Row, fields};

use crate::store::RecordStore;

/// Marks rows whose serial number is already registered.
#[derive(Clone, Default)]
pub struct DuplicateChecker {
    store: Option<Arc<dyn RecordStore>>,
    collection: String,
    max_in_flight: Option<usize>,
}

/// Summary of one duplicate-check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckStats {
    /// Rows that were looked up.
    pub checked: usize,
    /// Rows found in the store.
    pub duplicates: usize,
    /// Rows whose lookup failed.
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Skipped,
    Unique,
    Duplicate,
    Failed,
}

impl DuplicateChecker {
    /// Checker querying `collection` of `store`.
    pub fn new(store: Arc<dyn RecordStore>, collection: impl Into<String>) -> Self {
        Self {
            store: Some(store),
            collection: collection.into(),
            max_in_flight: None,
        }
    }

    /// Checker without a store; rows pass through untouched.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Caps the number of concurrent lookups; `0` removes the cap.
    #[must_use]
    pub fn with_max_in_flight(mut self, limit: usize) -> Self {
        self.max_in_flight = (limit > 0).then_some(limit);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some() && !self.collection.is_empty()
    }

    /// Looks up every row and returns them in input order.
    pub async fn check(&self, rows: Vec<Row>) -> Vec<Row> {
        self.check_with_stats(rows).await.0
    }

    /// Same as [`check`](Self::check), also reporting what happened.
    pub async fn check_with_stats(&self, rows: Vec<Row>) -> (Vec<Row>, CheckStats) {
        let store = match self.store.as_deref() {
            Some(store) if !self.collection.is_empty() => store,
            _ => {
                tracing::debug!("no record store configured; skipping duplicate check");
                return (rows, CheckStats::default());
            }
        };

        let lookups = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| self.check_row(store, index, row));

        // `buffered` keeps completion order equal to input order.
        let results: Vec<(Row, Lookup)> = match self.max_in_flight {
            Some(limit) => stream::iter(lookups).buffered(limit).collect().await,
            None => join_all(lookups).await,
        };

        let mut stats = CheckStats::default();
        let mut checked = Vec::with_capacity(results.len());
        for (row, lookup) in results {
            match lookup {
                Lookup::Skipped => {}
                Lookup::Unique => stats.checked += 1,
                Lookup::Duplicate => {
                    stats.checked += 1;
                    stats.duplicates += 1;
                }
                Lookup::Failed => {
                    stats.checked += 1;
                    stats.failed += 1;
                }
            }
            checked.push(row);
        }

        tracing::info!(
            collection = %self.collection,
            checked = stats.checked,
            duplicates = stats.duplicates,
            failed = stats.failed,
            "duplicate check complete"
        );
        (checked, stats)
    }

    async fn check_row(&self, store: &dyn RecordStore, index: usize, mut row: Row) -> (Row, Lookup) {
        let Some(serial) = row.serial_number().map(str::to_string) else {
            return (row, Lookup::Skipped);
        };

        match store
            .search_equal(&self.collection, fields::SERIAL_NUMBER, &serial, 1)
            .await
        {
            Ok(records) if !records.is_empty() => {
                tracing::debug!(row = index + 1, serial_number = %serial, "already registered");
                row.mark_duplicate();
                (row, Lookup::Duplicate)
            }
            Ok(_) => (row, Lookup::Unique),
            Err(error) => {
                tracing::warn!(
                    row = index + 1,
                    serial_number = %serial,
                    %error,
                    "duplicate check failed; row left unmarked"
                );
                (row, Lookup::Failed)
            }
        }
    }
}

impl std::fmt::Debug for DuplicateChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DuplicateChecker")
            .field("enabled", &self.store.is_some())
            .field("collection", &self.collection)
            .field("max_in_flight", &self.max_in_flight)
            .finish()
    }
}
