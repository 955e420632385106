//! Row-level validation checks.
//!
//! Each check is an independent function over one row; the engine runs all
//! of them in [`ROW_CHECKS`] order and keeps every issue they report.

mod correlation;
mod dates;
mod duplicates;

use std::collections::HashMap;

use chrono::NaiveDateTime;
use xfer_model::{LabelMap, Row, ValidationConfig};

use crate::datetime::sub_months;
use crate::issue::Issue;

/// Signature shared by all row checks.
pub type RowCheck = fn(&Row, &CheckContext<'_>) -> Vec<Issue>;

/// Checks in reporting order.
pub const ROW_CHECKS: &[RowCheck] = &[
    // 1. Date validity and allowed window
    dates::check,
    // 2. Transfer date relative to service start
    correlation::check,
    // 3. Serial number repeated in this batch
    duplicates::check_in_file,
    // 4. Serial number already in the record store
    duplicates::check_registered,
];

/// Batch-wide inputs shared by every row check.
#[derive(Debug)]
pub struct CheckContext<'a> {
    pub config: &'a ValidationConfig,
    pub labels: &'a LabelMap,
    /// Reference time for the whole batch.
    pub now: NaiveDateTime,
    /// Oldest date still accepted.
    pub past_limit: NaiveDateTime,
    serial_counts: HashMap<&'a str, usize>,
}

impl<'a> CheckContext<'a> {
    pub fn new(
        config: &'a ValidationConfig,
        labels: &'a LabelMap,
        now: NaiveDateTime,
        rows: &'a [Row],
    ) -> Self {
        let mut serial_counts: HashMap<&str, usize> = HashMap::new();
        for serial in rows.iter().filter_map(Row::serial_number) {
            *serial_counts.entry(serial).or_default() += 1;
        }
        Self {
            config,
            labels,
            now,
            past_limit: sub_months(now, config.past_limit_months).unwrap_or(NaiveDateTime::MIN),
            serial_counts,
        }
    }

    pub fn label(&self, key: &str) -> String {
        self.labels.label(key).to_string()
    }

    /// How often `serial` occurs in the batch.
    pub fn serial_count(&self, serial: &str) -> usize {
        self.serial_counts.get(serial).copied().unwrap_or(0)
    }
}

/// Run every check against one row.
pub fn run_all(row: &Row, context: &CheckContext<'_>) -> Vec<Issue> {
    ROW_CHECKS
        .iter()
        .flat_map(|check| check(row, context))
        .collect()
}
