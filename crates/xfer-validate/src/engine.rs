//! Batch validation engine.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use xfer_model::{LabelMap, Row, ValidationConfig, fields};

use crate::checks::{CheckContext, run_all};
use crate::issue::Issue;

/// Issues found on one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowReport {
    /// 1-based position in the batch.
    pub row: usize,
    pub issues: Vec<Issue>,
}

impl RowReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Text stored in the row's validation result.
    pub fn message(&self) -> String {
        if self.issues.is_empty() {
            return fields::VALIDATION_OK.to_string();
        }
        self.issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Outcome of validating one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Reference time the batch was checked against.
    pub checked_at: NaiveDateTime,
    pub rows: Vec<RowReport>,
}

impl ValidationReport {
    pub fn failed_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_ok()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.rows.iter().any(|row| !row.is_ok())
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.rows.iter().flat_map(|row| row.issues.iter())
    }
}

/// Applies the business rules to a batch of rows.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    config: ValidationConfig,
    labels: LabelMap,
    now: Option<NaiveDateTime>,
}

impl ValidationEngine {
    pub fn new(config: ValidationConfig, labels: LabelMap) -> Self {
        Self {
            config,
            labels,
            now: None,
        }
    }

    /// Pins the reference time instead of reading the clock per batch.
    #[must_use]
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    /// Validated copies of `rows`, in order, each carrying a result.
    pub fn validate(&self, rows: &[Row]) -> Vec<Row> {
        self.validate_with_report(rows).0
    }

    /// Per-row issues without producing the annotated rows.
    pub fn report(&self, rows: &[Row]) -> ValidationReport {
        let now = self.reference_time();
        let context = CheckContext::new(&self.config, &self.labels, now, rows);
        let reports = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| RowReport {
                row: idx + 1,
                issues: run_all(row, &context),
            })
            .collect();
        ValidationReport {
            checked_at: now,
            rows: reports,
        }
    }

    /// Annotated rows plus the report they were built from.
    ///
    /// The duplicate flag is consumed here and cleared on the output rows.
    pub fn validate_with_report(&self, rows: &[Row]) -> (Vec<Row>, ValidationReport) {
        let report = self.report(rows);
        let validated = rows
            .iter()
            .zip(&report.rows)
            .map(|(row, row_report)| {
                let mut row = row.clone();
                row.clear_duplicate();
                row.set_validation_result(row_report.message());
                row
            })
            .collect();

        tracing::info!(
            rows = report.rows.len(),
            failed = report.failed_count(),
            checked_at = %report.checked_at,
            "validation complete"
        );
        (validated, report)
    }

    fn reference_time(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn empty_batch_yields_empty_report() {
        let engine = ValidationEngine::default().with_now(noon(2024, 6, 15));
        let report = engine.report(&[]);
        assert!(report.rows.is_empty());
        assert!(!report.has_failures());
    }

    #[test]
    fn row_numbers_are_one_based() {
        let engine = ValidationEngine::default().with_now(noon(2024, 6, 15));
        let rows = vec![Row::new(), Row::new()];
        let report = engine.report(&rows);
        assert_eq!(
            report.rows.iter().map(|r| r.row).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(report.rows[0].message(), "OK");
    }
}
