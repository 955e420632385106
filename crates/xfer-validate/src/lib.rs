//! Business-rule validation for contract-transfer imports.
//!
//! Rows are checked against a fixed rule set: date validity and window,
//! transfer timing relative to service start, and serial-number uniqueness
//! within the batch and against the record store. Every row comes back with
//! a validation result of `"OK"` or the issue messages joined by `", "`.

pub mod checks;
pub mod datetime;
pub mod engine;
pub mod issue;

pub use datetime::{add_months, parse_date, sub_months};
pub use engine::{RowReport, ValidationEngine, ValidationReport};
pub use issue::Issue;

use xfer_model::{LabelMap, Row, ValidationConfig};

/// Validates `rows` with the default rule configuration and the current time.
pub fn validate_rows(rows: &[Row], labels: &LabelMap) -> Vec<Row> {
    ValidationEngine::new(ValidationConfig::default(), labels.clone()).validate(rows)
}
