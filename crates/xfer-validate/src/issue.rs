//! Validation issue types.
//!
//! Each variant carries the already-resolved display labels it needs, so
//! rendering never looks anything up.

use std::fmt;

use serde::Serialize;

/// A single rule violation on one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Date field could not be parsed.
    InvalidDate { field: String, label: String },
    /// Date lies before the allowed window.
    TooFarInPast {
        field: String,
        label: String,
        months: u32,
    },
    /// Date lies after the reference time.
    FutureDate { field: String, label: String },
    /// Transfer is scheduled too soon after service start.
    TransferTooEarly {
        transfer_label: String,
        service_label: String,
        months: u32,
    },
    /// Serial number appears more than once in the batch.
    DuplicateInFile { label: String },
    /// Serial number already exists in the record store.
    AlreadyRegistered { label: String },
}

impl Issue {
    /// Stable identifier of the rule that raised the issue.
    pub fn kind(&self) -> &'static str {
        match self {
            Issue::InvalidDate { .. } => "invalid_date",
            Issue::TooFarInPast { .. } => "too_far_in_past",
            Issue::FutureDate { .. } => "future_date",
            Issue::TransferTooEarly { .. } => "transfer_too_early",
            Issue::DuplicateInFile { .. } => "duplicate_in_file",
            Issue::AlreadyRegistered { .. } => "already_registered",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::InvalidDate { label, .. } => write!(f, "{label}: invalid date"),
            Issue::TooFarInPast { label, months, .. } => {
                write!(f, "{label}: more than {months} months in the past")
            }
            Issue::FutureDate { label, .. } => write!(f, "{label}: future date"),
            Issue::TransferTooEarly {
                transfer_label,
                service_label,
                months,
            } => write!(
                f,
                "{transfer_label}: must be at least {months} months after {service_label}"
            ),
            Issue::DuplicateInFile { label } => write!(f, "{label}: duplicate within file"),
            Issue::AlreadyRegistered { label } => write!(f, "{label}: already registered"),
        }
    }
}
