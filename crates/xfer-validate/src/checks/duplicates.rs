//! Serial number uniqueness, within the batch and against the store.

use xfer_model::{Row, fields};

use super::CheckContext;
use crate::issue::Issue;

pub fn check_in_file(row: &Row, context: &CheckContext<'_>) -> Vec<Issue> {
    match row.serial_number() {
        Some(serial) if context.serial_count(serial) > 1 => vec![Issue::DuplicateInFile {
            label: context.label(fields::SERIAL_NUMBER),
        }],
        _ => Vec::new(),
    }
}

/// Reports the flag set by the duplicate checker.
pub fn check_registered(row: &Row, context: &CheckContext<'_>) -> Vec<Issue> {
    if !row.is_duplicate() {
        return Vec::new();
    }
    vec![Issue::AlreadyRegistered {
        label: context.label(fields::SERIAL_NUMBER),
    }]
}
