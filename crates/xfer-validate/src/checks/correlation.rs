//! Transfer execution relative to service start.

use xfer_model::{Row, fields};

use super::CheckContext;
use crate::datetime::{add_months, parse_date};
use crate::issue::Issue;

/// The transfer must happen at least the configured number of months after
/// service and billing start. Rows missing either date, or with a date that
/// does not parse, are left to the date check.
pub fn check(row: &Row, context: &CheckContext<'_>) -> Vec<Issue> {
    let transfer = row
        .non_empty(fields::TRANSFER_EXECUTION_DATE)
        .and_then(parse_date);
    let service = row
        .non_empty(fields::SERVICE_AND_BILLING_START_DATE)
        .and_then(parse_date);
    let (Some(transfer), Some(service)) = (transfer, service) else {
        return Vec::new();
    };

    let months = context.config.transfer_offset_months;
    let Some(earliest) = add_months(service, months) else {
        return Vec::new();
    };
    if transfer >= earliest {
        return Vec::new();
    }

    vec![Issue::TransferTooEarly {
        transfer_label: context.label(fields::TRANSFER_EXECUTION_DATE),
        service_label: context.label(fields::SERVICE_AND_BILLING_START_DATE),
        months,
    }]
}
