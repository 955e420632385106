//! Canonical field keys.
//!
//! CSV columns are mapped onto these keys by [`crate::HeaderMapping`]. The
//! keys double as column names in the record store, so their spelling is
//! fixed (including `Initial_cost`).

pub const STATUS: &str = "status";
pub const SERIAL_NUMBER: &str = "serial_number";
pub const CUSTOMER_NAME: &str = "customer_name";
pub const MONTHLY_FEE: &str = "monthly_fee";
pub const TRANSFER_MONTHS: &str = "transfer_months";
pub const CONTRACT_AND_APPLICATION_FORM: &str = "contract_and_application_form";
pub const INITIAL_COST: &str = "Initial_cost";
pub const APPLICATION_DATE: &str = "application_date";
pub const SERVICE_AND_BILLING_START_DATE: &str = "service_and_billing_start_date";
pub const TRANSFER_APPLICATION_DEADLINE: &str = "transfer_application_deadline";
pub const TRANSFER_EXECUTION_DATE: &str = "transfer_execution_date";
pub const REASON_FOR_LOSS_ORDER: &str = "reason_for_loss_order";
pub const EXPLANATION: &str = "explanation";

/// Output-only column carrying the rendered validation outcome.
pub const VALIDATION_RESULT: &str = "validation_result";

/// Value of [`VALIDATION_RESULT`] for a row without issues.
pub const VALIDATION_OK: &str = "OK";
