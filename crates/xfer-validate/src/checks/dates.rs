//! Date validity and allowed time window.

use xfer_model::Row;

use super::CheckContext;
use crate::datetime::parse_date;
use crate::issue::Issue;

/// Check each configured date field that has a value.
///
/// Per field at most one issue is raised: unparseable first, then too old,
/// then in the future.
pub fn check(row: &Row, context: &CheckContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for field in &context.config.date_fields {
        let Some(value) = row.non_empty(field) else {
            continue;
        };
        let label = context.label(field);
        let field = field.clone();

        match parse_date(value) {
            None => issues.push(Issue::InvalidDate { field, label }),
            Some(date) if date < context.past_limit => issues.push(Issue::TooFarInPast {
                field,
                label,
                months: context.config.past_limit_months,
            }),
            Some(date) if date > context.now => issues.push(Issue::FutureDate { field, label }),
            Some(_) => {}
        }
    }

    issues
}
