//! Date parsing and calendar-month arithmetic.
//!
//! Values are read as local wall-clock time. Date-only values mean midnight.

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Date-time notations found in spreadsheet exports.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only notations.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y年%m月%d日"];

/// Parse a date or date-time value.
///
/// Returns `None` for empty or unrecognised input and for impossible dates
/// such as `2024-02-30`.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// `at` moved `months` calendar months forward.
///
/// The day of month is kept; if the target month is shorter the surplus days
/// roll into the next month (Jan 31 + 1 month = Mar 2 in a leap year).
pub fn add_months(at: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    shift_months(at, months, true)
}

/// `at` moved `months` calendar months back, with the same roll-over rule as
/// [`add_months`].
pub fn sub_months(at: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    shift_months(at, months, false)
}

fn shift_months(at: NaiveDateTime, months: u32, forward: bool) -> Option<NaiveDateTime> {
    let date = at.date();
    let first = date.with_day(1)?;
    let first = if forward {
        first.checked_add_months(Months::new(months))?
    } else {
        first.checked_sub_months(Months::new(months))?
    };
    let shifted = first.checked_add_days(Days::new(u64::from(date.day0())))?;
    Some(shifted.and_time(at.time()))
}
