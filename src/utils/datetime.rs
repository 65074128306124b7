//! Date utility functions
//!
//! Deadlines travel as calendar dates. The task service sometimes answers with a
//! full ISO datetime, so parsing only keeps the date part.

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};

/// Date format used on the wire and in date input fields
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default display format for due dates, e.g. `1/1/2099`
pub const DEFAULT_DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), WIRE_DATE_FORMAT)
}

/// Parse a deadline as sent by the task service.
///
/// Accepts `2099-01-01` as well as `2099-01-01T00:00:00.000Z`; anything after
/// the `T` separator is ignored.
pub fn parse_deadline(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    parse_date(date_part).ok()
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(WIRE_DATE_FORMAT).to_string()
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether `date` is strictly before `reference`
pub fn is_before(date: NaiveDate, reference: NaiveDate) -> bool {
    date < reference
}

/// Check that a strftime pattern contains no invalid specifiers
pub fn is_valid_format(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Render a due date with the given display pattern.
///
/// Falls back to YYYY-MM-DD when the pattern is invalid, so a bad configuration
/// never panics the renderer.
pub fn format_due(date: NaiveDate, pattern: &str) -> String {
    if is_valid_format(pattern) {
        date.format(pattern).to_string()
    } else {
        format_ymd(date)
    }
}
