//! Shared formatting helpers.

use chrono::DateTime;

/// Reformats an ISO-8601 creation timestamp into the en-US
/// "month-abbrev day, year" form used by the detail panel,
/// e.g. `"2020-01-02T00:00:00.000Z"` -> `"Jan 2, 2020"`.
///
/// An unparseable input is shown as-is rather than dropped.
pub fn format_created(created: &str) -> String {
    match DateTime::parse_from_rfc3339(created) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => created.to_string(),
    }
}
