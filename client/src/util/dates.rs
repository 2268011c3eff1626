//! Timestamp parsing and display formatting for backend date strings.
//!
//! The backend mixes RFC 3339 (`2025-04-10T09:30:00.000000Z`), SQL-style
//! (`2025-04-10 09:30:00`), and date-only (`2025-04-10`) values.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const SQL_DATETIME: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_DATE: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short] [day padding:none], [year]");
const DISPLAY_DATETIME: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute]:[second] [period]"
);

/// Parse a backend timestamp. Naive values are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }
    if let Ok(dt) = PrimitiveDateTime::parse(raw, SQL_DATETIME) {
        return Some(dt.assume_utc());
    }
    Date::parse(raw, DATE_ONLY).ok().map(|d| d.midnight().assume_utc())
}

/// `Apr 10, 2025`; unparseable input is shown as-is, missing input as `N/A`.
pub fn format_date(raw: Option<&str>) -> String {
    format_with(raw, DISPLAY_DATE)
}

/// `Apr 10, 2025, 9:30:00 AM`; unparseable input is shown as-is, missing input as `N/A`.
pub fn format_datetime(raw: Option<&str>) -> String {
    format_with(raw, DISPLAY_DATETIME)
}

fn format_with(raw: Option<&str>, format: &[BorrowedFormatItem<'_>]) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "N/A".to_owned();
    };
    parse_timestamp(raw)
        .and_then(|dt| dt.format(format).ok())
        .unwrap_or_else(|| raw.to_owned())
}
