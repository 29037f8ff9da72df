//! Date parsing and display formatting.
//!
//! The service sends dates either as `YYYY-MM-DD` or as full ISO timestamps;
//! everything here tolerates both and falls back instead of failing a render.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Placeholder rendered for an absent date.
pub const EMPTY_DATE: &str = "-";

/// Parse `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns an error if the input is not a calendar date in that format.
pub fn parse_iso_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
}

/// Format as `YYYY-MM-DD`.
pub fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Date part of an ISO date or timestamp (`2025-03-05T00:00:00Z` -> 2025-03-05).
pub fn date_part(raw: &str) -> Option<Date> {
    let head = raw.trim().split('T').next()?;
    parse_iso_date(head).ok()
}

/// List-cell rendering: `05 Mar 2025`, or a dash when absent or unreadable.
pub fn display_date(raw: Option<&str>) -> String {
    raw.and_then(date_part)
        .and_then(|date| date.format(format_description!("[day] [month repr:short] [year]")).ok())
        .unwrap_or_else(|| EMPTY_DATE.to_owned())
}

/// Detail rendering of a timestamp: `05 Mar 2025, 09:30`. Unparseable input is shown verbatim.
pub fn display_timestamp(raw: &str) -> String {
    OffsetDateTime::parse(raw.trim(), &Rfc3339)
        .ok()
        .and_then(|ts| {
            ts.format(format_description!("[day] [month repr:short] [year], [hour]:[minute]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_owned())
}

/// RFC 3339 timestamp for the given instant.
pub fn rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_default()
}
