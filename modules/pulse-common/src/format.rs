//! Display formatting for form input coming from `<input type="date">` and
//! `<input type="time">` fields.

use chrono::{NaiveDate, NaiveTime};

/// `2024-08-14` -> `Aug 14`. Values that don't parse are returned as given.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `13:30` -> `1:30 PM`. Values that don't parse are returned as given.
pub fn format_time(raw: &str) -> String {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Display date for an event spanning `start`..`end`. The end is only shown
/// when present and different from the start.
pub fn display_date(start: &str, end: Option<&str>) -> String {
    let start = start.trim();
    if start.is_empty() {
        return String::new();
    }
    let mut out = format_date(start);
    if let Some(end) = end.map(str::trim).filter(|e| !e.is_empty() && *e != start) {
        out.push('-');
        out.push_str(&format_date(end));
    }
    out
}

/// Display time for `start`..`end`; `None` when no start time was given.
pub fn display_time(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = start.map(str::trim).filter(|s| !s.is_empty())?;
    let mut out = format_time(start);
    if let Some(end) = end.map(str::trim).filter(|e| !e.is_empty()) {
        out.push_str(" - ");
        out.push_str(&format_time(end));
    }
    Some(out)
}
