//! Date parsing and display helpers shared across the engine.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Parses a raw date field from a stored record.
///
/// Accepts plain dates (`2025-03-15`, `2025/03/15`) as well as
/// datetime strings (RFC 3339 or `YYYY-MM-DDTHH:MM:SS`); the time part
/// is discarded. Returns `None` for anything else.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    None
}

/// `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM` grouping key used by the monthly views.
pub fn month_key(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}

/// Japanese month label, e.g. `2025年3月`.
pub fn month_label(date: NaiveDate) -> String {
    format!("{}年{}月", date.year(), date.month())
}

/// Japanese display date, e.g. `2025/03/15 (土)`.
pub fn format_date_for_display(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Sun => "日",
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
    };
    format!(
        "{}/{:02}/{:02} ({})",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}
