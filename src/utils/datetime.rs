//! Date and time utility functions
//!
//! This module provides the date string format used for stored delivery
//! dates, plus human-readable formatting for listing leads (e.g. "today",
//! "tomorrow", "next Friday").

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};

/// Storage format for delivery dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage format for record timestamps (local time, no offset)
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Format a local timestamp as YYYY-MM-DDTHH:MM:SS
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Current local wall-clock time, read once per operation by callers.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Format a date relative to `today`
///
/// # Arguments
/// * `date` - Date to describe
/// * `today` - Reference date
///
/// # Returns
/// * `String` - Human-readable date format
pub fn format_human_date(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
