//! Parsing of the date and time strings stored on class and make-up rows.
//!
//! All values are naive local times. No timezone conversion is performed
//! anywhere in the engine; the calendar front end displays them as-is.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, ScheduleError};

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(raw.to_string()))
}

/// Parse the start of a time window.
///
/// Accepts `"HH:MM"`, `"HH:MM:SS"` or a range such as `"14:00 - 16:30"`; only
/// the part before the first `-` is used.
pub fn parse_time_of_day(window: &str) -> Result<NaiveTime> {
    let start = window.split('-').next().unwrap_or_default().trim();
    NaiveTime::parse_from_str(start, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(start, "%H:%M:%S"))
        .map_err(|_| ScheduleError::InvalidTime(window.to_string()))
}

/// Parse a `YYYY-MM-DDTHH:MM` (optionally `:SS`) local date-time, as sent by
/// the make-up lesson form.
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    let raw_trimmed = raw.trim();
    NaiveDateTime::parse_from_str(raw_trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw_trimmed, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ScheduleError::InvalidDateTime(raw.to_string()))
}

/// Format a timestamp the way calendar entries carry it (`YYYY-MM-DDTHH:MM:SS`).
pub fn format_local(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}
