//! Weekday normalisation.
//!
//! Class rows store the weekday as free text typed by staff ("Segunda-feira",
//! "Terça", "Sabado", "Wednesday", ...). Everything is folded to a
//! [`chrono::Weekday`], whose Monday-based index (0 = Monday .. 6 = Sunday) is
//! what the occurrence arithmetic works with.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use crate::error::{Result, ScheduleError};
use crate::policy::UnknownWeekday;

/// Accepted spellings, lowercase. Lookup happens after the raw value is cut at
/// the first `-` and trimmed, so "-feira" suffixes never reach this table.
pub const WEEKDAY_NAMES: &[(&str, Weekday)] = &[
    ("segunda", Weekday::Mon),
    ("seg", Weekday::Mon),
    ("monday", Weekday::Mon),
    ("mon", Weekday::Mon),
    ("terça", Weekday::Tue),
    ("terca", Weekday::Tue),
    ("ter", Weekday::Tue),
    ("tuesday", Weekday::Tue),
    ("tue", Weekday::Tue),
    ("quarta", Weekday::Wed),
    ("qua", Weekday::Wed),
    ("wednesday", Weekday::Wed),
    ("wed", Weekday::Wed),
    ("quinta", Weekday::Thu),
    ("qui", Weekday::Thu),
    ("thursday", Weekday::Thu),
    ("thu", Weekday::Thu),
    ("sexta", Weekday::Fri),
    ("sex", Weekday::Fri),
    ("friday", Weekday::Fri),
    ("fri", Weekday::Fri),
    ("sábado", Weekday::Sat),
    ("sabado", Weekday::Sat),
    ("sáb", Weekday::Sat),
    ("sab", Weekday::Sat),
    ("saturday", Weekday::Sat),
    ("sat", Weekday::Sat),
    ("domingo", Weekday::Sun),
    ("dom", Weekday::Sun),
    ("sunday", Weekday::Sun),
    ("sun", Weekday::Sun),
];

/// Strip a trailing "-feira" style suffix and surrounding whitespace.
fn base_name(raw: &str) -> &str {
    raw.split('-').next().unwrap_or_default().trim()
}

/// Parse a weekday spelling strictly.
///
/// # Errors
/// Returns `ScheduleError::InvalidWeekday` if the spelling is not in
/// [`WEEKDAY_NAMES`].
pub fn parse_weekday(raw: &str) -> Result<Weekday> {
    let key = base_name(raw).to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, day)| *day)
        .ok_or_else(|| ScheduleError::InvalidWeekday(raw.to_string()))
}

/// Parse a weekday spelling, applying `policy` when it is unknown.
///
/// Returns `None` only under [`UnknownWeekday::Reject`].
pub fn resolve_weekday(raw: &str, policy: UnknownWeekday) -> Option<Weekday> {
    match parse_weekday(raw) {
        Ok(day) => Some(day),
        Err(_) => match policy {
            UnknownWeekday::DefaultMonday => {
                warn!(weekday = raw, "unknown weekday, scheduling on Monday");
                Some(Weekday::Mon)
            }
            UnknownWeekday::Reject => {
                warn!(weekday = raw, "unknown weekday, class not schedulable");
                None
            }
        },
    }
}

/// Canonical 0 (Monday) .. 6 (Sunday) index.
pub fn weekday_index(day: Weekday) -> u32 {
    day.num_days_from_monday()
}

/// Days to add to `from` to land on the next `target` (0 when `from` already
/// falls on it).
pub fn days_until(from: NaiveDate, target: Weekday) -> u32 {
    (weekday_index(target) + 7 - weekday_index(from.weekday())) % 7
}

