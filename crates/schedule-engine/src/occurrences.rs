//! Occurrence generation -- turns a weekly class definition into the concrete
//! start time of each of its lessons.
//!
//! The first lesson falls on the first date on or after the start date that is
//! the class's weekday; every following lesson is exactly one week later, at the
//! same time of day. Generation is lazy and has no clock dependency, so the
//! same inputs always produce the same sequence.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::parse::{parse_date, parse_time_of_day};
use crate::policy::UnknownWeekday;
use crate::weekday::{days_until, resolve_weekday};

/// Lazy, finite sequence of lesson start times.
///
/// A clone continues independently from the same position; calling the
/// generator again with the same inputs starts over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrences {
    next: NaiveDateTime,
    remaining: u32,
}

impl Occurrences {
    /// The sequence with no lessons.
    pub fn empty() -> Self {
        Self {
            next: NaiveDateTime::MIN,
            remaining: 0,
        }
    }

    /// `count` weekly lessons starting exactly at `first`.
    ///
    /// Empty when the last lesson would fall outside chrono's date range.
    pub fn weekly(first: NaiveDateTime, count: u32) -> Self {
        let span = Duration::weeks(i64::from(count.saturating_sub(1)));
        if count == 0 || first.checked_add_signed(span).is_none() {
            return Self::empty();
        }
        Self {
            next: first,
            remaining: count,
        }
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            // Representable: checked against the last lesson in `weekly`.
            self.next = current + Duration::weeks(1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Occurrences {}

impl std::iter::FusedIterator for Occurrences {}

/// Check that a stored lesson count is usable: positive and within `u32`.
///
/// # Errors
/// Returns `ScheduleError::InvalidLessonCount` otherwise.
pub fn validate_lesson_count(lesson_count: i64) -> Result<u32> {
    u32::try_from(lesson_count)
        .ok()
        .filter(|count| *count > 0)
        .ok_or(ScheduleError::InvalidLessonCount(lesson_count))
}

/// Generate occurrences from already-parsed values.
pub fn occurrences_from(
    start_date: NaiveDate,
    weekday: Weekday,
    time_of_day: NaiveTime,
    lesson_count: u32,
) -> Occurrences {
    let Some(first_date) =
        start_date.checked_add_signed(Duration::days(i64::from(days_until(start_date, weekday))))
    else {
        return Occurrences::empty();
    };
    Occurrences::weekly(first_date.and_time(time_of_day), lesson_count)
}

/// Generate the lesson start times of a weekly class.
///
/// Unknown weekday spellings fall back to Monday; see
/// [`generate_occurrences_with`] to choose another policy.
///
/// # Arguments
/// - `start_date` -- `YYYY-MM-DD`
/// - `weekday` -- weekday spelling, e.g. "Quarta-feira" or "Wednesday"
/// - `time_of_day` -- `HH:MM`, or a window such as `14:00-16:30`
/// - `lesson_count` -- total number of lessons
///
/// Malformed input (unparseable date or time, non-positive count) yields an
/// empty sequence rather than an error.
pub fn generate_occurrences(
    start_date: &str,
    weekday: &str,
    time_of_day: &str,
    lesson_count: i64,
) -> Occurrences {
    generate_occurrences_with(
        start_date,
        weekday,
        time_of_day,
        lesson_count,
        UnknownWeekday::default(),
    )
}

/// Identical to [`generate_occurrences`] with an explicit unknown-weekday policy.
pub fn generate_occurrences_with(
    start_date: &str,
    weekday: &str,
    time_of_day: &str,
    lesson_count: i64,
    policy: UnknownWeekday,
) -> Occurrences {
    let count = match validate_lesson_count(lesson_count) {
        Ok(count) => count,
        Err(e) => {
            debug!(error = %e, "skipping occurrence generation");
            return Occurrences::empty();
        }
    };

    let date = match parse_date(start_date) {
        Ok(date) => date,
        Err(e) => {
            debug!(error = %e, "skipping occurrence generation");
            return Occurrences::empty();
        }
    };

    let time = match parse_time_of_day(time_of_day) {
        Ok(time) => time,
        Err(e) => {
            debug!(error = %e, "skipping occurrence generation");
            return Occurrences::empty();
        }
    };

    let Some(day) = resolve_weekday(weekday, policy) else {
        return Occurrences::empty();
    };

    occurrences_from(date, day, time, count)
}
