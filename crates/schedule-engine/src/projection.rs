//! Course projections: when a class is expected to finish and how far along it
//! is. Both assume one lesson per week from the start date.

use chrono::{Duration, NaiveDate};

use crate::parse::parse_date;

/// Date of the last lesson, counted from the start date itself:
/// `start + (lesson_count - 1) weeks`.
///
/// `None` for a missing or unparseable date, or a non-positive count.
pub fn projected_end_date(start_date: Option<&str>, lesson_count: Option<i64>) -> Option<NaiveDate> {
    let start = parse_date(start_date?).ok()?;
    let count = lesson_count.filter(|n| *n > 0)?;
    start.checked_add_signed(Duration::try_weeks(count - 1)?)
}

/// Percentage (0..=100) of lessons released by `today`.
///
/// One lesson is released on the start date and one more every 7 days, capped
/// at `total_lessons`. Before the start date nothing is released. Exact halves
/// round to the even percentage (12.5 -> 12, 37.5 -> 38).
pub fn progress_percent(start_date: Option<&str>, total_lessons: i64, today: NaiveDate) -> u8 {
    let Some(start) = start_date.and_then(|raw| parse_date(raw).ok()) else {
        return 0;
    };
    if total_lessons <= 0 {
        return 0;
    }

    let days_elapsed = (today - start).num_days();
    let released = (days_elapsed.div_euclid(7) + 1).clamp(0, total_lessons);

    // released <= total_lessons, so the ratio is within 0..=1.
    ((released as f64 / total_lessons as f64) * 100.0).round_ties_even() as u8
}
