//! Tests for projected end dates and progress percentages.

use chrono::NaiveDate;
use schedule_engine::{progress_percent, projected_end_date};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ---------------------------------------------------------------------------
// Projected end date
// ---------------------------------------------------------------------------

#[test]
fn end_date_counts_weeks_from_start() {
    assert_eq!(
        projected_end_date(Some("2024-01-01"), Some(3)),
        Some(date(2024, 1, 15))
    );
}

#[test]
fn single_lesson_ends_on_start_date() {
    assert_eq!(
        projected_end_date(Some("2024-01-01"), Some(1)),
        Some(date(2024, 1, 1))
    );
}

#[test]
fn end_date_missing_inputs() {
    assert_eq!(projected_end_date(None, Some(3)), None);
    assert_eq!(projected_end_date(Some("2024-01-01"), None), None);
    assert_eq!(projected_end_date(Some("2024-01-01"), Some(0)), None);
    assert_eq!(projected_end_date(Some("not a date"), Some(3)), None);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[test]
fn first_lesson_released_on_start_date() {
    assert_eq!(progress_percent(Some("2024-01-01"), 10, date(2024, 1, 1)), 10);
}

#[test]
fn one_more_lesson_each_week() {
    assert_eq!(progress_percent(Some("2024-01-01"), 10, date(2024, 1, 7)), 10);
    assert_eq!(progress_percent(Some("2024-01-01"), 10, date(2024, 1, 8)), 20);
    assert_eq!(progress_percent(Some("2024-01-01"), 10, date(2024, 1, 29)), 50);
}

#[test]
fn progress_capped_at_hundred() {
    assert_eq!(progress_percent(Some("2024-01-01"), 4, date(2025, 6, 1)), 100);
}

#[test]
fn progress_before_start_is_zero() {
    assert_eq!(progress_percent(Some("2024-01-01"), 10, date(2023, 12, 31)), 0);
    assert_eq!(progress_percent(Some("2024-01-01"), 10, date(2023, 6, 1)), 0);
}

#[test]
fn progress_rounds_to_nearest() {
    // 1 of 3 lessons → 33.3 %, 2 of 3 → 66.7 %.
    assert_eq!(progress_percent(Some("2024-01-01"), 3, date(2024, 1, 1)), 33);
    assert_eq!(progress_percent(Some("2024-01-01"), 3, date(2024, 1, 8)), 67);
}

#[test]
fn progress_halves_round_to_even() {
    // 1, 3 and 5 of 8 lessons: 12.5 %, 37.5 %, 62.5 %.
    assert_eq!(progress_percent(Some("2024-01-01"), 8, date(2024, 1, 1)), 12);
    assert_eq!(progress_percent(Some("2024-01-01"), 8, date(2024, 1, 15)), 38);
    assert_eq!(progress_percent(Some("2024-01-01"), 8, date(2024, 1, 29)), 62);
}

#[test]
fn progress_without_data_is_zero() {
    assert_eq!(progress_percent(None, 10, date(2024, 1, 1)), 0);
    assert_eq!(progress_percent(Some("2024-01-01"), 0, date(2024, 3, 1)), 0);
    assert_eq!(progress_percent(Some("garbage"), 10, date(2024, 3, 1)), 0);
}
