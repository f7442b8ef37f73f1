//! Property-based tests for occurrence generation and conflict checking.
//!
//! These verify invariants that should hold for *any* valid class definition,
//! not just the specific examples in `occurrence_tests.rs`.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};
use proptest::prelude::*;
use schedule_engine::{
    check_conflict, generate_occurrences, ClassStatus, Interval, RecurringClass, ScheduleConfig,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_weekday() -> impl Strategy<Value = (&'static str, Weekday)> {
    prop_oneof![
        Just(("Segunda-feira", Weekday::Mon)),
        Just(("Terça", Weekday::Tue)),
        Just(("Quarta-feira", Weekday::Wed)),
        Just(("Thursday", Weekday::Thu)),
        Just(("Sexta", Weekday::Fri)),
        Just(("Sabado", Weekday::Sat)),
        Just(("Domingo", Weekday::Sun)),
    ]
}

/// Start dates in the 2023-2027 range. Day capped at 28 to avoid invalid
/// month/day combos.
fn arb_start_date() -> impl Strategy<Value = String> {
    (2023u32..=2027, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

fn arb_time() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=21, prop_oneof![Just(0u32), Just(15), Just(30), Just(45)])
}

fn arb_count() -> impl Strategy<Value = i64> {
    1i64..=60
}

fn arb_interval() -> impl Strategy<Value = Interval> {
    (0i64..10_000, 1i64..600).prop_map(|(offset, len)| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let start = base + Duration::minutes(offset);
        Interval::new(start, start + Duration::minutes(len))
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

fn class(
    code: &str,
    instructor_id: i64,
    weekday: &str,
    date: &str,
    hh: u32,
    mm: u32,
    n: i64,
) -> RecurringClass {
    RecurringClass {
        code: code.to_string(),
        instructor_id: Some(instructor_id),
        weekday: weekday.to_string(),
        start_time: Some(format!("{:02}:{:02}", hh, mm)),
        start_date: Some(date.to_string()),
        lesson_count: Some(n),
        status: ClassStatus::InProgress,
        course: None,
        instructor_name: None,
    }
}

// ---------------------------------------------------------------------------
// Property 1: exactly `n` occurrences
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn produces_exactly_lesson_count(
        (name, _) in arb_weekday(),
        date in arb_start_date(),
        (hh, mm) in arb_time(),
        n in arb_count(),
    ) {
        let time = format!("{:02}:{:02}", hh, mm);
        let result: Vec<NaiveDateTime> = generate_occurrences(&date, name, &time, n).collect();
        prop_assert_eq!(result.len() as i64, n);
    }
}

// ---------------------------------------------------------------------------
// Property 2: weekly spacing, same time of day, first on the weekday
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn weekly_on_weekday_at_same_time(
        (name, day) in arb_weekday(),
        date in arb_start_date(),
        (hh, mm) in arb_time(),
        n in arb_count(),
    ) {
        let time = format!("{:02}:{:02}", hh, mm);
        let result: Vec<NaiveDateTime> = generate_occurrences(&date, name, &time, n).collect();
        let start = NaiveDate::parse_from_str(&date, "%Y-%m-%d").unwrap();

        prop_assert_eq!(result[0].weekday(), day);
        prop_assert!(result[0].date() >= start);
        prop_assert!(result[0].date() - start < Duration::days(7));

        for occurrence in &result {
            prop_assert_eq!(occurrence.hour(), hh);
            prop_assert_eq!(occurrence.minute(), mm);
        }
        for pair in result.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::weeks(1));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: non-positive counts produce nothing
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn non_positive_count_is_empty(
        (name, _) in arb_weekday(),
        date in arb_start_date(),
        n in -100i64..=0,
    ) {
        prop_assert_eq!(generate_occurrences(&date, name, "14:00", n).count(), 0);
    }
}

// ---------------------------------------------------------------------------
// Property 4: overlap is symmetric and strict at the boundary
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn overlap_is_symmetric(a in arb_interval(), b in arb_interval()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn touching_never_overlaps(a in arb_interval(), len in 1i64..600) {
        let after = Interval::new(a.end, a.end + Duration::minutes(len));
        prop_assert!(!a.overlaps(&after));
        prop_assert!(!after.overlaps(&a));
    }
}

// ---------------------------------------------------------------------------
// Property 5: another instructor's classes never conflict
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn other_instructor_never_conflicts(
        (name, _) in arb_weekday(),
        date in arb_start_date(),
        (hh, mm) in arb_time(),
        n in arb_count(),
        candidate in arb_interval(),
    ) {
        let classes = vec![class("B-1", 2, name, &date, hh, mm, n)];
        let result = check_conflict(candidate, 1, &classes, &ScheduleConfig::default());
        prop_assert!(result.is_none());
    }

    #[test]
    fn make_up_at_any_lesson_start_conflicts(
        (name, _) in arb_weekday(),
        date in arb_start_date(),
        (hh, mm) in arb_time(),
        n in arb_count(),
        pick in any::<prop::sample::Index>(),
    ) {
        let time = format!("{:02}:{:02}", hh, mm);
        let lessons: Vec<NaiveDateTime> = generate_occurrences(&date, name, &time, n).collect();
        let index = pick.index(lessons.len());
        let candidate = Interval::starting_at(lessons[index], Duration::hours(1));

        let classes = vec![class("A-1", 1, name, &date, hh, mm, n)];
        let conflict = check_conflict(candidate, 1, &classes, &ScheduleConfig::default());

        prop_assert_eq!(conflict.map(|c| c.occurrence_index), Some(index));
    }
}
