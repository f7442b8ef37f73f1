//! Make-up lesson conflict checking.
//!
//! A make-up lesson may not overlap any lesson of any active class taught by
//! the same instructor. Intervals are half-open: a lesson ending exactly when
//! another starts is NOT a conflict.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::config::ScheduleConfig;
use crate::error::{Result, ScheduleError};
use crate::model::{MakeUpRequest, RecurringClass};
use crate::parse::parse_datetime;

/// Half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// # Panics
    /// If `start + duration` is outside chrono's date range. See
    /// [`Interval::checked_starting_at`].
    pub fn starting_at(start: NaiveDateTime, duration: Duration) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// `None` when the end is not representable.
    pub fn checked_starting_at(start: NaiveDateTime, duration: Duration) -> Option<Self> {
        let end = start.checked_add_signed(duration)?;
        Some(Self { start, end })
    }

    /// `self.start < other.end && self.end > other.start`. Symmetric.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// The first class lesson found to overlap a candidate make-up lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub class_code: String,
    /// 0-based position of the lesson within its class.
    pub occurrence_index: usize,
    pub occurrence: Interval,
}

impl Conflict {
    /// HTTP status the rejection is surfaced with.
    pub const STATUS: u16 = 409;
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Conflito de horário com turma {}.", self.class_code)
    }
}

/// Check a candidate make-up interval against the classes of one instructor.
///
/// Classes not taught by `instructor_id`, or not in progress/planned, are
/// ignored. Classes are scanned in the order given and each class's lessons in
/// chronological order; the first overlap wins.
pub fn check_conflict(
    candidate: Interval,
    instructor_id: i64,
    classes: &[RecurringClass],
    config: &ScheduleConfig,
) -> Option<Conflict> {
    let lesson = config.lesson_duration();

    for class in classes.iter().filter(|c| c.is_taught_by(instructor_id)) {
        for (index, start) in class.occurrences(config).enumerate() {
            // Lessons are chronological; nothing later can overlap.
            if start >= candidate.end {
                break;
            }
            let Some(occurrence) = Interval::checked_starting_at(start, lesson) else {
                continue;
            };
            if candidate.overlaps(&occurrence) {
                debug!(class = %class.code, %start, "make-up lesson conflicts");
                return Some(Conflict {
                    class_code: class.code.clone(),
                    occurrence_index: index,
                    occurrence,
                });
            }
        }
    }

    None
}

/// Parse a make-up request and check it with [`check_conflict`], using the
/// configured make-up duration.
///
/// # Errors
/// Returns `ScheduleError::InvalidDateTime` if the request's start is not a
/// `YYYY-MM-DDTHH:MM` date-time, or if the make-up lesson would end past the
/// last representable date.
pub fn check_request(
    request: &MakeUpRequest,
    classes: &[RecurringClass],
    config: &ScheduleConfig,
) -> Result<Option<Conflict>> {
    let start = parse_datetime(&request.start)?;
    let candidate = Interval::checked_starting_at(start, config.makeup_duration())
        .ok_or_else(|| ScheduleError::InvalidDateTime(request.start.clone()))?;
    Ok(check_conflict(
        candidate,
        request.instructor_id,
        classes,
        config,
    ))
}
