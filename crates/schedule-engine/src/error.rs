//! Error types for schedule-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid date-time: {0}")]
    InvalidDateTime(String),

    #[error("Unknown weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid lesson count: {0}")]
    InvalidLessonCount(i64),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
