//! Scheduling constants and calendar presentation settings.
//!
//! Every field has a default, so an empty or partial config source still
//! deserializes into a usable [`ScheduleConfig`].

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::policy::UnknownWeekday;

/// Length of one recurring-class lesson (2h30).
pub const LESSON_MINUTES: u32 = 150;

/// Length of one make-up lesson.
pub const MAKEUP_MINUTES: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Duration of each recurring-class occurrence, in minutes.
    pub lesson_minutes: u32,
    /// Duration of a make-up lesson, in minutes.
    pub makeup_minutes: u32,
    /// How unmapped weekday spellings are handled.
    pub unknown_weekday: UnknownWeekday,
    /// Calendar feed styling.
    pub feed: FeedStyle,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            lesson_minutes: LESSON_MINUTES,
            makeup_minutes: MAKEUP_MINUTES,
            unknown_weekday: UnknownWeekday::default(),
            feed: FeedStyle::default(),
        }
    }
}

impl ScheduleConfig {
    pub fn lesson_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.lesson_minutes))
    }

    pub fn makeup_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.makeup_minutes))
    }
}

/// Colours and labels used when building calendar entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedStyle {
    pub lesson_color: String,
    pub makeup_color: String,
    pub lesson_title_prefix: String,
    pub makeup_title_prefix: String,
    /// Shown in a lesson title when the class has no instructor joined.
    pub missing_instructor_label: String,
    /// Shown in a make-up title when the student name is unknown.
    pub missing_student_label: String,
}

impl Default for FeedStyle {
    fn default() -> Self {
        Self {
            lesson_color: "#0088cc".to_string(),
            makeup_color: "#ff4d4d".to_string(),
            lesson_title_prefix: "📚".to_string(),
            makeup_title_prefix: "🔄 Reposição:".to_string(),
            missing_instructor_label: "Sem Prof".to_string(),
            missing_student_label: "Aluno?".to_string(),
        }
    }
}
