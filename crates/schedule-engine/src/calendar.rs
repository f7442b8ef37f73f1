//! Calendar feed assembly.
//!
//! Produces the flat list of entries the agenda view renders: one entry per
//! make-up lesson, followed by one entry per lesson of every active class.
//! Entries are not sorted; the calendar widget places them by `start`.

use serde::Serialize;

use crate::config::{FeedStyle, ScheduleConfig};
use crate::model::{Attendance, MakeUpLesson, RecordId, RecurringClass};
use crate::parse::format_local;

/// Kind tag the front end switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    #[serde(rename = "aula")]
    Lesson,
    #[serde(rename = "reposicao")]
    MakeUp,
}

/// One event in the agenda feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEntry {
    pub id: RecordId,
    pub title: String,
    /// Local ISO-8601 timestamp, no timezone.
    pub start: String,
    pub color: String,
    #[serde(rename = "tipo")]
    pub kind: EntryKind,
    #[serde(flatten)]
    pub details: Option<MakeUpDetails>,
}

/// Extra fields carried by make-up entries for the detail dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MakeUpDetails {
    #[serde(rename = "nome_aluno")]
    pub student_name: String,
    #[serde(rename = "nome_prof")]
    pub instructor_name: String,
    #[serde(rename = "conteudo")]
    pub content: Option<String>,
    #[serde(rename = "turma")]
    pub class_code: Option<String>,
    #[serde(rename = "presenca")]
    pub attendance: Attendance,
    #[serde(rename = "observacoes")]
    pub observations: Option<String>,
    #[serde(rename = "arquivo")]
    pub attachment: Option<String>,
    #[serde(rename = "extendedProps")]
    pub extended_props: ExtendedProps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedProps {
    #[serde(rename = "conteudo")]
    pub content: Option<String>,
    #[serde(rename = "id_criador")]
    pub created_by: Option<String>,
}

/// Synthetic id of the `index`-th (0-based) lesson of class `code`.
pub fn lesson_entry_id(code: &str, index: usize) -> String {
    format!("aula-{}-{}", code, index)
}

/// Expand one class into lesson entries. Inactive or unschedulable classes
/// produce none.
pub fn lesson_entries(class: &RecurringClass, config: &ScheduleConfig) -> Vec<CalendarEntry> {
    let style = &config.feed;
    let title = lesson_title(class, style);

    class
        .occurrences(config)
        .enumerate()
        .map(|(index, start)| CalendarEntry {
            id: RecordId::Text(lesson_entry_id(&class.code, index)),
            title: title.clone(),
            start: format_local(start),
            color: style.lesson_color.clone(),
            kind: EntryKind::Lesson,
            details: None,
        })
        .collect()
}

fn lesson_title(class: &RecurringClass, style: &FeedStyle) -> String {
    let instructor = class
        .instructor_name
        .as_deref()
        .unwrap_or(&style.missing_instructor_label);
    format!(
        "{} {} - {} ({})",
        style.lesson_title_prefix,
        class.code,
        class.course.as_deref().unwrap_or_default(),
        instructor
    )
}

/// Build the entry for a persisted make-up lesson.
pub fn make_up_entry(lesson: &MakeUpLesson, style: &FeedStyle) -> CalendarEntry {
    let student_name = lesson
        .student_name
        .clone()
        .unwrap_or_else(|| style.missing_student_label.clone());
    let instructor_name = lesson
        .instructor_name
        .clone()
        .unwrap_or_else(|| "?".to_string());

    CalendarEntry {
        id: lesson.id.clone(),
        title: format!("{} {}", style.makeup_title_prefix, student_name),
        start: lesson.start.clone(),
        color: style.makeup_color.clone(),
        kind: EntryKind::MakeUp,
        details: Some(MakeUpDetails {
            student_name,
            instructor_name,
            content: lesson.content.clone(),
            class_code: lesson.class_code.clone(),
            attendance: lesson.attendance,
            observations: lesson.observations.clone(),
            attachment: lesson.attachment.clone(),
            extended_props: ExtendedProps {
                content: lesson.content.clone(),
                created_by: lesson.created_by.clone(),
            },
        }),
    }
}

/// Merge make-up lessons and expanded class lessons into one feed.
///
/// Tenant and role filtering is the caller's job; every class passed in that is
/// active and schedulable is expanded.
pub fn assemble_feed(
    classes: &[RecurringClass],
    make_ups: &[MakeUpLesson],
    config: &ScheduleConfig,
) -> Vec<CalendarEntry> {
    let mut feed: Vec<CalendarEntry> = make_ups
        .iter()
        .map(|lesson| make_up_entry(lesson, &config.feed))
        .collect();

    for class in classes {
        feed.extend(lesson_entries(class, config));
    }

    feed
}
