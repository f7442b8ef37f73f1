//! Records the engine reads: recurring classes, make-up lessons and make-up
//! requests.
//!
//! Field names follow the engine's vocabulary; serde aliases accept the column
//! names of the hosted tables (`tb_turmas`, `tb_reposicoes`) so rows can be fed
//! in without reshaping.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::config::ScheduleConfig;
use crate::occurrences::{generate_occurrences_with, Occurrences};

/// Lifecycle status of a recurring class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClassStatus {
    InProgress,
    Planned,
    Closed,
    /// Any other state. Inactive.
    Other(String),
}

impl ClassStatus {
    /// Only running and planned classes occupy the instructor's calendar.
    pub fn is_active(&self) -> bool {
        matches!(self, ClassStatus::InProgress | ClassStatus::Planned)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ClassStatus::InProgress => "in progress",
            ClassStatus::Planned => "planned",
            ClassStatus::Closed => "closed",
            ClassStatus::Other(label) => label,
        }
    }
}

impl From<&str> for ClassStatus {
    fn from(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "in progress" | "in_progress" | "em andamento" => ClassStatus::InProgress,
            "planned" | "planejada" => ClassStatus::Planned,
            "closed" | "fechada" => ClassStatus::Closed,
            _ => ClassStatus::Other(label.to_string()),
        }
    }
}

impl From<String> for ClassStatus {
    fn from(label: String) -> Self {
        ClassStatus::from(label.as_str())
    }
}

impl From<ClassStatus> for String {
    fn from(status: ClassStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A weekly recurring class (turma).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringClass {
    #[serde(alias = "codigo_turma")]
    pub code: String,
    #[serde(default, alias = "id_professor")]
    pub instructor_id: Option<i64>,
    /// Free-text weekday. Blank (or null in the row) means not yet scheduled.
    #[serde(default, alias = "dia_semana", deserialize_with = "null_as_empty")]
    pub weekday: String,
    /// Time window, e.g. `"14:00-16:30"`. Only the start is used.
    #[serde(default, alias = "horario")]
    pub start_time: Option<String>,
    #[serde(default, alias = "data_inicio")]
    pub start_date: Option<String>,
    #[serde(default, alias = "qtd_aulas")]
    pub lesson_count: Option<i64>,
    pub status: ClassStatus,
    #[serde(default, alias = "nome_curso")]
    pub course: Option<String>,
    #[serde(default)]
    pub instructor_name: Option<String>,
}

impl RecurringClass {
    /// Whether this class is taught by `instructor_id` and still active.
    pub fn is_taught_by(&self, instructor_id: i64) -> bool {
        self.instructor_id == Some(instructor_id) && self.status.is_active()
    }

    /// Lesson start times of this class.
    ///
    /// Empty for inactive classes and for classes missing a weekday, start
    /// date, lesson count or time window.
    pub fn occurrences(&self, config: &ScheduleConfig) -> Occurrences {
        if !self.status.is_active() {
            return Occurrences::empty();
        }
        let weekday = Some(self.weekday.as_str()).filter(|w| !w.trim().is_empty());
        let (Some(weekday), Some(start_date), Some(start_time), Some(lesson_count)) = (
            weekday,
            self.start_date.as_deref(),
            self.start_time.as_deref(),
            self.lesson_count,
        ) else {
            debug!(class = %self.code, "class not yet schedulable, skipping");
            return Occurrences::empty();
        };
        generate_occurrences_with(
            start_date,
            weekday,
            start_time,
            lesson_count,
            config.unknown_weekday,
        )
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Database identifier as it comes back from the data store: numeric or text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// Attendance of a make-up lesson. Stored as a nullable boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Attendance {
    #[default]
    Pending,
    Present,
    Absent,
}

impl From<Option<bool>> for Attendance {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Attendance::Present,
            Some(false) => Attendance::Absent,
            None => Attendance::Pending,
        }
    }
}

impl From<Attendance> for Option<bool> {
    fn from(value: Attendance) -> Self {
        match value {
            Attendance::Present => Some(true),
            Attendance::Absent => Some(false),
            Attendance::Pending => None,
        }
    }
}

/// A scheduled make-up lesson (reposição), already persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakeUpLesson {
    pub id: RecordId,
    #[serde(default, alias = "id_aluno")]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default, alias = "id_professor")]
    pub instructor_id: Option<i64>,
    #[serde(default)]
    pub instructor_name: Option<String>,
    #[serde(default, alias = "codigo_turma")]
    pub class_code: Option<String>,
    /// `YYYY-MM-DDTHH:MM`, passed through to the calendar untouched.
    #[serde(alias = "data_reposicao")]
    pub start: String,
    #[serde(default, alias = "conteudo_aula")]
    pub content: Option<String>,
    #[serde(default, alias = "motivo")]
    pub reason: Option<String>,
    #[serde(default, alias = "observacoes")]
    pub observations: Option<String>,
    #[serde(default, alias = "presenca")]
    pub attendance: Attendance,
    /// Public URL of the signed attendance sheet.
    #[serde(default, alias = "arquivo_assinatura")]
    pub attachment: Option<String>,
    #[serde(default, alias = "criado_por")]
    pub created_by: Option<String>,
}

/// A proposed make-up lesson to validate before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeUpRequest {
    #[serde(alias = "id_professor")]
    pub instructor_id: i64,
    /// `YYYY-MM-DDTHH:MM`.
    #[serde(alias = "data_hora")]
    pub start: String,
}
