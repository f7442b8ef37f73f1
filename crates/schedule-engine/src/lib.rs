//! # schedule-engine
//!
//! Weekly class occurrence expansion and make-up lesson conflict checking for
//! the school agenda.
//!
//! Every route that needs to know when a class meets goes through this crate:
//! validating a make-up lesson (reposição) against the instructor's classes,
//! and expanding classes into the combined agenda feed. All functions are pure
//! and take already-fetched rows; nothing here touches the network, the disk or
//! the clock.
//!
//! ## Modules
//!
//! - [`occurrences`] — class definition → lazy sequence of lesson start times
//! - [`conflict`] — first overlap between a make-up lesson and an instructor's lessons
//! - [`calendar`] — agenda feed entries for lessons and make-up lessons
//! - [`projection`] — projected end date and progress percentage
//! - [`weekday`] — weekday spelling normalisation
//! - [`policy`] — handling of unknown weekday spellings
//! - [`model`] — class, make-up lesson and request records
//! - [`config`] — durations and feed styling
//! - [`parse`] — date and time string parsing
//! - [`error`] — Error types

pub mod calendar;
pub mod config;
pub mod conflict;
pub mod error;
pub mod model;
pub mod occurrences;
pub mod parse;
pub mod policy;
pub mod projection;
pub mod weekday;

pub use calendar::{assemble_feed, CalendarEntry, EntryKind};
pub use config::ScheduleConfig;
pub use conflict::{check_conflict, check_request, Conflict, Interval};
pub use error::ScheduleError;
pub use model::{Attendance, ClassStatus, MakeUpLesson, MakeUpRequest, RecordId, RecurringClass};
pub use occurrences::{generate_occurrences, generate_occurrences_with, Occurrences};
pub use policy::UnknownWeekday;
pub use projection::{progress_percent, projected_end_date};
