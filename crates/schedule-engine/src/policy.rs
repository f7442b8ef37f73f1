//! Policy for weekday spellings missing from the normalisation table.

use serde::{Deserialize, Serialize};

/// What to do when a class's weekday does not map to a known day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownWeekday {
    /// Treat the class as meeting on Monday. Matches the historical behaviour
    /// of the scheduling routes, so existing rows with typos keep their slots.
    #[default]
    DefaultMonday,
    /// Treat the class as unschedulable: it yields no occurrences.
    Reject,
}
