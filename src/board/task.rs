//! Task records and the draft entry form state.

use crate::utils::datetime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable task identifier assigned at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Next priority in Low -> Medium -> High -> Low order
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous priority in Low -> Medium -> High -> Low order
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single to-do item.
///
/// Field names serialize in camelCase (`dueDate`, `isEditing`) so that task
/// lists saved by earlier releases load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, with = "datetime::optional_due_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_editing: bool,
}

impl Task {
    pub fn new(text: impl Into<String>, priority: Priority, due_date: Option<NaiveDate>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            done: false,
            priority,
            due_date,
            is_editing: false,
        }
    }
}

/// The in-progress new-task form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftEntry {
    pub text: String,
    pub priority: Priority,
    /// Raw due date text as typed, `YYYY-MM-DD` or empty
    pub due_date: String,
}

impl DraftEntry {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
