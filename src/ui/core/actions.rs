use crate::board::{Priority, TaskId};

/// Which part of the screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    TaskList,
    DraftForm,
}

/// Input field of the draft form that has the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Text,
    Priority,
    DueDate,
}

impl DraftField {
    /// Next field in Tab order, wrapping around
    pub fn next(self) -> Self {
        match self {
            DraftField::Text => DraftField::Priority,
            DraftField::Priority => DraftField::DueDate,
            DraftField::DueDate => DraftField::Text,
        }
    }

    /// Previous field in Tab order, wrapping around
    pub fn previous(self) -> Self {
        match self {
            DraftField::Text => DraftField::DueDate,
            DraftField::Priority => DraftField::Text,
            DraftField::DueDate => DraftField::Priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    Focus(Focus),

    // Draft entry
    SetDraftText(String),
    SetDraftPriority(Priority),
    SetDraftDueDate(String),
    AddTask,

    // Task operations
    ToggleDone(TaskId),
    DeleteTask(TaskId),
    StartEditing(TaskId),
    CancelEditing(TaskId),
    SaveEdit {
        id: TaskId,
        text: String,
        priority: Priority,
        due_date: String,
    },
    AddToCalendar(TaskId),

    // View
    CycleDoneFilter,
    CyclePriorityFilter,
    ToggleTheme,
    CycleIconTheme,

    // UI actions
    ShowDialog(DialogType),
    HideDialog,
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    DeleteConfirmation { task_id: TaskId, text: String },
    Info(String),
    Error(String),
    Help,
    Logs,
}
