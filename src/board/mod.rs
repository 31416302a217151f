//! The task board: single owner of the task list, the draft entry, the view
//! filters, the theme flag and the last validation error.
//!
//! Every mutation goes through a named [`TaskBoard`] method. Mutations of the
//! task list or theme flag are mirrored to [`Persistence`] before the method
//! returns; a failed save is logged and the in-memory change is kept.

pub mod filter;
pub mod task;
pub mod validator;

use chrono::{DateTime, NaiveDate, Utc};

use crate::storage::Persistence;

pub use filter::{filtered_view, DoneFilter, FilterSelector, FilterState};
pub use task::{DraftEntry, Priority, Task, TaskId};
pub use validator::{parse_due_date, validate_draft, NewTask, ValidationError};

/// Errors returned by board operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),
}

pub struct TaskBoard {
    tasks: Vec<Task>,
    draft: DraftEntry,
    filters: FilterState,
    dark_mode: bool,
    error: Option<String>,
    persistence: Persistence,
}

impl TaskBoard {
    /// Restore the board from storage, falling back to an empty list and a
    /// light theme
    pub async fn load(persistence: Persistence) -> Self {
        Self::load_with_theme_default(persistence, false).await
    }

    /// Restore the board from storage, using `default_dark_mode` when no theme
    /// was ever saved
    pub async fn load_with_theme_default(persistence: Persistence, default_dark_mode: bool) -> Self {
        let tasks = persistence.load_tasks().await.unwrap_or_default();
        let dark_mode = persistence.load_theme().await.unwrap_or(default_dark_mode);
        log::info!("Board loaded: {} tasks, dark mode {}", tasks.len(), dark_mode);

        Self {
            tasks,
            draft: DraftEntry::default(),
            filters: FilterState::default(),
            dark_mode,
            error: None,
            persistence,
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    #[must_use]
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Tasks passing the current filters, in list order
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filtered_view(&self.tasks, &self.filters)
    }

    #[must_use]
    pub fn draft(&self) -> &DraftEntry {
        &self.draft
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Last validation failure from [`TaskBoard::add_task`]
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    pub fn set_draft_due_date(&mut self, due_date: impl Into<String>) {
        self.draft.due_date = due_date.into();
    }

    /// Add the draft as a new task, validating against the current time
    pub async fn add_task(&mut self) -> Result<TaskId, ValidationError> {
        self.add_task_on(Utc::now()).await
    }

    /// Add the draft as a new task, validating due dates against `now`.
    ///
    /// On failure the error message is recorded and nothing else changes.
    pub async fn add_task_on(&mut self, now: DateTime<Utc>) -> Result<TaskId, ValidationError> {
        let new_task = match validate_draft(&self.draft, now) {
            Ok(new_task) => new_task,
            Err(e) => {
                log::debug!("Draft rejected: {}", e);
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        let task = Task::new(new_task.text, new_task.priority, new_task.due_date);
        let id = task.id;
        log::info!("Adding task {} '{}'", id, task.text);
        self.tasks.push(task);
        self.draft.reset();
        self.error = None;
        self.persist_tasks().await;
        Ok(id)
    }

    /// Flip the done flag, returning the new value
    pub async fn toggle_done(&mut self, id: TaskId) -> Result<bool, BoardError> {
        let task = self.task_mut(id)?;
        task.done = !task.done;
        let done = task.done;
        log::info!("Task {} marked {}", id, if done { "done" } else { "undone" });
        self.persist_tasks().await;
        Ok(done)
    }

    /// Remove a task, returning it
    pub async fn delete_task(&mut self, id: TaskId) -> Result<Task, BoardError> {
        let position = self.position_of(id).ok_or(BoardError::TaskNotFound(id))?;
        let removed = self.tasks.remove(position);
        log::info!("Deleted task {} '{}'", id, removed.text);
        self.persist_tasks().await;
        Ok(removed)
    }

    /// Put one task into edit mode. Other tasks keep their edit state.
    pub async fn start_editing(&mut self, id: TaskId) -> Result<(), BoardError> {
        self.task_mut(id)?.is_editing = true;
        self.persist_tasks().await;
        Ok(())
    }

    /// Leave edit mode without changing the task
    pub async fn cancel_editing(&mut self, id: TaskId) -> Result<(), BoardError> {
        self.task_mut(id)?.is_editing = false;
        self.persist_tasks().await;
        Ok(())
    }

    /// Replace text, priority and due date of a task in edit mode.
    ///
    /// Blank text is rejected and leaves the task, including its edit flag,
    /// untouched.
    pub async fn save_edited_task(
        &mut self,
        id: TaskId,
        new_text: &str,
        new_priority: Priority,
        new_due_date: Option<NaiveDate>,
    ) -> Result<(), BoardError> {
        if new_text.trim().is_empty() {
            return Err(ValidationError::EmptyEditText.into());
        }

        let task = self.task_mut(id)?;
        task.text = new_text.to_string();
        task.priority = new_priority;
        task.due_date = new_due_date;
        task.is_editing = false;
        log::info!("Saved edits to task {}", id);
        self.persist_tasks().await;
        Ok(())
    }

    pub fn set_filter(&mut self, selector: FilterSelector) {
        self.filters.apply(selector);
    }

    /// Flip the theme flag, returning the new value
    pub async fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        if let Err(e) = self.persistence.save_theme(self.dark_mode).await {
            log::error!("Error saving theme to storage: {:#}", e);
        }
        self.dark_mode
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut Task, BoardError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(BoardError::TaskNotFound(id))
    }

    async fn persist_tasks(&self) {
        if let Err(e) = self.persistence.save_tasks(&self.tasks).await {
            log::error!("Error saving tasks to storage: {:#}", e);
        }
    }
}
