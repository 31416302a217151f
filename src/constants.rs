//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application
pub const APP_NAME: &str = "taskmaster";
pub const APP_TITLE: &str = "Task Master";

// Persistence slots
pub const TASKS_SLOT: &str = "tasks";
pub const THEME_SLOT: &str = "darkMode";
/// Version tag written alongside the serialized task list
pub const TASKS_SCHEMA_VERSION: u32 = 1;

// Validation Error Messages
pub const ERROR_TASK_EMPTY: &str = "Task cannot be empty.";
pub const ERROR_DUE_DATE_PAST: &str = "Due date cannot be in the past.";
pub const ERROR_EDIT_TEXT_EMPTY: &str = "Task text cannot be empty!";

// Calendar Messages
pub const DEFAULT_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";
pub const ERROR_CALENDAR_NO_DUE_DATE: &str = "Please set a due date before adding to Google Calendar.";
pub const ERROR_CALENDAR_OPEN_FAILED: &str = "Error adding task to Google Calendar.";
pub const INFO_CALENDAR_OPENED: &str = "📅 Opened calendar link";
pub const INFO_CALENDAR_LINK: &str = "📅 Calendar link";

// Success Messages
pub const SUCCESS_TASK_ADDED: &str = "✅ Task added";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";

// Placeholders
pub const DRAFT_PLACEHOLDER: &str = "What do you need to do?";
pub const DUE_DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Press 'a' to add one.";
pub const EMPTY_FILTER_MESSAGE: &str = "No tasks match the current filters. Press 'f' or 'p' to change them.";

// UI Layout Constants
/// Height of the draft entry form including borders
pub const DRAFT_FORM_HEIGHT: u16 = 3;
/// Width of the priority selector in the draft form
pub const PRIORITY_FIELD_WIDTH: u16 = 14;
/// Width of the due date input in the draft form
pub const DUE_DATE_FIELD_WIDTH: u16 = 16;
