//! New-task input validation.

use crate::board::task::{DraftEntry, Priority};
use crate::constants::{ERROR_DUE_DATE_PAST, ERROR_EDIT_TEXT_EMPTY, ERROR_TASK_EMPTY};
use crate::utils::datetime;
use chrono::{DateTime, NaiveDate, Utc};

/// Reasons a draft or an edit is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", ERROR_TASK_EMPTY)]
    EmptyText,

    #[error("Invalid due date '{0}', expected YYYY-MM-DD.")]
    InvalidDueDate(String),

    #[error("{}", ERROR_DUE_DATE_PAST)]
    PastDueDate,

    #[error("{}", ERROR_EDIT_TEXT_EMPTY)]
    EmptyEditText,
}

/// A draft that passed validation, ready to become a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub text: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

/// Parse user-typed due date text. Empty input means "no due date".
pub fn parse_due_date(text: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    datetime::parse_date(trimmed)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDueDate(trimmed.to_string()))
}

/// Validate a draft against the moment `now`.
///
/// Checks run in order: non-blank text, parseable due date, due date not
/// before `now`. A due date stands for its UTC midnight, so a date of today
/// is already past once the day has started. A draft without a due date
/// skips the date checks.
pub fn validate_draft(draft: &DraftEntry, now: DateTime<Utc>) -> Result<NewTask, ValidationError> {
    if draft.text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let due_date = parse_due_date(&draft.due_date)?;
    if let Some(due) = due_date {
        if datetime::utc_midnight(due) < now {
            return Err(ValidationError::PastDueDate);
        }
    }

    Ok(NewTask {
        text: draft.text.clone(),
        priority: draft.priority,
        due_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
    }

    fn draft(text: &str, due: &str) -> DraftEntry {
        DraftEntry {
            text: text.to_string(),
            priority: Priority::High,
            due_date: due.to_string(),
        }
    }

    #[test]
    fn test_blank_text_rejected_before_date() {
        assert_eq!(
            validate_draft(&draft("   ", "1999-01-01"), now()),
            Err(ValidationError::EmptyText)
        );
    }

    #[test]
    fn test_past_due_date_rejected() {
        assert_eq!(
            validate_draft(&draft("Pay rent", "2025-05-31"), now()),
            Err(ValidationError::PastDueDate)
        );
    }

    #[test]
    fn test_today_is_past_once_the_day_started() {
        assert_eq!(
            validate_draft(&draft("Pay rent", "2025-06-01"), now()),
            Err(ValidationError::PastDueDate)
        );
    }

    #[test]
    fn test_due_date_at_exactly_now_is_valid() {
        let midnight = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let task = validate_draft(&draft("Pay rent", "2025-06-01"), midnight).unwrap();
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 6, 1));
    }

    #[test]
    fn test_tomorrow_is_valid() {
        let task = validate_draft(&draft("Pay rent", "2025-06-02"), now()).unwrap();
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 6, 2));
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_missing_due_date_is_valid() {
        let task = validate_draft(&draft("Pay rent", ""), now()).unwrap();
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_garbage_due_date_rejected() {
        assert_eq!(
            validate_draft(&draft("Pay rent", "next week"), now()),
            Err(ValidationError::InvalidDueDate("next week".to_string()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::EmptyText.to_string(), "Task cannot be empty.");
        assert_eq!(ValidationError::PastDueDate.to_string(), "Due date cannot be in the past.");
        assert_eq!(ValidationError::EmptyEditText.to_string(), "Task text cannot be empty!");
    }
}
