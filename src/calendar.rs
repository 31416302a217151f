//! Calendar link export.
//!
//! Builds a pre-filled "create event" link for a task's due date and hands it
//! to the system opener. Nothing is read back from the calendar service.

use crate::board::Task;
use crate::constants::{DEFAULT_CALENDAR_URL, ERROR_CALENDAR_NO_DUE_DATE, ERROR_CALENDAR_OPEN_FAILED};
use crate::utils::datetime;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("{}", ERROR_CALENDAR_NO_DUE_DATE)]
    MissingDueDate,

    #[error("{msg} ({0})", msg = ERROR_CALENDAR_OPEN_FAILED)]
    OpenFailed(String),
}

/// Builds calendar links against a configurable base URL
#[derive(Debug, Clone)]
pub struct CalendarLinkBuilder {
    base_url: String,
}

impl Default for CalendarLinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CALENDAR_URL)
    }
}

impl CalendarLinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Link for a zero-duration event starting and ending at the due date's
    /// UTC midnight
    pub fn build(&self, task: &Task) -> Result<String, CalendarError> {
        let due_date = task.due_date.ok_or(CalendarError::MissingDueDate)?;
        let timestamp = datetime::compact_utc_midnight(due_date);

        Ok(format!(
            "{}?action=TEMPLATE&text={}&dates={}/{}",
            self.base_url,
            urlencoding::encode(&task.text),
            timestamp,
            timestamp
        ))
    }

    /// Open a link with the system's default handler
    pub fn open(&self, url: &str) -> Result<(), CalendarError> {
        open::that(url).map_err(|e| {
            log::error!("Error adding task to calendar: {}", e);
            CalendarError::OpenFailed(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Priority;
    use chrono::NaiveDate;

    #[test]
    fn test_custom_base_url() {
        let builder = CalendarLinkBuilder::new("https://cal.example.com/new");
        let task = Task::new("Demo", Priority::Low, NaiveDate::from_ymd_opt(2030, 12, 31));
        let url = builder.build(&task).unwrap();
        assert_eq!(
            url,
            "https://cal.example.com/new?action=TEMPLATE&text=Demo&dates=20301231T000000Z/20301231T000000Z"
        );
    }
}
