use chrono::NaiveDate;
use taskmaster::board::{Priority, Task};
use taskmaster::calendar::{CalendarError, CalendarLinkBuilder};

#[test]
fn test_link_for_due_date() {
    let builder = CalendarLinkBuilder::default();
    let task = Task::new("Dentist", Priority::Medium, NaiveDate::from_ymd_opt(2025, 6, 1));

    let url = builder.build(&task).unwrap();

    assert_eq!(
        url,
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text=Dentist&dates=20250601T000000Z/20250601T000000Z"
    );
}

#[test]
fn test_start_and_end_are_identical() {
    let builder = CalendarLinkBuilder::default();
    let task = Task::new("Zero length", Priority::Low, NaiveDate::from_ymd_opt(2031, 2, 28));

    let url = builder.build(&task).unwrap();
    let dates = url.split("&dates=").nth(1).unwrap();
    let (start, end) = dates.split_once('/').unwrap();

    assert_eq!(start, end);
    assert_eq!(start, "20310228T000000Z");
}

#[test]
fn test_missing_due_date_is_rejected() {
    let builder = CalendarLinkBuilder::default();
    let task = Task::new("Someday", Priority::High, None);

    let result = builder.build(&task);

    assert_eq!(result, Err(CalendarError::MissingDueDate));
    assert_eq!(
        CalendarError::MissingDueDate.to_string(),
        "Please set a due date before adding to Google Calendar."
    );
}

#[test]
fn test_task_text_is_url_encoded() {
    let builder = CalendarLinkBuilder::default();
    let task = Task::new("Lunch & learn #3", Priority::Medium, NaiveDate::from_ymd_opt(2025, 6, 1));

    let url = builder.build(&task).unwrap();

    assert!(url.contains("text=Lunch%20%26%20learn%20%233&"));
    assert_eq!(url.matches("&dates=").count(), 1);
}

#[test]
fn test_open_failure_message_includes_cause() {
    let error = CalendarError::OpenFailed("no browser found".to_string());

    assert_eq!(
        error.to_string(),
        "Error adding task to Google Calendar. (no browser found)"
    );
}
