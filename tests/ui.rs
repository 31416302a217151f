use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use taskmaster::board::{DoneFilter, Priority, Task, TaskBoard};
use taskmaster::config::Config;
use taskmaster::icons::IconTheme;
use taskmaster::logger::Logger;
use taskmaster::storage::{Persistence, SlotStorage};
use taskmaster::ui::core::{Component, DialogType, EventType, Focus};
use taskmaster::ui::components::TaskListComponent;
use taskmaster::ui::AppComponent;

async fn app_with(config: Config) -> AppComponent {
    let storage = SlotStorage::in_memory().await.unwrap();
    let board = TaskBoard::load(Persistence::new(Arc::new(storage))).await;
    AppComponent::new(board, &config, Logger::new())
}

async fn app() -> AppComponent {
    let mut config = Config::default();
    config.ui.icon_theme = IconTheme::Ascii;
    app_with(config).await
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .await
        .unwrap();
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

/// Focus the draft form, fill it in and submit
async fn add_task(app: &mut AppComponent, text: &str, due_date: Option<&str>) {
    press(app, KeyCode::Char('a')).await;
    type_text(app, text).await;
    if let Some(due_date) = due_date {
        press(app, KeyCode::Tab).await;
        press(app, KeyCode::Tab).await;
        type_text(app, due_date).await;
    }
    press(app, KeyCode::Enter).await;
    press(app, KeyCode::Esc).await;
}

fn screen_text(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_empty_board_renders() {
    let mut app = app().await;
    let screen = screen_text(&mut app);

    assert!(screen.contains("Task Master"));
    assert!(screen.contains("No tasks yet"));
    assert!(screen.contains("All Tasks"));
    assert!(screen.contains("All Priorities"));
}

#[tokio::test]
async fn test_add_task_from_draft_form() {
    let mut app = app().await;

    press(&mut app, KeyCode::Char('a')).await;
    assert_eq!(app.focus(), Focus::DraftForm);

    type_text(&mut app, "Buy milk").await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Right).await;
    press(&mut app, KeyCode::Enter).await;

    let tasks = app.board().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Buy milk");
    assert_eq!(tasks[0].priority, Priority::High);
    assert_eq!(app.board().draft().text, "");
    // Focus stays on the form for the next entry
    assert_eq!(app.focus(), Focus::DraftForm);

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.focus(), Focus::TaskList);
    assert!(screen_text(&mut app).contains("Buy milk"));
}

#[tokio::test]
async fn test_quit_key_is_plain_text_in_draft_form() {
    let mut app = app().await;
    add_task(&mut app, "quit smoking", None).await;

    assert!(!app.should_quit());
    assert_eq!(app.board().tasks()[0].text, "quit smoking");

    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_empty_draft_shows_error_line() {
    let mut app = app().await;

    press(&mut app, KeyCode::Char('a')).await;
    press(&mut app, KeyCode::Enter).await;

    assert!(app.board().tasks().is_empty());
    assert_eq!(app.board().error(), Some("Task cannot be empty."));
    assert!(screen_text(&mut app).contains("Task cannot be empty."));
}

#[tokio::test]
async fn test_toggle_and_filter_from_list() {
    let mut app = app().await;
    add_task(&mut app, "First", None).await;
    add_task(&mut app, "Second", None).await;

    // The newest task is selected after adding
    press(&mut app, KeyCode::Char('x')).await;
    assert!(!app.board().tasks()[0].done);
    assert!(app.board().tasks()[1].done);

    press(&mut app, KeyCode::Char('f')).await;
    assert_eq!(app.board().filters().done, Some(DoneFilter::Done));
    assert_eq!(app.task_list().tasks.len(), 1);
    assert_eq!(app.task_list().tasks[0].text, "Second");

    press(&mut app, KeyCode::Char('f')).await;
    assert_eq!(app.board().filters().done, Some(DoneFilter::Undone));
    assert_eq!(app.task_list().tasks[0].text, "First");

    // Toggling through the filtered view hits the visible task
    press(&mut app, KeyCode::Char(' ')).await;
    assert!(app.board().tasks()[0].done);
    assert!(app.task_list().tasks.is_empty());
    assert!(screen_text(&mut app).contains("No tasks match the current filters"));
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let mut app = app().await;
    add_task(&mut app, "Disposable", None).await;

    press(&mut app, KeyCode::Char('d')).await;
    assert!(matches!(app.dialog_type(), Some(DialogType::DeleteConfirmation { .. })));
    assert!(screen_text(&mut app).contains("Confirm Delete"));

    press(&mut app, KeyCode::Esc).await;
    assert!(app.dialog_type().is_none());
    assert_eq!(app.board().tasks().len(), 1);

    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Enter).await;
    assert!(app.dialog_type().is_none());
    assert!(app.board().tasks().is_empty());
}

#[tokio::test]
async fn test_inline_edit_saves_fields() {
    let mut app = app().await;
    add_task(&mut app, "Draft report", None).await;

    press(&mut app, KeyCode::Char('e')).await;
    assert!(app.board().tasks()[0].is_editing);
    assert!(app.task_list().is_capturing_input());

    // Keys that are global in the list are plain text in the editor
    type_text(&mut app, " q").await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Left).await;
    press(&mut app, KeyCode::Enter).await;

    assert!(!app.should_quit());
    let task = &app.board().tasks()[0];
    assert_eq!(task.text, "Draft report q");
    assert_eq!(task.priority, Priority::Low);
    assert!(!task.is_editing);
}

#[test]
fn test_edit_buffer_survives_being_filtered_out() {
    let mut editing = Task::new("Draft report", Priority::Medium, None);
    editing.is_editing = true;
    let all_tasks = vec![editing.clone()];

    let mut task_list = TaskListComponent::new();
    task_list.update_tasks(all_tasks.clone(), &all_tasks);
    task_list.edit_buffers.get_mut(&editing.id).unwrap().text = "Draft report v2".to_string();

    // A filter hides the task while it is being edited
    task_list.update_tasks(Vec::new(), &all_tasks);
    assert!(task_list.tasks.is_empty());
    assert!(task_list.has_tasks);

    task_list.update_tasks(all_tasks.clone(), &all_tasks);
    assert_eq!(task_list.edit_buffer(editing.id).unwrap().text, "Draft report v2");

    // Leaving edit mode drops the buffer
    editing.is_editing = false;
    let all_tasks = vec![editing.clone()];
    task_list.update_tasks(all_tasks.clone(), &all_tasks);
    assert!(task_list.edit_buffer(editing.id).is_none());
}

#[tokio::test]
async fn test_inline_edit_rejects_blank_text() {
    let mut app = app().await;
    add_task(&mut app, "ab", None).await;

    press(&mut app, KeyCode::Char('e')).await;
    press(&mut app, KeyCode::Backspace).await;
    press(&mut app, KeyCode::Backspace).await;
    press(&mut app, KeyCode::Enter).await;

    match app.dialog_type() {
        Some(DialogType::Error(message)) => assert_eq!(message, "Task text cannot be empty!"),
        other => panic!("expected error dialog, got {:?}", other),
    }
    assert_eq!(app.board().tasks()[0].text, "ab");
    assert!(app.board().tasks()[0].is_editing);
    assert!(app.board().error().is_none());

    // Dismiss, then cancel editing
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Esc).await;
    assert!(!app.board().tasks()[0].is_editing);
    assert_eq!(app.board().tasks()[0].text, "ab");
}

#[tokio::test]
async fn test_calendar_without_due_date_shows_error() {
    let mut app = app().await;
    add_task(&mut app, "Undated", None).await;

    press(&mut app, KeyCode::Char('c')).await;

    match app.dialog_type() {
        Some(DialogType::Error(message)) => {
            assert_eq!(message, "Please set a due date before adding to Google Calendar.")
        }
        other => panic!("expected error dialog, got {:?}", other),
    }
}

#[tokio::test]
async fn test_calendar_link_shown_when_opener_disabled() {
    let mut config = Config::default();
    config.ui.icon_theme = IconTheme::Ascii;
    config.calendar.open_in_browser = false;
    let mut app = app_with(config).await;
    add_task(&mut app, "Launch", Some("2099-01-01")).await;

    press(&mut app, KeyCode::Char('c')).await;

    match app.dialog_type() {
        Some(DialogType::Info(message)) => {
            assert!(message.contains("text=Launch&dates=20990101T000000Z/20990101T000000Z"))
        }
        other => panic!("expected info dialog, got {:?}", other),
    }
}

#[tokio::test]
async fn test_theme_toggle_and_dialogs() {
    let mut app = app().await;

    press(&mut app, KeyCode::Char('t')).await;
    assert!(app.board().dark_mode());
    assert!(screen_text(&mut app).contains("(dark)"));

    press(&mut app, KeyCode::Char('?')).await;
    assert_eq!(app.dialog_type(), Some(&DialogType::Help));
    press(&mut app, KeyCode::Esc).await;

    press(&mut app, KeyCode::Char('G')).await;
    assert_eq!(app.dialog_type(), Some(&DialogType::Logs));
    assert!(screen_text(&mut app).contains("Theme: dark"));
    press(&mut app, KeyCode::Char('G')).await;
    assert!(app.dialog_type().is_none());

    press(&mut app, KeyCode::Char('I')).await;
    assert_eq!(app.icons().theme(), IconTheme::Unicode);
}

#[tokio::test]
async fn test_ctrl_c_quits_from_anywhere() {
    let mut app = app().await;
    press(&mut app, KeyCode::Char('a')).await;

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .await
        .unwrap();

    assert!(app.should_quit());
}
