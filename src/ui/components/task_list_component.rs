//! Task list with selection and inline editors.
//!
//! Rows show the visible (filtered) tasks. Tasks in edit mode render an inline
//! editor whose field values are buffered here until they are saved.

use std::collections::HashMap;

use crate::board::{Priority, Task, TaskId};
use crate::config::DisplayConfig;
use crate::constants::{EMPTY_FILTER_MESSAGE, EMPTY_LIST_MESSAGE};
use crate::icons::IconService;
use crate::ui::core::{Action, Component, DialogType, DraftField};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use crate::utils::datetime;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Uncommitted field values of a task in edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub text: String,
    pub priority: Priority,
    pub due_date: String,
    pub field: DraftField,
}

impl EditBuffer {
    pub fn from_task(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            priority: task.priority,
            due_date: task.due_date.map(datetime::format_ymd).unwrap_or_default(),
            field: DraftField::Text,
        }
    }
}

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub edit_buffers: HashMap<TaskId, EditBuffer>,
    /// Whether the board holds any task at all, filtered out or not
    pub has_tasks: bool,
    pub icons: IconService,
    pub palette: Palette,
    pub display_config: DisplayConfig,
    pub today: NaiveDate,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            edit_buffers: HashMap::new(),
            has_tasks: false,
            icons: IconService::default(),
            palette: Palette::default(),
            display_config: DisplayConfig::default(),
            today: datetime::today(),
        }
    }

    /// Replace the visible rows, keeping the selection in range.
    ///
    /// Edit buffers follow the edit flags of `all_tasks`, so an editor hidden
    /// by a filter keeps its typed text.
    pub fn update_tasks(&mut self, visible: Vec<Task>, all_tasks: &[Task]) {
        self.edit_buffers
            .retain(|id, _| all_tasks.iter().any(|task| task.id == *id && task.is_editing));
        for task in all_tasks.iter().filter(|task| task.is_editing) {
            self.edit_buffers
                .entry(task.id)
                .or_insert_with(|| EditBuffer::from_task(task));
        }

        self.tasks = visible;
        self.has_tasks = !all_tasks.is_empty();
        self.today = datetime::today();

        if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    /// Id of the selected row, resolved through the current filtered view
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id)
    }

    /// Select the row showing `id`, if it is visible
    pub fn select_task(&mut self, id: TaskId) {
        if let Some(index) = self.tasks.iter().position(|task| task.id == id) {
            self.selected_index = index;
        }
    }

    /// True when the selected row is an open editor and owns typed keys
    pub fn is_capturing_input(&self) -> bool {
        self.selected_task().is_some_and(|task| task.is_editing)
    }

    pub fn edit_buffer(&self, id: TaskId) -> Option<&EditBuffer> {
        self.edit_buffers.get(&id)
    }

    fn next_task(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.tasks.len();
        }
    }

    fn previous_task(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.tasks.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    fn handle_editor_key(&mut self, id: TaskId, key: KeyEvent) -> Action {
        let Some(buffer) = self.edit_buffers.get_mut(&id) else {
            return Action::None;
        };

        match key.code {
            KeyCode::Esc => Action::CancelEditing(id),
            KeyCode::Enter => Action::SaveEdit {
                id,
                text: buffer.text.clone(),
                priority: buffer.priority,
                due_date: buffer.due_date.clone(),
            },
            KeyCode::Tab => {
                buffer.field = buffer.field.next();
                Action::None
            }
            KeyCode::BackTab => {
                buffer.field = buffer.field.previous();
                Action::None
            }
            KeyCode::Up => Action::PreviousTask,
            KeyCode::Down => Action::NextTask,
            code => {
                match (buffer.field, code) {
                    (DraftField::Text, KeyCode::Char(c)) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        buffer.text.push(c);
                    }
                    (DraftField::Text, KeyCode::Backspace) => {
                        buffer.text.pop();
                    }
                    (DraftField::Priority, KeyCode::Right | KeyCode::Char(' ')) => {
                        buffer.priority = buffer.priority.next();
                    }
                    (DraftField::Priority, KeyCode::Left) => {
                        buffer.priority = buffer.priority.previous();
                    }
                    (DraftField::DueDate, KeyCode::Char(c)) if c.is_ascii_digit() || c == '-' => {
                        buffer.due_date.push(c);
                    }
                    (DraftField::DueDate, KeyCode::Backspace) => {
                        buffer.due_date.pop();
                    }
                    _ => {}
                }
                Action::None
            }
        }
    }

    fn format_due_date(&self, date: NaiveDate) -> String {
        if self.display_config.human_dates {
            datetime::format_human_date_from(date, self.today)
        } else {
            datetime::format_with(date, &self.display_config.date_format).unwrap_or_else(|| datetime::format_ymd(date))
        }
    }

    fn task_row(&self, task: &Task, width: u16) -> ListItem<'static> {
        let palette = &self.palette;
        let status_icon = if task.done {
            self.icons.task_done()
        } else {
            self.icons.task_pending()
        };
        let priority_icon = self.icons.priority(task.priority);

        let due = task.due_date.map(|date| {
            let overdue = !task.done && date < self.today;
            let color = if overdue { palette.error } else { palette.muted };
            (format!("  {} Due: {}", self.icons.due_date(), self.format_due_date(date)), color)
        });

        let decoration_width = status_icon.chars().count()
            + priority_icon.chars().count()
            + 2
            + due.as_ref().map_or(0, |(text, _)| text.chars().count());
        let max_text = LayoutManager::task_text_width(width, decoration_width);
        let text = if task.text.chars().count() > max_text && max_text > 3 {
            format!("{}...", task.text.chars().take(max_text - 3).collect::<String>())
        } else {
            task.text.clone()
        };

        let mut text_style = Style::default().fg(palette.foreground);
        if task.done {
            text_style = text_style.fg(palette.muted).add_modifier(Modifier::CROSSED_OUT);
        }

        let mut spans = vec![
            Span::styled(
                format!("{} ", status_icon),
                Style::default().fg(if task.done { palette.success } else { palette.foreground }),
            ),
            Span::styled(format!("{} ", priority_icon), Style::default().fg(palette.priority(task.priority))),
            Span::styled(text, text_style),
        ];
        if let Some((due_text, color)) = due {
            spans.push(Span::styled(due_text, Style::default().fg(color)));
        }

        ListItem::new(Line::from(spans))
    }

    fn editor_row(&self, task: &Task) -> ListItem<'static> {
        let palette = &self.palette;
        let buffer = self
            .edit_buffers
            .get(&task.id)
            .cloned()
            .unwrap_or_else(|| EditBuffer::from_task(task));

        let field_style = |field: DraftField| {
            if buffer.field == field {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.foreground)
            }
        };
        let with_cursor = |value: &str, field: DraftField| {
            if buffer.field == field {
                format!("{}█", value)
            } else {
                value.to_string()
            }
        };

        let due_value = if buffer.due_date.is_empty() && buffer.field != DraftField::DueDate {
            "no due date".to_string()
        } else {
            with_cursor(&buffer.due_date, DraftField::DueDate)
        };

        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", self.icons.task_editing()), Style::default().fg(palette.accent)),
            Span::styled("[", Style::default().fg(palette.border)),
            Span::styled(with_cursor(&buffer.text, DraftField::Text), field_style(DraftField::Text)),
            Span::styled("] ", Style::default().fg(palette.border)),
            Span::styled(
                format!("< {} {} >", self.icons.priority(buffer.priority), buffer.priority.label()),
                field_style(DraftField::Priority).fg(if buffer.field == DraftField::Priority {
                    palette.accent
                } else {
                    palette.priority(buffer.priority)
                }),
            ),
            Span::raw(" "),
            Span::styled(format!("{} ", self.icons.due_date()), Style::default().fg(palette.muted)),
            Span::styled(due_value, field_style(DraftField::DueDate)),
        ]))
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(task) = self.selected_task() else {
            return Action::None;
        };
        let id = task.id;

        if task.is_editing {
            return self.handle_editor_key(id, key);
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Char(' ') | KeyCode::Char('x') => Action::ToggleDone(id),
            KeyCode::Char('e') => Action::StartEditing(id),
            KeyCode::Char('d') => Action::ShowDialog(DialogType::DeleteConfirmation {
                task_id: id,
                text: task.text.clone(),
            }),
            KeyCode::Char('c') if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::AddToCalendar(id),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                self.next_task();
                Action::None
            }
            Action::PreviousTask => {
                self.previous_task();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.palette;
        let title = format!(" {} Tasks ({}) ", self.icons.tasks_title(), self.tasks.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(palette.border).bg(palette.background));

        if self.tasks.is_empty() {
            let message = if self.has_tasks {
                EMPTY_FILTER_MESSAGE
            } else {
                EMPTY_LIST_MESSAGE
            };
            let paragraph = Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(palette.muted))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, rect);
            return;
        }

        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .map(|task| {
                if task.is_editing {
                    self.editor_row(task)
                } else {
                    self.task_row(task, rect.width)
                }
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(palette.selection).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        self.list_state.select(Some(self.selected_index));
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
