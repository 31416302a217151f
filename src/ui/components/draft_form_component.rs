//! New task form: text, priority and due date inputs plus the add shortcut.
//!
//! The draft itself lives in the task board. This component keeps a copy for
//! rendering and turns key presses into `SetDraft*` actions carrying the whole
//! new field value.

use crate::board::{DraftEntry, Priority};
use crate::constants::{DRAFT_PLACEHOLDER, DUE_DATE_FIELD_WIDTH, DUE_DATE_PLACEHOLDER, PRIORITY_FIELD_WIDTH};
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{create_input_paragraph, create_selection_paragraph};
use crate::ui::core::{Action, Component, DraftField, Focus};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    Frame,
};

pub struct DraftFormComponent {
    pub draft: DraftEntry,
    pub active_field: DraftField,
    pub focused: bool,
    pub icons: IconService,
    pub palette: Palette,
}

impl Default for DraftFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftFormComponent {
    pub fn new() -> Self {
        Self {
            draft: DraftEntry::default(),
            active_field: DraftField::Text,
            focused: false,
            icons: IconService::default(),
            palette: Palette::default(),
        }
    }

    pub fn update_draft(&mut self, draft: &DraftEntry) {
        self.draft = draft.clone();
    }

    fn edit_text(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut text = self.draft.text.clone();
                text.push(c);
                Action::SetDraftText(text)
            }
            KeyCode::Backspace => {
                let mut text = self.draft.text.clone();
                text.pop();
                Action::SetDraftText(text)
            }
            _ => Action::None,
        }
    }

    fn edit_priority(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
                Action::SetDraftPriority(self.draft.priority.next())
            }
            KeyCode::Left | KeyCode::Char('h') => Action::SetDraftPriority(self.draft.priority.previous()),
            _ => Action::None,
        }
    }

    fn edit_due_date(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                let mut due_date = self.draft.due_date.clone();
                due_date.push(c);
                Action::SetDraftDueDate(due_date)
            }
            KeyCode::Backspace => {
                let mut due_date = self.draft.due_date.clone();
                due_date.pop();
                Action::SetDraftDueDate(due_date)
            }
            _ => Action::None,
        }
    }

    fn priority_line(&self, priority: Priority) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{} ", self.icons.priority(priority)),
                Style::default().fg(self.palette.priority(priority)),
            ),
            Span::raw(priority.label()),
        ])
    }
}

impl Component for DraftFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::Focus(Focus::TaskList),
            KeyCode::Enter => Action::AddTask,
            KeyCode::Tab => {
                self.active_field = self.active_field.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.active_field = self.active_field.previous();
                Action::None
            }
            _ => match self.active_field {
                DraftField::Text => self.edit_text(key),
                DraftField::Priority => self.edit_priority(key),
                DraftField::DueDate => self.edit_due_date(key),
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::Focus(Focus::DraftForm) => self.on_focus(),
            Action::Focus(Focus::TaskList) => self.on_blur(),
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::horizontal([
            Constraint::Min(10),
            Constraint::Length(PRIORITY_FIELD_WIDTH),
            Constraint::Length(DUE_DATE_FIELD_WIDTH),
        ])
        .split(rect);

        let text_focused = self.focused && self.active_field == DraftField::Text;
        let priority_focused = self.focused && self.active_field == DraftField::Priority;
        let due_focused = self.focused && self.active_field == DraftField::DueDate;

        let text_title = format!("{} New task", self.icons.tasks_title());
        f.render_widget(
            create_input_paragraph(&self.draft.text, &text_title, DRAFT_PLACEHOLDER, text_focused, &self.palette),
            chunks[0],
        );
        f.render_widget(
            create_selection_paragraph(
                self.priority_line(self.draft.priority),
                "Priority",
                priority_focused,
                &self.palette,
            ),
            chunks[1],
        );
        let due_title = format!("{} Due", self.icons.due_date());
        f.render_widget(
            create_input_paragraph(
                &self.draft.due_date,
                &due_title,
                DUE_DATE_PLACEHOLDER,
                due_focused,
                &self.palette,
            ),
            chunks[2],
        );
    }

    fn on_focus(&mut self) {
        self.focused = true;
        self.active_field = DraftField::Text;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
