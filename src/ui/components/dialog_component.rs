//! Modal dialog component.
//!
//! Shows one dialog at a time on top of the board: delete confirmation,
//! info and error messages, the help panel and the in-memory log viewer.

use crate::icons::IconService;
use crate::ui::components::dialogs::{scroll_behavior, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    pub palette: Palette,
    /// Log lines shown by the logs dialog, newest first
    pub logs: Vec<String>,
    // Scrolling support for long content dialogs
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            palette: Palette::default(),
            logs: Vec::new(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn update_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    /// Scroll keys shared by every scrollable dialog; `true` when handled
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        let offset = &mut self.scroll_offset;
        let state = &mut self.scrollbar_state;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => scroll_behavior::scroll_up(offset, state),
            KeyCode::Down | KeyCode::Char('j') => scroll_behavior::scroll_down(offset, state),
            KeyCode::PageUp => scroll_behavior::page_up(offset, state),
            KeyCode::PageDown => scroll_behavior::page_down(offset, state),
            KeyCode::Home => scroll_behavior::scroll_to_top(offset, state),
            KeyCode::End => scroll_behavior::scroll_to_bottom(offset, state),
            _ => return false,
        }
        true
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::DeleteConfirmation { task_id, .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => Action::DeleteTask(task_id),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
            DialogType::Info(_) | DialogType::Error(_) => {
                if self.handle_scroll_key(key) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::DeleteTask(_) => {
                // Confirmed: close before the board handles the deletion
                self.clear_dialog();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::DeleteConfirmation { text, .. } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &self.palette, &text);
            }
            DialogType::Info(message) => system_dialogs::render_info_dialog(
                f,
                rect,
                &self.icons,
                &self.palette,
                &message,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Error(message) => system_dialogs::render_error_dialog(
                f,
                rect,
                &self.icons,
                &self.palette,
                &message,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, &self.palette, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                &self.palette,
                &self.logs,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
        }
    }
}
