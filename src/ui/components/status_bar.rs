//! Status bar component

use ratatui::{layout::Alignment, style::Style, widgets::Paragraph, Frame};

use crate::ui::components::dialogs::common::{instructions_line, shortcuts, InstructionShortcut};
use crate::ui::core::Focus;
use crate::ui::theme::Palette;
use ratatui::style::Color;

const LIST_SHORTCUTS: &[InstructionShortcut] = &[
    ("Space", Color::Cyan, " toggle"),
    shortcuts::SEPARATOR,
    ("a", Color::Cyan, " add"),
    shortcuts::SEPARATOR,
    ("e", Color::Cyan, " edit"),
    shortcuts::SEPARATOR,
    ("d", Color::Cyan, " delete"),
    shortcuts::SEPARATOR,
    ("c", Color::Cyan, " calendar"),
    shortcuts::SEPARATOR,
    ("?", Color::Cyan, " help"),
    shortcuts::SEPARATOR,
    ("q", Color::Red, " quit"),
];

const DRAFT_SHORTCUTS: &[InstructionShortcut] = &[
    shortcuts::ENTER_ADD,
    shortcuts::SEPARATOR,
    shortcuts::TAB_NEXT,
    shortcuts::SEPARATOR,
    shortcuts::ARROWS_PRIORITY,
    shortcuts::SEPARATOR,
    ("Esc", Color::Red, " Back to list"),
];

const EDITOR_SHORTCUTS: &[InstructionShortcut] = &[
    shortcuts::ENTER_SAVE,
    shortcuts::SEPARATOR,
    shortcuts::TAB_NEXT,
    shortcuts::SEPARATOR,
    shortcuts::ARROWS_PRIORITY,
    shortcuts::SEPARATOR,
    shortcuts::ESC_CANCEL,
];

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render context-sensitive shortcuts
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, focus: Focus, editing: bool, palette: &Palette) {
        let keys = match focus {
            Focus::DraftForm => DRAFT_SHORTCUTS,
            Focus::TaskList if editing => EDITOR_SHORTCUTS,
            Focus::TaskList => LIST_SHORTCUTS,
        };

        let status_bar = Paragraph::new(instructions_line(keys, palette.muted))
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette.background));

        f.render_widget(status_bar, area);
    }
}
