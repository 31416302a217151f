use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::ui::theme::Palette;

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: String, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block; `focused` fields show a visual cursor and
/// empty unfocused fields show `placeholder`
pub fn create_input_paragraph<'a>(
    input_buffer: &str,
    field_title: &str,
    placeholder: &str,
    focused: bool,
    palette: &Palette,
) -> Paragraph<'a> {
    let cursor_char = "█";
    let (input_display, text_color) = if focused {
        (format!("{}{}", input_buffer, cursor_char), palette.foreground)
    } else if input_buffer.is_empty() {
        (placeholder.to_string(), palette.muted)
    } else {
        (input_buffer.to_string(), palette.foreground)
    };

    Paragraph::new(input_display)
        .block(field_block(field_title, focused, palette))
        .style(Style::default().fg(text_color))
}

/// Creates a selection field block (read-only display with title)
pub fn create_selection_paragraph<'a>(
    value: Line<'a>,
    field_title: &str,
    focused: bool,
    palette: &Palette,
) -> Paragraph<'a> {
    Paragraph::new(value)
        .block(field_block(field_title, focused, palette))
        .style(Style::default().fg(palette.foreground))
}

fn field_block<'a>(field_title: &str, focused: bool, palette: &Palette) -> Block<'a> {
    let border_color = if focused { palette.accent } else { palette.border };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(if focused { palette.accent } else { palette.muted }))
        .style(Style::default().fg(border_color))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], text_color: Color) -> Paragraph<'a> {
    Paragraph::new(instructions_line(instructions, text_color)).alignment(Alignment::Center)
}

/// Line of color-coded shortcuts, shared with the status bar
pub fn instructions_line<'a>(instructions: &[InstructionShortcut], text_color: Color) -> Line<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(text_color)));
    }
    Line::from(instruction_text)
}

/// Common instruction shortcuts used across dialogs and the status bar
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter", Color::Green, " Confirm");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ENTER_ADD: InstructionShortcut = ("Enter", Color::Green, " Add");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_PRIORITY: InstructionShortcut = ("←/→", Color::Cyan, " Priority");
}
