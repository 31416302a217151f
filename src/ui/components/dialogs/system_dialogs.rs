use crate::icons::IconService;
use crate::ui::components::dialogs::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::ui::components::dialogs::scroll_behavior::visible_window;
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
TASK MASTER - Single-page task list
===================================

TASK LIST
---------
j/k, ↓/↑    Move selection down/up
Space, x    Toggle done
e           Edit selected task
d           Delete selected task (with confirmation)
c           Add selected task to calendar

NEW TASK
--------
a, i        Focus the new task form
Tab         Next field (text, priority, due date)
←/→         Change priority (on the priority field)
Enter       Add task
Esc         Back to the task list

EDITING A TASK
--------------
Tab         Next field
←/→         Change priority (on the priority field)
Enter       Save changes
Esc         Cancel editing

VIEW
----
f           Cycle status filter (all, done, undone)
p           Cycle priority filter (all, low, medium, high)
t           Toggle light/dark theme
I           Change icon theme

GENERAL CONTROLS
----------------
?           Toggle help panel
G           Show logs
q, Ctrl+C   Quit application

HELP PANEL SCROLLING
--------------------
j/k         Scroll help content down/up
↑↓          Scroll help content up/down
PageUp/Down Page through help content
Home        Jump to top of help
End         Jump to bottom of help

NOTES
-----
Due dates use the YYYY-MM-DD format and cannot be in the past.
Tasks and the theme are saved after every change.

Press 'Esc' or '?' to close this help panel
";

pub fn render_delete_confirmation_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    palette: &Palette,
    task_text: &str,
) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let preview: String = if task_text.chars().count() > 40 {
        format!("{}...", task_text.chars().take(37).collect::<String>())
    } else {
        task_text.to_string()
    };

    let block = create_dialog_block(format!("{} Confirm Delete", icons.warning()), palette.error)
        .style(Style::default().fg(palette.error).bg(palette.background));

    let message_paragraph = Paragraph::new(format!("Delete task?\n\"{}\"", preview))
        .style(Style::default().fg(palette.foreground))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = create_instructions_paragraph(
        &[shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL],
        palette.muted,
    );

    let inner = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    palette: &Palette,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    let title = format!("{} Info", icons.info());
    render_message_dialog(
        f,
        dialog_area,
        title,
        palette.accent,
        palette,
        message,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    palette: &Palette,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    let title = format!("{} Error", icons.error());
    render_message_dialog(
        f,
        dialog_area,
        title,
        palette.error,
        palette,
        message,
        scroll_offset,
        scrollbar_state,
    );
}

#[allow(clippy::too_many_arguments)]
fn render_message_dialog(
    f: &mut Frame,
    dialog_area: Rect,
    title: String,
    color: Color,
    palette: &Palette,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    f.render_widget(Clear, dialog_area);

    let instructions = "Press any key to continue • j/k to scroll if needed";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color).bg(palette.background));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let visible_height = content_area.height as usize;
    let scrollable = lines.len() > visible_height;

    let message_text = if scrollable {
        visible_window(&lines, visible_height, scroll_offset, scrollbar_state).join("\n")
    } else {
        message.to_string()
    };

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(palette.foreground))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if scrollable {
        render_scrollbar(f, content_area, palette, scrollbar_state);
    }
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    render_scrollable_panel(
        f,
        area,
        palette,
        HELP_CONTENT,
        "📖 Help - Press 'Esc' or '?' to close",
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    logs: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs_content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_scrollable_panel(
        f,
        area,
        palette,
        &logs_content,
        crate::constants::DIALOG_TITLE_LOGS,
        scroll_offset,
        scrollbar_state,
    );
}

fn render_scrollable_panel(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    content: &str,
    title: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let text = visible_window(&lines, visible_height, scroll_offset, scrollbar_state).join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(palette.foreground).bg(palette.background))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if lines.len() > visible_height {
        render_scrollbar(f, content_area, palette, scrollbar_state);
    }
}

fn render_scrollbar(f: &mut Frame, area: Rect, palette: &Palette, scrollbar_state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(palette.muted))
        .thumb_style(Style::default().fg(palette.foreground));

    f.render_stateful_widget(scrollbar, area, scrollbar_state);
}
