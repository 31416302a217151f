//! Title line with the theme indicator and the last validation error

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::APP_TITLE;
use crate::icons::IconService;
use crate::ui::theme::Palette;

pub struct Header;

impl Header {
    pub fn render(
        f: &mut Frame,
        area: Rect,
        dark_mode: bool,
        error: Option<&str>,
        icons: &IconService,
        palette: &Palette,
    ) {
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

        let theme_hint = format!("{} [t] ", icons.theme_switch(dark_mode));
        let columns = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(theme_hint.chars().count() as u16 + 1),
        ])
        .split(rows[0]);

        let title = Paragraph::new(Line::from(Span::styled(
            format!(" {} {}", icons.tasks_title(), APP_TITLE),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(palette.background));
        let theme = Paragraph::new(theme_hint)
            .style(Style::default().fg(palette.muted).bg(palette.background))
            .alignment(ratatui::layout::Alignment::Right);

        f.render_widget(title, columns[0]);
        f.render_widget(theme, columns[1]);

        if let Some(message) = error {
            let error_line = Paragraph::new(format!(" {} {}", icons.error(), message))
                .style(Style::default().fg(palette.error).bg(palette.background));
            f.render_widget(error_line, rows[1]);
        }
    }
}
