//! One-line summary of the active filters

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::board::FilterState;
use crate::icons::IconService;
use crate::ui::theme::Palette;

pub struct FilterBar;

impl FilterBar {
    pub fn render(
        f: &mut Frame,
        area: Rect,
        filters: &FilterState,
        visible: usize,
        total: usize,
        icons: &IconService,
        palette: &Palette,
    ) {
        let value_style = |active: bool| {
            if active {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.foreground)
            }
        };
        let key_style = Style::default().fg(palette.muted);

        let mut spans = vec![
            Span::styled(format!(" {} Status: ", icons.filter()), key_style),
            Span::styled(filters.done_label(), value_style(filters.done.is_some())),
            Span::styled(" [f]   Priority: ", key_style),
            Span::styled(filters.priority_label(), value_style(filters.priority.is_some())),
            Span::styled(" [p]", key_style),
        ];
        if filters.is_active() {
            spans.push(Span::styled(format!("   showing {} of {}", visible, total), key_style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.background));
        f.render_widget(paragraph, area);
    }
}
