//! Layout management and calculations

use crate::constants::DRAFT_FORM_HEIGHT;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the single-page view, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub draft_form: Rect,
    pub filter_bar: Rect,
    pub task_list: Rect,
    pub status_bar: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header, draft form, filter bar, task list and status bar
    #[must_use]
    pub fn main_layout(area: Rect, header_height: u16) -> MainLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Length(DRAFT_FORM_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        MainLayout {
            header: chunks[0],
            draft_form: chunks[1],
            filter_bar: chunks[2],
            task_list: chunks[3],
            status_bar: chunks[4],
        }
    }

    /// Header needs a second line while an error message is shown
    #[must_use]
    pub fn header_height(has_error: bool) -> u16 {
        if has_error {
            2
        } else {
            1
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Width available for task text once the row decorations are drawn
    #[must_use]
    pub fn task_text_width(list_width: u16, decoration_width: usize) -> usize {
        (list_width.saturating_sub(4) as usize).saturating_sub(decoration_width)
    }
}
