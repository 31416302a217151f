//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use crate::board::Priority;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub done: &'static str,
    pub editing: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub tasks_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub filter: &'static str,
}

/// Priority indicators
#[derive(Debug, Clone)]
pub struct PriorityIcons {
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
}

/// Due date and theme switch icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub due_date: &'static str,
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub ui: UiIcons,
    pub priority: PriorityIcons,
    pub status: StatusIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "🔳",
                done: "✅",
                editing: "✏️",
            },
            ui: UiIcons {
                tasks_title: "📝",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                filter: "🔎",
            },
            priority: PriorityIcons {
                high: "🔴",
                medium: "🟡",
                low: "🔵",
            },
            status: StatusIcons {
                due_date: "⏰",
                light_mode: "🌞",
                dark_mode: "🌙",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "□",
                done: "✓",
                editing: "✎",
            },
            ui: UiIcons {
                tasks_title: "▶",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                filter: "⧩",
            },
            priority: PriorityIcons {
                high: "●",
                medium: "◉",
                low: "○",
            },
            status: StatusIcons {
                due_date: "◷",
                light_mode: "☀",
                dark_mode: "☾",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "[ ]",
                done: "[X]",
                editing: "[E]",
            },
            ui: UiIcons {
                tasks_title: ">",
                error: "X",
                info: "i",
                warning: "!",
                filter: "?",
            },
            priority: PriorityIcons {
                high: "!!",
                medium: "!",
                low: "-",
            },
            status: StatusIcons {
                due_date: "@",
                light_mode: "(light)",
                dark_mode: "(dark)",
            },
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_done(&self) -> &'static str {
        self.icons().task_status.done
    }

    #[must_use]
    pub fn task_editing(&self) -> &'static str {
        self.icons().task_status.editing
    }

    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        self.icons().ui.tasks_title
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn filter(&self) -> &'static str {
        self.icons().ui.filter
    }

    #[must_use]
    pub fn priority(&self, priority: Priority) -> &'static str {
        let icons = self.icons().priority;
        match priority {
            Priority::High => icons.high,
            Priority::Medium => icons.medium,
            Priority::Low => icons.low,
        }
    }

    #[must_use]
    pub fn due_date(&self) -> &'static str {
        self.icons().status.due_date
    }

    /// Theme switch indicator for the current display mode
    #[must_use]
    pub fn theme_switch(&self, dark_mode: bool) -> &'static str {
        let status = self.icons().status;
        if dark_mode {
            status.dark_mode
        } else {
            status.light_mode
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_task_status_icons() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.task_pending(), "□");
        assert_eq!(service.task_done(), "✓");

        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.task_pending(), "[ ]");
        assert_eq!(service.task_done(), "[X]");
    }

    #[test]
    fn test_theme_switch_icon() {
        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme_switch(false), "🌞");
        assert_eq!(service.theme_switch(true), "🌙");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }
}
