//! Light and dark color palettes

use crate::board::Priority;
use ratatui::style::Color;

/// Colors used by every component for one display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selection: Color,
    pub error: Color,
    pub success: Color,
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,
}

impl Palette {
    #[must_use]
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(33, 33, 33),
            muted: Color::Rgb(120, 120, 120),
            accent: Color::Rgb(25, 118, 210),
            border: Color::Rgb(180, 180, 180),
            selection: Color::Rgb(220, 232, 245),
            error: Color::Rgb(198, 40, 40),
            success: Color::Rgb(46, 125, 50),
            priority_high: Color::Rgb(211, 47, 47),
            priority_medium: Color::Rgb(245, 124, 0),
            priority_low: Color::Rgb(56, 142, 60),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(30, 30, 30),
            foreground: Color::Rgb(230, 230, 230),
            muted: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(100, 181, 246),
            border: Color::Rgb(80, 80, 80),
            selection: Color::Rgb(55, 65, 81),
            error: Color::Rgb(239, 83, 80),
            success: Color::Rgb(129, 199, 132),
            priority_high: Color::Rgb(229, 115, 115),
            priority_medium: Color::Rgb(255, 183, 77),
            priority_low: Color::Rgb(129, 199, 132),
        }
    }

    #[must_use]
    pub fn priority(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.priority_high,
            Priority::Medium => self.priority_medium,
            Priority::Low => self.priority_low,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
