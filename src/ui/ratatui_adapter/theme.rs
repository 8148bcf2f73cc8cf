//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the picker.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the active option
    pub active_bg: Color,
    /// Foreground color for the active option
    pub active_fg: Color,
    /// Background color for selected pills
    pub pill_bg: Color,
    /// Foreground color for selected pills
    pub pill_fg: Color,
    /// Color for group headings
    pub group: Color,
    /// Color for the focus indicator
    pub cursor: Color,
    /// Color for the create hint
    pub create: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            active_bg: Color::Blue,
            active_fg: Color::White,
            pill_bg: Color::Magenta,
            pill_fg: Color::Black,
            group: Color::Yellow,
            cursor: Color::Cyan,
            create: Color::Green,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the active option row
    #[must_use]
    pub fn active_style(&self) -> Style {
        Style::default()
            .bg(self.active_bg)
            .fg(self.active_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inactive option rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for a selected pill
    #[must_use]
    pub fn pill_style(&self) -> Style {
        Style::default().bg(self.pill_bg).fg(self.pill_fg)
    }

    /// Style for group headings in the option list
    #[must_use]
    pub fn group_style(&self) -> Style {
        Style::default()
            .fg(self.group)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the focus indicator (>) and focused borders
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the "create" hint row
    #[must_use]
    pub fn create_style(&self) -> Style {
        Style::default()
            .fg(self.create)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
