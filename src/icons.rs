//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the
//! application, supporting emoji, Unicode, and ASCII fallbacks. Icon themes
//! are purely cosmetic: the three item statuses keep visually distinct glyphs
//! in every theme.

use serde::{Deserialize, Serialize};

use crate::item::Status;
use crate::theme::Theme;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
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

/// Item status icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub todo: &'static str,
    pub in_progress: &'static str,
    pub done: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub items_title: &'static str,
    pub projects_title: &'static str,
    pub reminder: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub sidebar: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub status: StatusIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
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
            status: StatusIcons {
                todo: "⚪",
                in_progress: "🔄",
                done: "✅",
            },
            ui: UiIcons {
                items_title: "📝",
                projects_title: "📁",
                reminder: "🔔",
                theme_light: "☀️",
                theme_dark: "🌙",
                sidebar: "📋",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            status: StatusIcons {
                todo: "○",
                in_progress: "◐",
                done: "✓",
            },
            ui: UiIcons {
                items_title: "▶",
                projects_title: "◆",
                reminder: "◷",
                theme_light: "☀",
                theme_dark: "☾",
                sidebar: "≡",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            status: StatusIcons {
                todo: "[ ]",
                in_progress: "[~]",
                done: "[x]",
            },
            ui: UiIcons {
                items_title: ">",
                projects_title: "#",
                reminder: "@",
                theme_light: "(o)",
                theme_dark: "(*)",
                sidebar: "=",
            },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn status(&self, status: Status) -> &'static str {
        let icons = self.icons().status;
        match status {
            Status::Todo => icons.todo,
            Status::InProgress => icons.in_progress,
            Status::Done => icons.done,
        }
    }

    #[must_use]
    pub fn reminder(&self) -> &'static str {
        self.icons().ui.reminder
    }

    #[must_use]
    pub fn items_title(&self) -> &'static str {
        self.icons().ui.items_title
    }

    #[must_use]
    pub fn projects_title(&self) -> &'static str {
        self.icons().ui.projects_title
    }

    #[must_use]
    pub fn sidebar(&self) -> &'static str {
        self.icons().ui.sidebar
    }

    /// Sun/moon indicator for the current visual theme
    #[must_use]
    pub fn theme_indicator(&self, theme: Theme) -> &'static str {
        let icons = self.icons().ui;
        match theme {
            Theme::Light => icons.theme_light,
            Theme::Dark => icons.theme_dark,
        }
    }
}
