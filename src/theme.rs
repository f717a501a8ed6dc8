//! Theme controller and color palettes.
//!
//! A two-state light/dark toggle. Every color the renderer uses is derived
//! from the current [`Theme`] through [`Theme::palette`], so flipping the
//! theme restyles the whole frame on the next draw. The choice is not
//! persisted; a fresh launch always starts in light mode.

use ratatui::style::Color;

use crate::item::Status;

/// Visual theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip between light and dark
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Human-readable name, used in the status bar
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The full color palette for this theme
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}

/// Complete set of colors for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub status_todo: Color,
    pub status_in_progress: Color,
    pub status_done: Color,
    pub reminder: Color,
}

impl Palette {
    const LIGHT: Palette = Palette {
        background: Color::Reset,
        foreground: Color::Black,
        muted: Color::DarkGray,
        border: Color::Gray,
        border_focused: Color::Cyan,
        selection_bg: Color::LightBlue,
        status_todo: Color::Gray,
        status_in_progress: Color::Blue,
        status_done: Color::Green,
        reminder: Color::Rgb(255, 165, 0),
    };

    const DARK: Palette = Palette {
        background: Color::Rgb(26, 26, 26),
        foreground: Color::White,
        muted: Color::Gray,
        border: Color::DarkGray,
        border_focused: Color::Cyan,
        selection_bg: Color::DarkGray,
        status_todo: Color::Rgb(85, 85, 85),
        status_in_progress: Color::Rgb(52, 152, 219),
        status_done: Color::Rgb(46, 204, 113),
        reminder: Color::Rgb(255, 165, 0),
    };

    /// Edge-marker and icon color for an item status
    #[must_use]
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Todo => self.status_todo,
            Status::InProgress => self.status_in_progress,
            Status::Done => self.status_done,
        }
    }
}
