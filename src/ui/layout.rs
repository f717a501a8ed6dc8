//! Layout management and calculations
//!
//! The responsive split between sidebar and main content. Terminal widths at
//! or below the narrow threshold use the [`LayoutMode::Mobile`] layout, where
//! the sidebar becomes a dismissable overlay instead of a fixed pane.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{INPUT_BAR_HEIGHT, STATUS_BAR_HEIGHT};

/// Layout mode derived from the terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Desktop,
    Mobile,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager {
    narrow_threshold: u16,
    sidebar_width: u16,
}

impl LayoutManager {
    #[must_use]
    pub fn new(narrow_threshold: u16, sidebar_width: u16) -> Self {
        Self {
            narrow_threshold,
            sidebar_width,
        }
    }

    /// Recompute the layout mode for a terminal width
    #[must_use]
    pub fn mode_for_width(&self, width: u16) -> LayoutMode {
        if width <= self.narrow_threshold {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    /// Split the frame into sidebar and main areas.
    ///
    /// Desktop reserves a fixed-width left pane for the sidebar; mobile gives
    /// the main content the full frame (the sidebar renders as an overlay).
    #[must_use]
    pub fn main_layout(&self, area: Rect, mode: LayoutMode) -> (Option<Rect>, Rect) {
        match mode {
            LayoutMode::Desktop => {
                let sidebar_width = self.sidebar_width.min(area.width / 3);
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
                    .split(area);
                (Some(chunks[0]), chunks[1])
            }
            LayoutMode::Mobile => (None, area),
        }
    }

    /// Split the main area into input bar, item list, and status bar
    #[must_use]
    pub fn content_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area)
            .to_vec()
    }

    /// Area the sidebar overlay occupies in the mobile layout
    #[must_use]
    pub fn sidebar_overlay(&self, area: Rect) -> Rect {
        let width = self.sidebar_width.min(area.width.saturating_sub(2).max(1));
        Rect::new(area.x, area.y, width, area.height)
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
}
