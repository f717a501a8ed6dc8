//! Status bar component

use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::icons::IconService;
use crate::item::Status;
use crate::state::AppState;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState, icons: &IconService) {
        let palette = state.theme.palette();

        let status_text = format!(
            "{} {} · {} todo · {} in progress · {} done · a: add · e: edit · d: delete · t: theme · ?: help · q: quit",
            icons.theme_indicator(state.theme),
            state.theme.label(),
            state.count_by_status(Status::Todo),
            state.count_by_status(Status::InProgress),
            state.count_by_status(Status::Done),
        );

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted));

        f.render_widget(status_bar, area);
    }
}
