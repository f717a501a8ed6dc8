//! Logs panel component

use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::theme::Theme;
use crate::ui::layout::LayoutManager;

/// Modal overlay listing recent log entries, newest first
pub struct LogsPanel;

impl LogsPanel {
    pub fn render(f: &mut Frame, logs: &[String], theme: Theme) {
        let palette = theme.palette();
        let area = LayoutManager::centered_rect(80, 70, f.area());
        f.render_widget(Clear, area);

        let visible = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = logs
            .iter()
            .take(visible)
            .map(|entry| ListItem::new(Line::from(entry.clone())))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Logs - press Esc or 'G' to close")
                    .border_style(Style::default().fg(palette.border_focused)),
            )
            .style(Style::default().fg(palette.foreground));

        f.render_widget(list, area);
    }
}
