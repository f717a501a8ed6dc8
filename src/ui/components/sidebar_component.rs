//! Navigation sidebar.
//!
//! A static "Projects" placeholder: it renders a heading and a hint, carries
//! no data, and has no selection behavior. In the desktop layout it is a
//! fixed left pane; in the mobile layout it renders as an overlay that any
//! outside click or Esc dismisses.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

use crate::constants::SIDEBAR_TITLE;
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutMode;

pub struct SidebarComponent {
    pub icons: IconService,
    theme: Theme,
    layout: LayoutMode,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            icons: IconService::default(),
            theme: Theme::Light,
            layout: LayoutMode::Desktop,
        }
    }

    pub fn update_data(&mut self, theme: Theme, layout: LayoutMode, icons: IconService) {
        self.theme = theme;
        self.layout = layout;
        self.icons = icons;
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // Placeholder content, nothing to navigate
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.theme.palette();

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} {}", self.icons.projects_title(), SIDEBAR_TITLE),
                Style::default()
                    .fg(palette.foreground)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "No projects yet",
                Style::default().fg(palette.muted),
            )),
        ];

        if self.layout == LayoutMode::Mobile {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Esc or click outside to close",
                Style::default().fg(palette.muted),
            )));
        }

        let sidebar = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        );

        f.render_widget(sidebar, rect);
    }
}
