//! Help panel component

use ratatui::{
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;
use crate::ui::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel as a centered modal overlay
    pub fn render(f: &mut Frame, theme: Theme) {
        let palette = theme.palette();
        let help_area = LayoutManager::centered_rect(60, 70, f.area());
        f.render_widget(Clear, help_area);

        let help_content = r"
ITEMS
-----
a / i       Focus the input bar (add mode)
Enter       Submit the input bar (add or update)
Tab         Switch between text and reminder fields
Esc         Cancel edit / unfocus the input bar
j/k         Navigate items (down/up)
Space/Enter Cycle item status (todo -> in progress -> done)
e           Edit selected item
d           Delete selected item

APPEARANCE
----------
t           Toggle light/dark theme
I           Cycle icon theme (ascii/unicode/emoji)
b           Toggle sidebar (narrow layouts)

GENERAL
-------
?           Toggle this help panel
G           Toggle the logs panel
q / Ctrl+C  Quit
";

        let help_panel = Paragraph::new(help_content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - press Esc or '?' to close")
                    .border_style(Style::default().fg(palette.border_focused)),
            )
            .style(Style::default().fg(palette.foreground));

        f.render_widget(help_panel, help_area);
    }
}
