//! Shared add/edit input bar.
//!
//! One text field and one date field serve both flows; whether a submit adds
//! a new item or commits an edit is decided by the explicit edit tag in the
//! state, never by what the fields contain. Tab moves between the fields,
//! Enter submits, Esc cancels an edit or blurs the bar.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{PLACEHOLDER_ADD, PLACEHOLDER_EDIT, REMINDER_FIELD_WIDTH};
use crate::state::InputField;
use crate::theme::Theme;
use crate::ui::core::{actions::Action, Component};

pub struct InputBarComponent {
    focused: bool,
    active_field: InputField,
    // Display copies, refreshed from the state store before every draw
    input_value: String,
    reminder_draft: String,
    editing: bool,
    theme: Theme,
}

impl Default for InputBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBarComponent {
    pub fn new() -> Self {
        Self {
            focused: false,
            active_field: InputField::Text,
            input_value: String::new(),
            reminder_draft: String::new(),
            editing: false,
            theme: Theme::Light,
        }
    }

    pub fn update_data(&mut self, input_value: String, reminder_draft: String, editing: bool, theme: Theme) {
        self.input_value = input_value;
        self.reminder_draft = reminder_draft;
        self.editing = editing;
        self.theme = theme;
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn field_style(&self, field: InputField) -> Style {
        let palette = self.theme.palette();
        if self.focused && self.active_field == field {
            Style::default().fg(palette.border_focused)
        } else {
            Style::default().fg(palette.border)
        }
    }
}

impl Component for InputBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitInput,
            KeyCode::Esc => {
                if self.editing {
                    Action::CancelEdit
                } else {
                    Action::BlurInput
                }
            }
            KeyCode::Tab => {
                self.active_field = match self.active_field {
                    InputField::Text => InputField::Reminder,
                    InputField::Reminder => InputField::Text,
                };
                Action::None
            }
            KeyCode::Char(c) => Action::DraftInsert(self.active_field, c),
            KeyCode::Backspace => Action::DraftBackspace(self.active_field),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.theme.palette();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(REMINDER_FIELD_WIDTH)])
            .split(rect);

        let title = if self.editing { PLACEHOLDER_EDIT } else { PLACEHOLDER_ADD };
        let text_content = if self.input_value.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press 'a' to start typing",
                Style::default().fg(palette.muted),
            ))
        } else {
            Line::from(Span::styled(
                self.input_value.clone(),
                Style::default().fg(palette.foreground),
            ))
        };

        let text_field = Paragraph::new(text_content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(self.field_style(InputField::Text)),
        );
        f.render_widget(text_field, chunks[0]);

        let date_content = if self.reminder_draft.is_empty() {
            Line::from(Span::styled("YYYY-MM-DD", Style::default().fg(palette.muted)))
        } else {
            Line::from(Span::styled(
                self.reminder_draft.clone(),
                Style::default().fg(palette.foreground),
            ))
        };

        let date_field = Paragraph::new(date_content).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Reminder")
                .border_style(self.field_style(InputField::Reminder)),
        );
        f.render_widget(date_field, chunks[1]);

        if self.focused {
            // Place the terminal cursor at the end of the active draft
            let (area, len) = match self.active_field {
                InputField::Text => (chunks[0], self.input_value.chars().count()),
                InputField::Reminder => (chunks[1], self.reminder_draft.chars().count()),
            };
            let max_x = area.width.saturating_sub(2) as usize;
            let x = area.x + 1 + len.min(max_x) as u16;
            f.set_cursor_position((x, area.y + 1));
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
        self.active_field = InputField::Text;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
