use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use uuid::Uuid;

use crate::constants::{EMPTY_LIST_HINT, ITEMS_TITLE};
use crate::icons::IconService;
use crate::item::Item;
use crate::theme::Theme;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;

/// Scrollable list of to-do items with a keyboard-driven selection.
///
/// Each row shows a status-colored edge marker and icon, the item text, and
/// the reminder date when one is set. Selection wraps at both ends.
pub struct ItemListComponent {
    pub items: Vec<Item>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    theme: Theme,
    editing: Option<Uuid>,
    human_dates: bool,
}

impl Default for ItemListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemListComponent {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            theme: Theme::Light,
            editing: None,
            human_dates: true,
        }
    }

    pub fn update_data(
        &mut self,
        items: Vec<Item>,
        theme: Theme,
        editing: Option<Uuid>,
        icons: IconService,
        human_dates: bool,
    ) {
        self.items = items;
        self.theme = theme;
        self.editing = editing;
        self.icons = icons;
        self.human_dates = human_dates;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.items.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.items.len() {
                self.selected_index = self.items.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected_index)
    }

    fn format_reminder(&self, date: chrono::NaiveDate) -> String {
        if self.human_dates {
            datetime::format_human_date(date)
        } else {
            datetime::format_ymd(date)
        }
    }

    fn create_item_row(&self, item: &Item) -> ListItem<'_> {
        let palette = self.theme.palette();
        let status_color = palette.status_color(item.status);

        let mut line_spans = Vec::new();

        // Status-colored edge marker, the terminal analog of a border accent
        line_spans.push(Span::styled("▌", Style::default().fg(status_color)));
        line_spans.push(Span::styled(
            format!("{} ", self.icons.status(item.status)),
            Style::default().fg(status_color),
        ));

        let text_style = if item.status == crate::item::Status::Done {
            Style::default().fg(palette.muted).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(palette.foreground)
        };
        line_spans.push(Span::styled(item.text.clone(), text_style));

        if self.editing == Some(item.id) {
            line_spans.push(Span::styled(
                " (editing)",
                Style::default().fg(palette.border_focused).add_modifier(Modifier::ITALIC),
            ));
        }

        if let Some(reminder) = item.reminder {
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(
                format!("{} {}", self.icons.reminder(), self.format_reminder(reminder)),
                Style::default().fg(palette.reminder),
            ));
        }

        ListItem::new(Line::from(line_spans))
    }
}

impl Component for ItemListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(item) = self.get_selected_item() {
                    Action::CycleStatus(item.id)
                } else {
                    Action::None
                }
            }
            KeyCode::Char('e') => {
                if let Some(item) = self.get_selected_item() {
                    Action::BeginEdit(item.id)
                } else {
                    Action::None
                }
            }
            KeyCode::Char('d') => {
                if let Some(item) = self.get_selected_item() {
                    Action::DeleteItem(item.id)
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectNext => {
                if !self.items.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.items.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::SelectPrevious => {
                if !self.items.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.items.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.theme.palette();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} {}", self.icons.items_title(), ITEMS_TITLE))
            .border_style(Style::default().fg(palette.border));

        if self.items.is_empty() {
            let empty_list = List::new(vec![ListItem::new(Span::styled(
                EMPTY_LIST_HINT,
                Style::default().fg(palette.muted),
            ))])
            .block(block);
            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
        } else {
            let items: Vec<ListItem> = self.items.iter().map(|item| self.create_item_row(item)).collect();
            let mut list_state = self.list_state.clone();

            let list = List::new(items).block(block).highlight_style(
                Style::default()
                    .bg(palette.selection_bg)
                    .add_modifier(Modifier::BOLD),
            );

            f.render_stateful_widget(list, rect, &mut list_state);
            self.list_state = list_state;
        }
    }
}
