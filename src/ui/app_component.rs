use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, style::Style, widgets::{Block, Clear}, Frame};

use crate::config::Config;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::state::AppState;
use crate::ui::components::{
    HelpPanel, InputBarComponent, ItemListComponent, LogsPanel, SidebarComponent, StatusBar,
};
use crate::ui::core::{actions::Action, Component, EventType};
use crate::ui::layout::{LayoutManager, LayoutMode};

/// The whole view: state store, input routing, and frame composition.
///
/// Events come in through [`AppComponent::handle_event`], become a single
/// [`Action`], pass through the component hierarchy, and land in
/// [`AppComponent::handle_app_action`] where the state store is mutated.
/// Rendering is a pure function of the resulting state.
pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    item_list: ItemListComponent,
    input_bar: InputBarComponent,

    // Application state
    state: AppState,

    // Services
    layout: LayoutManager,
    icons: IconService,
    logger: Logger,

    // Simple UI state
    human_dates: bool,
    show_help: bool,
    show_logs: bool,
    should_quit: bool,
    frame_size: (u16, u16),
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger, initial_size: (u16, u16)) -> Self {
        let layout = LayoutManager::new(config.ui.narrow_width_threshold, config.ui.sidebar_width);
        let mut state = AppState::new();
        state.set_layout(layout.mode_for_width(initial_size.0));

        let mut app = Self {
            sidebar: SidebarComponent::new(),
            item_list: ItemListComponent::new(),
            input_bar: InputBarComponent::new(),
            state,
            layout,
            icons: IconService::new(config.display.icon_theme),
            logger,
            human_dates: config.display.human_dates,
            show_help: false,
            show_logs: false,
            should_quit: false,
            frame_size: initial_size,
        };
        app.sync_component_data();
        app
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Read access to the state store, used by the status bar and tests
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn input_focused(&self) -> bool {
        self.input_bar.is_focused()
    }

    /// Process one terminal event through the component hierarchy
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(w, h) => {
                self.handle_resize(w, h);
                Action::None
            }
            EventType::Tick | EventType::Other => Action::None,
        };

        // Process action through the component hierarchy, then app-level
        let action = self.input_bar.update(action);
        let action = self.item_list.update(action);
        let _final_action = self.handle_app_action(action);

        self.sync_component_data();
    }

    /// Route a key event to the overlay, the focused input bar, the list, or
    /// the global shortcuts, in that priority order
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.show_help {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::ShowHelp(false),
                _ => Action::None,
            };
        }
        if self.show_logs {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::ShowLogs(false),
                _ => Action::None,
            };
        }
        if self.input_bar.is_focused() {
            return self.input_bar.handle_key_events(key);
        }

        let list_action = self.item_list.handle_key_events(key);
        if !matches!(list_action, Action::None) {
            return list_action;
        }

        self.handle_global_key(key)
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('a') | KeyCode::Char('i') => Action::FocusInput,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('b') => Action::ToggleSidebar,
            KeyCode::Char('I') => Action::CycleIconTheme,
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowHelp(true),
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Esc => {
                if self.state.layout == LayoutMode::Mobile && self.state.sidebar_visible {
                    Action::CloseSidebar
                } else {
                    Action::Quit
                }
            }
            _ => Action::None,
        }
    }

    /// Apply an action to the state store
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::FocusInput => {
                self.input_bar.on_focus();
                Action::None
            }
            Action::BlurInput => {
                self.input_bar.on_blur();
                Action::None
            }
            Action::DraftInsert(field, c) => {
                self.state.push_draft(field, c);
                Action::None
            }
            Action::DraftBackspace(field) => {
                self.state.pop_draft(field);
                Action::None
            }
            Action::SubmitInput => {
                if let Some(id) = self.state.editing {
                    self.state.commit_edit();
                    if self.state.editing.is_none() {
                        self.logger.log(format!("Item: Updated item {}", id));
                    }
                } else {
                    let text = self.state.input_value.trim().to_string();
                    let before = self.state.items.len();
                    self.state.add_item();
                    if self.state.items.len() > before {
                        self.logger.log(format!("Item: Added '{}'", text));
                    }
                }
                Action::None
            }
            Action::BeginEdit(id) => {
                self.state.begin_edit(id);
                if self.state.editing == Some(id) {
                    self.input_bar.on_focus();
                    self.logger.log(format!("Item: Editing item {}", id));
                }
                Action::None
            }
            Action::CancelEdit => {
                self.state.cancel_edit();
                self.logger.log("Input: Edit cancelled".to_string());
                Action::None
            }
            Action::CycleStatus(id) => {
                self.state.cycle_status(id);
                if let Some(item) = self.state.items.iter().find(|item| item.id == id) {
                    self.logger
                        .log(format!("Item: '{}' is now {}", item.text, item.status.label()));
                }
                Action::None
            }
            Action::DeleteItem(id) => {
                let desc = self
                    .state
                    .items
                    .iter()
                    .find(|item| item.id == id)
                    .map(|item| format!("'{}'", item.text));
                self.state.delete_item(id);
                if let Some(desc) = desc {
                    self.logger.log(format!("Item: Deleted {}", desc));
                }
                Action::None
            }
            Action::ToggleTheme => {
                self.state.toggle_theme();
                self.logger
                    .log(format!("Theme: Switched to {} mode", self.state.theme.label()));
                Action::None
            }
            Action::ToggleSidebar => {
                self.state.toggle_sidebar();
                Action::None
            }
            Action::CloseSidebar => {
                self.state.sidebar_visible = false;
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                Action::None
            }
            Action::ShowHelp(show) => {
                self.show_help = show;
                Action::None
            }
            Action::ShowLogs(show) => {
                self.show_logs = show;
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    /// Recompute the layout mode from a new terminal width.
    ///
    /// The transition into the mobile layout always collapses the sidebar;
    /// widening back does not reopen it.
    fn handle_resize(&mut self, width: u16, height: u16) {
        self.frame_size = (width, height);
        let was = self.state.layout;
        let mode = self.layout.mode_for_width(width);
        self.state.set_layout(mode);
        if was != mode {
            self.logger
                .log(format!("Layout: {:?} -> {:?} at {} columns", was, mode, width));
        }
    }

    /// A click outside the mobile sidebar overlay dismisses it
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.state.layout == LayoutMode::Mobile
            && self.state.sidebar_visible
            && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
        {
            let (w, h) = self.frame_size;
            let overlay = self.layout.sidebar_overlay(Rect::new(0, 0, w, h));
            let inside = mouse.column >= overlay.x
                && mouse.column < overlay.x + overlay.width
                && mouse.row >= overlay.y
                && mouse.row < overlay.y + overlay.height;
            if !inside {
                return Action::CloseSidebar;
            }
        }
        Action::None
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.input_bar.update_data(
            self.state.input_value.clone(),
            self.state.reminder_draft.clone(),
            self.state.is_editing(),
            self.state.theme,
        );
        self.item_list.update_data(
            self.state.items.clone(),
            self.state.theme,
            self.state.editing,
            self.icons.clone(),
            self.human_dates,
        );
        self.sidebar
            .update_data(self.state.theme, self.state.layout, self.icons.clone());
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.state.theme.palette();

        // Themed background for the whole frame
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
            rect,
        );

        let (sidebar_area, main_area) = self.layout.main_layout(rect, self.state.layout);
        let content = self.layout.content_layout(main_area);

        self.input_bar.render(f, content[0]);
        self.item_list.render(f, content[1]);
        StatusBar::render(f, content[2], &self.state, &self.icons);

        if let Some(area) = sidebar_area {
            // Desktop: the sidebar pane is always present
            self.sidebar.render(f, area);
        } else if self.state.sidebar_visible {
            // Mobile: dismissable overlay on top of the list
            let overlay = self.layout.sidebar_overlay(rect);
            f.render_widget(Clear, overlay);
            self.sidebar.render(f, overlay);
        }

        if self.show_logs {
            LogsPanel::render(f, &self.logger.get_logs(), self.state.theme);
        }

        if self.show_help {
            HelpPanel::render(f, self.state.theme);
        }
    }
}
