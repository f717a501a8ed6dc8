//! Reusable UI components

pub mod help_panel;
pub mod input_bar_component;
pub mod item_list_component;
pub mod logs_panel;
pub mod sidebar_component;
pub mod status_bar;

// Component exports
pub use help_panel::HelpPanel;
pub use input_bar_component::InputBarComponent;
pub use item_list_component::ItemListComponent;
pub use logs_panel::LogsPanel;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
