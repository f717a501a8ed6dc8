//! Constants used throughout the application
//!
//! This module centralizes layout dimensions and UI text to improve
//! maintainability and consistency.

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
/// Terminal widths at or below this many columns use the mobile layout
pub const NARROW_WIDTH_DEFAULT: u16 = 80;
/// Height of the input bar in rows (content plus borders)
pub const INPUT_BAR_HEIGHT: u16 = 3;
/// Height of the status bar in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;
/// Width of the reminder date field in columns
pub const REMINDER_FIELD_WIDTH: u16 = 14;

// UI Text
pub const PLACEHOLDER_ADD: &str = "Add a new to-do";
pub const PLACEHOLDER_EDIT: &str = "Edit to-do";
pub const SIDEBAR_TITLE: &str = "Projects";
pub const ITEMS_TITLE: &str = "To-dos";
pub const EMPTY_LIST_HINT: &str = "No to-dos yet. Press 'a' to add one.";

// CLI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
