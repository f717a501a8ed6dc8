//! Application view state and item operations.
//!
//! [`AppState`] owns everything the renderer needs: the item list plus the
//! transient UI state (input drafts, edit target, theme, sidebar and layout
//! flags). All of it lives in memory for the lifetime of the view and is
//! discarded on exit.
//!
//! Every operation here is total: it either fully applies or fully no-ops.
//! Empty drafts and unknown ids are ignored rather than reported, so the
//! input handler never has an error path to deal with.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::item::{Item, Status};
use crate::theme::Theme;
use crate::ui::layout::LayoutMode;
use crate::utils::datetime;

/// Which field of the shared input bar a draft edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Text,
    Reminder,
}

/// The single in-memory store behind the view.
///
/// Items are kept in insertion order and never re-sorted. The two draft
/// strings are shared between add and edit flows; `editing` is the explicit
/// mode tag that tells them apart.
#[derive(Debug, Clone)]
pub struct AppState {
    pub items: Vec<Item>,
    pub input_value: String,
    pub reminder_draft: String,
    pub editing: Option<Uuid>,
    pub theme: Theme,
    pub sidebar_visible: bool,
    pub layout: LayoutMode,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            input_value: String::new(),
            reminder_draft: String::new(),
            editing: None,
            theme: Theme::Light,
            sidebar_visible: false,
            layout: LayoutMode::Desktop,
        }
    }

    /// Append a new item built from the current drafts.
    ///
    /// No-op when the trimmed text draft is empty; the drafts are kept as
    /// typed so the user can correct and resubmit. On success both drafts
    /// are cleared and the new item starts in `Todo`.
    pub fn add_item(&mut self) {
        let text = self.input_value.trim();
        if text.is_empty() {
            return;
        }
        let reminder = self.parse_reminder_draft();
        self.items.push(Item::new(text.to_string(), reminder));
        self.clear_drafts();
    }

    /// Remove the item with the given id; unknown ids are ignored
    pub fn delete_item(&mut self, id: Uuid) {
        self.items.retain(|item| item.id != id);
    }

    /// Advance an item's status one step through the cycle
    pub fn cycle_status(&mut self, id: Uuid) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.status = item.status.next();
        }
    }

    /// Enter edit mode for the given item, seeding the drafts from its
    /// current text and reminder. Unknown ids leave the state in add mode.
    pub fn begin_edit(&mut self, id: Uuid) {
        let Some(item) = self.items.iter().find(|item| item.id == id) else {
            return;
        };
        self.input_value = item.text.clone();
        self.reminder_draft = item
            .reminder
            .map(datetime::format_ymd)
            .unwrap_or_default();
        self.editing = Some(id);
    }

    /// Replace the edited item's text and reminder with the current drafts.
    ///
    /// Only meaningful while `editing` is set. An empty trimmed text draft
    /// is a no-op that keeps the edit target and drafts intact. `id`,
    /// `status` and `created_at` are never touched.
    pub fn commit_edit(&mut self) {
        let Some(id) = self.editing else {
            return;
        };
        let text = self.input_value.trim();
        if text.is_empty() {
            return;
        }
        let reminder = self.parse_reminder_draft();
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.text = text.to_string();
            item.reminder = reminder;
        }
        self.editing = None;
        self.clear_drafts();
    }

    /// Explicitly leave edit mode without applying the drafts
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.clear_drafts();
    }

    /// Append a character to one of the drafts
    pub fn push_draft(&mut self, field: InputField, c: char) {
        match field {
            InputField::Text => self.input_value.push(c),
            InputField::Reminder => self.reminder_draft.push(c),
        }
    }

    /// Remove the last character from one of the drafts
    pub fn pop_draft(&mut self, field: InputField) {
        match field {
            InputField::Text => {
                self.input_value.pop();
            }
            InputField::Reminder => {
                self.reminder_draft.pop();
            }
        }
    }

    /// Flip the light/dark theme
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    /// Flip sidebar visibility (only meaningful in the mobile layout)
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    /// Apply a recomputed layout mode.
    ///
    /// Entering the mobile layout always starts with the sidebar collapsed;
    /// returning to desktop leaves the visibility flag as it was.
    pub fn set_layout(&mut self, mode: LayoutMode) {
        if self.layout != mode && mode == LayoutMode::Mobile {
            self.sidebar_visible = false;
        }
        self.layout = mode;
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The item currently being edited, if any
    #[must_use]
    pub fn editing_item(&self) -> Option<&Item> {
        let id = self.editing?;
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items with the given status
    #[must_use]
    pub fn count_by_status(&self, status: Status) -> usize {
        self.items.iter().filter(|item| item.status == status).count()
    }

    /// Parse the reminder draft; blank or malformed input means "unset"
    fn parse_reminder_draft(&self) -> Option<NaiveDate> {
        let draft = self.reminder_draft.trim();
        if draft.is_empty() {
            return None;
        }
        datetime::parse_date(draft).ok()
    }

    fn clear_drafts(&mut self) {
        self.input_value.clear();
        self.reminder_draft.clear();
    }
}
