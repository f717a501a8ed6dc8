//! To-do item data model.

use chrono::{DateTime, Local, NaiveDate};
use uuid::Uuid;

/// Lifecycle stage of a to-do item.
///
/// Statuses advance cyclically: `Todo -> InProgress -> Done -> Todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// The next status in the cycle, wrapping after `Done`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Status::Todo => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::Todo,
        }
    }

    /// Human-readable label, used in tooltips and the status bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in progress",
            Status::Done => "done",
        }
    }
}

/// A single to-do entry.
///
/// `id` and `created_at` are set once at creation and never change; `text`
/// and `reminder` are replaced by edit commits, `status` by status cycling.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub text: String,
    pub status: Status,
    pub reminder: Option<NaiveDate>,
    pub created_at: DateTime<Local>,
}

impl Item {
    /// Create a new item with a fresh v4 id, status `Todo` and the current
    /// local timestamp. Text validation happens in the state layer.
    #[must_use]
    pub fn new(text: String, reminder: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            status: Status::Todo,
            reminder,
            created_at: Local::now(),
        }
    }
}
