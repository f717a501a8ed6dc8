use uuid::Uuid;

use crate::state::InputField;

/// State transitions produced by the input handler.
///
/// Every user event is mapped to exactly one action; `None` means the event
/// was absorbed (or ignored) without a state change. Actions are applied
/// atomically between draws, so the renderer never observes a half-applied
/// transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Input form
    FocusInput,
    BlurInput,
    DraftInsert(InputField, char),
    DraftBackspace(InputField),
    SubmitInput,
    BeginEdit(Uuid),
    CancelEdit,

    // Item operations
    CycleStatus(Uuid),
    DeleteItem(Uuid),

    // List navigation
    SelectNext,
    SelectPrevious,

    // Theme and chrome
    ToggleTheme,
    ToggleSidebar,
    CloseSidebar,
    CycleIconTheme,
    ShowHelp(bool),
    ShowLogs(bool),

    // App control
    Quit,
    None,
}
