use chrono::NaiveDate;
use uuid::Uuid;

use taskpad::state::AppState;
use taskpad::ui::layout::LayoutMode;
use taskpad::Status;

fn state_with_item(text: &str) -> AppState {
    let mut state = AppState::new();
    state.input_value = text.to_string();
    state.add_item();
    state
}

#[test]
fn test_add_appends_one_todo_item() {
    let mut state = AppState::new();
    state.input_value = "Buy milk".to_string();
    state.add_item();

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].text, "Buy milk");
    assert_eq!(state.items[0].status, Status::Todo);
    assert!(state.items[0].reminder.is_none());
    // Drafts are cleared on success
    assert!(state.input_value.is_empty());
    assert!(state.reminder_draft.is_empty());
}

#[test]
fn test_add_trims_text() {
    let mut state = AppState::new();
    state.input_value = "  Buy milk  ".to_string();
    state.add_item();
    assert_eq!(state.items[0].text, "Buy milk");
}

#[test]
fn test_add_empty_text_is_a_no_op() {
    let mut state = AppState::new();
    state.input_value = String::new();
    state.add_item();
    assert!(state.items.is_empty());

    state.input_value = "   ".to_string();
    state.add_item();
    assert!(state.items.is_empty());
    // Drafts are retained as typed so the user can correct and resubmit
    assert_eq!(state.input_value, "   ");
}

#[test]
fn test_add_parses_reminder_draft() {
    let mut state = AppState::new();
    state.input_value = "Dentist".to_string();
    state.reminder_draft = "2030-06-15".to_string();
    state.add_item();

    let expected = NaiveDate::from_ymd_opt(2030, 6, 15).unwrap();
    assert_eq!(state.items[0].reminder, Some(expected));
    assert!(state.reminder_draft.is_empty());
}

#[test]
fn test_add_treats_malformed_reminder_as_unset() {
    let mut state = AppState::new();
    state.input_value = "Dentist".to_string();
    state.reminder_draft = "not-a-date".to_string();
    state.add_item();

    assert_eq!(state.items.len(), 1);
    assert!(state.items[0].reminder.is_none());
}

#[test]
fn test_ids_are_unique() {
    let mut state = AppState::new();
    for i in 0..10 {
        state.input_value = format!("item {i}");
        state.add_item();
    }
    let mut ids: Vec<_> = state.items.iter().map(|item| item.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[test]
fn test_items_keep_insertion_order() {
    let mut state = AppState::new();
    for text in ["first", "second", "third"] {
        state.input_value = text.to_string();
        state.add_item();
    }
    state.cycle_status(state.items[0].id);
    state.cycle_status(state.items[2].id);

    let texts: Vec<_> = state.items.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[test]
fn test_cycle_status_wraps_after_three_steps() {
    let mut state = state_with_item("Buy milk");
    let id = state.items[0].id;

    state.cycle_status(id);
    assert_eq!(state.items[0].status, Status::InProgress);
    state.cycle_status(id);
    assert_eq!(state.items[0].status, Status::Done);
    state.cycle_status(id);
    assert_eq!(state.items[0].status, Status::Todo);
}

#[test]
fn test_cycle_status_unknown_id_is_a_no_op() {
    let mut state = state_with_item("Buy milk");
    state.cycle_status(Uuid::new_v4());
    assert_eq!(state.items[0].status, Status::Todo);
}

#[test]
fn test_delete_removes_matching_item() {
    let mut state = state_with_item("Buy milk");
    let id = state.items[0].id;
    state.delete_item(id);
    assert!(state.items.is_empty());
}

#[test]
fn test_delete_unknown_id_is_a_no_op() {
    let mut state = state_with_item("Buy milk");
    let before = state.items.clone();
    state.delete_item(Uuid::new_v4());
    assert_eq!(state.items, before);
}

#[test]
fn test_begin_edit_seeds_drafts() {
    let mut state = AppState::new();
    state.input_value = "Dentist".to_string();
    state.reminder_draft = "2030-06-15".to_string();
    state.add_item();
    let id = state.items[0].id;

    state.begin_edit(id);
    assert_eq!(state.editing, Some(id));
    assert_eq!(state.input_value, "Dentist");
    assert_eq!(state.reminder_draft, "2030-06-15");
    assert_eq!(state.editing_item().map(|item| item.text.as_str()), Some("Dentist"));
}

#[test]
fn test_begin_edit_unknown_id_stays_in_add_mode() {
    let mut state = state_with_item("Buy milk");
    state.begin_edit(Uuid::new_v4());
    assert!(state.editing.is_none());
    assert!(state.input_value.is_empty());
}

#[test]
fn test_commit_edit_replaces_text_and_reminder_only() {
    let mut state = state_with_item("Buy milk");
    let id = state.items[0].id;
    let created_at = state.items[0].created_at;
    state.cycle_status(id);

    state.begin_edit(id);
    state.input_value = "Buy oat milk".to_string();
    state.reminder_draft = "2030-01-02".to_string();
    state.commit_edit();

    let item = &state.items[0];
    assert_eq!(item.text, "Buy oat milk");
    assert_eq!(item.reminder, NaiveDate::from_ymd_opt(2030, 1, 2));
    assert_eq!(item.id, id);
    assert_eq!(item.status, Status::InProgress);
    assert_eq!(item.created_at, created_at);
    // Back in add mode with cleared drafts
    assert!(state.editing.is_none());
    assert!(state.input_value.is_empty());
    assert!(state.reminder_draft.is_empty());
}

#[test]
fn test_commit_edit_with_empty_draft_keeps_edit_mode() {
    let mut state = state_with_item("Buy milk");
    let id = state.items[0].id;

    state.begin_edit(id);
    state.input_value = "   ".to_string();
    state.commit_edit();

    assert_eq!(state.items[0].text, "Buy milk");
    assert_eq!(state.editing, Some(id));
    assert_eq!(state.input_value, "   ");
}

#[test]
fn test_commit_edit_without_edit_target_is_a_no_op() {
    let mut state = state_with_item("Buy milk");
    state.input_value = "something".to_string();
    state.commit_edit();
    assert_eq!(state.items[0].text, "Buy milk");
    assert_eq!(state.input_value, "something");
}

#[test]
fn test_commit_edit_can_clear_reminder() {
    let mut state = AppState::new();
    state.input_value = "Dentist".to_string();
    state.reminder_draft = "2030-06-15".to_string();
    state.add_item();
    let id = state.items[0].id;

    state.begin_edit(id);
    state.reminder_draft.clear();
    state.commit_edit();
    assert!(state.items[0].reminder.is_none());
}

#[test]
fn test_cancel_edit_returns_to_add_mode() {
    let mut state = state_with_item("Buy milk");
    let id = state.items[0].id;

    state.begin_edit(id);
    state.cancel_edit();
    assert!(state.editing.is_none());
    assert!(state.input_value.is_empty());
    assert_eq!(state.items[0].text, "Buy milk");
}

#[test]
fn test_entering_mobile_layout_collapses_sidebar() {
    let mut state = AppState::new();
    state.sidebar_visible = true;

    state.set_layout(LayoutMode::Mobile);
    assert!(!state.sidebar_visible);

    // Widening back does not reopen it
    state.set_layout(LayoutMode::Desktop);
    assert!(!state.sidebar_visible);
}

#[test]
fn test_staying_in_mobile_does_not_force_sidebar() {
    let mut state = AppState::new();
    state.set_layout(LayoutMode::Mobile);
    state.toggle_sidebar();
    assert!(state.sidebar_visible);

    // A resize that stays in mobile keeps the user's choice
    state.set_layout(LayoutMode::Mobile);
    assert!(state.sidebar_visible);
}

#[test]
fn test_full_item_lifecycle() {
    // Add -> cycle -> edit -> delete, end to end
    let mut state = AppState::new();
    state.input_value = "Buy milk".to_string();
    state.add_item();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].status, Status::Todo);

    let id = state.items[0].id;
    state.cycle_status(id);
    assert_eq!(state.items[0].status, Status::InProgress);

    state.begin_edit(id);
    state.input_value = "Buy oat milk".to_string();
    state.commit_edit();
    assert_eq!(state.items[0].text, "Buy oat milk");
    assert_eq!(state.items[0].status, Status::InProgress);

    state.delete_item(id);
    assert!(state.items.is_empty());
}
