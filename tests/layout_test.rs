use ratatui::layout::Rect;

use taskpad::ui::layout::{LayoutManager, LayoutMode};

#[test]
fn test_mode_threshold_boundary() {
    let layout = LayoutManager::new(80, 30);
    assert_eq!(layout.mode_for_width(79), LayoutMode::Mobile);
    assert_eq!(layout.mode_for_width(80), LayoutMode::Mobile);
    assert_eq!(layout.mode_for_width(81), LayoutMode::Desktop);
}

#[test]
fn test_mode_threshold_matches_source_breakpoint() {
    // The transition rule is threshold-independent; exercise it at the
    // original 768-unit breakpoint as well
    let layout = LayoutManager::new(768, 30);
    assert_eq!(layout.mode_for_width(768), LayoutMode::Mobile);
    assert_eq!(layout.mode_for_width(769), LayoutMode::Desktop);
}

#[test]
fn test_desktop_layout_reserves_sidebar_pane() {
    let layout = LayoutManager::new(80, 30);
    let area = Rect::new(0, 0, 120, 40);

    let (sidebar, main) = layout.main_layout(area, LayoutMode::Desktop);
    let sidebar = sidebar.expect("desktop layout always has a sidebar pane");
    assert_eq!(sidebar.width, 30);
    assert_eq!(main.width, 90);
    assert_eq!(sidebar.height, 40);
}

#[test]
fn test_desktop_sidebar_is_capped_on_small_frames() {
    let layout = LayoutManager::new(80, 30);
    let area = Rect::new(0, 0, 84, 40);

    let (sidebar, _main) = layout.main_layout(area, LayoutMode::Desktop);
    assert_eq!(sidebar.unwrap().width, 28); // a third of the frame
}

#[test]
fn test_mobile_layout_gives_main_the_full_frame() {
    let layout = LayoutManager::new(80, 30);
    let area = Rect::new(0, 0, 60, 20);

    let (sidebar, main) = layout.main_layout(area, LayoutMode::Mobile);
    assert!(sidebar.is_none());
    assert_eq!(main, area);
}

#[test]
fn test_content_layout_rows() {
    let layout = LayoutManager::new(80, 30);
    let area = Rect::new(0, 0, 100, 40);

    let rows = layout.content_layout(area);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].height, 3); // input bar
    assert_eq!(rows[2].height, 1); // status bar
    assert_eq!(rows[0].height + rows[1].height + rows[2].height, 40);
}

#[test]
fn test_sidebar_overlay_stays_inside_the_frame() {
    let layout = LayoutManager::new(80, 30);

    let overlay = layout.sidebar_overlay(Rect::new(0, 0, 60, 20));
    assert_eq!(overlay.width, 30);
    assert_eq!(overlay.height, 20);

    let tiny = layout.sidebar_overlay(Rect::new(0, 0, 20, 10));
    assert!(tiny.width <= 18);
}

#[test]
fn test_centered_rect_is_centered() {
    let area = Rect::new(0, 0, 100, 40);
    let centered = LayoutManager::centered_rect(60, 50, area);

    assert_eq!(centered.width, 60);
    assert_eq!(centered.height, 20);
    assert_eq!(centered.x, 20);
    assert_eq!(centered.y, 10);
}
