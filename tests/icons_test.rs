use taskpad::icons::*;
use taskpad::theme::Theme;
use taskpad::Status;

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_cycle_icon_theme_order() {
    let mut service = IconService::new(IconTheme::Ascii);
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Unicode);
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Emoji);
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_ascii_status_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.status(Status::Todo), "[ ]");
    assert_eq!(service.status(Status::InProgress), "[~]");
    assert_eq!(service.status(Status::Done), "[x]");
}

#[test]
fn test_unicode_status_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.status(Status::Todo), "○");
    assert_eq!(service.status(Status::InProgress), "◐");
    assert_eq!(service.status(Status::Done), "✓");
}

#[test]
fn test_status_icons_are_distinct_in_every_theme() {
    for theme in [IconTheme::Ascii, IconTheme::Unicode, IconTheme::Emoji] {
        let service = IconService::new(theme);
        let todo = service.status(Status::Todo);
        let in_progress = service.status(Status::InProgress);
        let done = service.status(Status::Done);

        assert_ne!(todo, in_progress);
        assert_ne!(in_progress, done);
        assert_ne!(todo, done);
    }
}

#[test]
fn test_theme_indicator_follows_visual_theme() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.theme_indicator(Theme::Light), "☀");
    assert_eq!(service.theme_indicator(Theme::Dark), "☾");
}
