use ratatui::style::Color;

use taskpad::theme::Theme;
use taskpad::Status;

#[test]
fn test_fresh_state_starts_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn test_toggle_flips_between_light_and_dark() {
    let mut theme = Theme::Light;
    theme.toggle();
    assert_eq!(theme, Theme::Dark);
    theme.toggle();
    assert_eq!(theme, Theme::Light);
}

#[test]
fn test_status_colors_are_distinct_within_each_palette() {
    for theme in [Theme::Light, Theme::Dark] {
        let palette = theme.palette();
        let todo = palette.status_color(Status::Todo);
        let in_progress = palette.status_color(Status::InProgress);
        let done = palette.status_color(Status::Done);

        assert_ne!(todo, in_progress);
        assert_ne!(in_progress, done);
        assert_ne!(todo, done);
    }
}

#[test]
fn test_dark_palette_uses_dark_status_colors() {
    let palette = Theme::Dark.palette();
    assert_eq!(palette.status_color(Status::Todo), Color::Rgb(85, 85, 85));
    assert_eq!(palette.status_color(Status::InProgress), Color::Rgb(52, 152, 219));
    assert_eq!(palette.status_color(Status::Done), Color::Rgb(46, 204, 113));
}

#[test]
fn test_light_palette_uses_named_status_colors() {
    let palette = Theme::Light.palette();
    assert_eq!(palette.status_color(Status::Todo), Color::Gray);
    assert_eq!(palette.status_color(Status::InProgress), Color::Blue);
    assert_eq!(palette.status_color(Status::Done), Color::Green);
}

#[test]
fn test_theme_labels() {
    assert_eq!(Theme::Light.label(), "light");
    assert_eq!(Theme::Dark.label(), "dark");
}
