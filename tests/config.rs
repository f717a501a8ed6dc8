use taskpad::config::Config;
use taskpad::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.sidebar_width, 30);
    assert_eq!(config.ui.narrow_width_threshold, 80);
    assert_eq!(config.display.date_format, "%Y-%m-%d");
    assert!(config.display.human_dates);
    assert_eq!(config.display.icon_theme, IconTheme::Ascii);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Reset and test invalid narrow threshold
    config.ui.sidebar_width = 35;
    config.ui.narrow_width_threshold = 0;
    assert!(config.validate().is_err());

    // Reset and test invalid date format
    config.ui.narrow_width_threshold = 80;
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_error_messages() {
    let mut config = Config::default();
    config.ui.sidebar_width = 10;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("sidebar_width"));
    assert!(err.to_string().contains("10"));
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("sidebar_width = 30"));
    assert!(toml_str.contains("narrow_width_threshold = 80"));
    assert!(toml_str.contains("icon_theme = \"ascii\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
sidebar_width = 35

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();
    assert_eq!(config.ui.sidebar_width, 35);
    assert!(config.logging.enabled);
    // Untouched sections keep their defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.narrow_width_threshold, 80);
    assert!(config.display.human_dates);
}

#[test]
fn test_icon_theme_deserialization() {
    let toml_str = r#"
[display]
icon_theme = "emoji"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.display.icon_theme, IconTheme::Emoji);
}
