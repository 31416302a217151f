use std::fs;

use taskmaster::config::Config;
use taskmaster::icons::IconTheme;
use taskmaster::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert!(!config.ui.default_dark_mode);
    assert_eq!(config.display.date_format, datetime::DUE_DATE_FORMAT);
    assert!(!config.display.human_dates);
    assert!(config.storage.database_path.is_none());
    assert!(!config.storage.in_memory);
    assert_eq!(config.calendar.base_url, "https://calendar.google.com/calendar/render");
    assert!(config.calendar.open_in_browser);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty date format should fail
    config.display.date_format = "  ".to_string();
    assert!(config.validate().is_err());

    // Reset and test a non-http calendar URL
    config.display.date_format = "%d/%m/%Y".to_string();
    assert!(config.validate().is_ok());
    config.calendar.base_url = "ftp://calendar.example.com".to_string();
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.calendar.base_url = "https://calendar.example.com/new".to_string();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());

    // In-memory storage cannot also name a database file
    config.logging.level = "debug".to_string();
    config.storage.in_memory = true;
    config.storage.database_path = Some("/tmp/tasks.db".into());
    assert!(config.validate().is_err());
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
icon_theme = "emoji"

[calendar]
open_in_browser = false

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.icon_theme, IconTheme::Emoji);
    assert!(!config.calendar.open_in_browser);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(!config.ui.default_dark_mode);
    assert_eq!(config.calendar.base_url, "https://calendar.google.com/calendar/render");
    assert_eq!(config.display.date_format, datetime::DUE_DATE_FORMAT);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.icon_theme, default_config.ui.icon_theme);
    assert_eq!(config.display.date_format, default_config.display.date_format);
    assert_eq!(config.calendar.base_url, default_config.calendar.base_url);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskmaster").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Task Master Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.display.date_format, datetime::DUE_DATE_FORMAT);
    assert!(loaded.calendar.open_in_browser);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[calendar]\nbase_url = \"calendar.example.com\"\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_load_from_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load_from_file(dir.path().join("absent.toml")).is_err());
}
