use taskmaster::config::LoggingConfig;
use taskmaster::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    // Test with logging disabled
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.is_enabled());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));
}

#[test]
fn test_clones_share_entries() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        enabled: true,
        level: "loud".to_string(),
    };
    assert!(Logger::from_config(&config).is_err());
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = Logger::get_log_file_path() {
        assert!(path.ends_with("taskmaster/taskmaster.log"));
    }
}
