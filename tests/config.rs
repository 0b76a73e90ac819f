use delivery_schedule::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.scheduling.strict_labels);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.log_to_stderr);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid logging level should fail
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    // Reset and test a padded database path
    config.logging.level = "debug".to_string();
    config.storage.database_path = " leads.db".to_string();
    assert!(config.validate().is_err());

    // Empty path means in-memory and is valid
    config.storage.database_path = String::new();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("strict_labels = false"));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[scheduling]
strict_labels = true

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert!(config.scheduling.strict_labels);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.storage.database_path, Config::default().storage.database_path);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.storage.database_path, default_config.storage.database_path);
    assert_eq!(config.scheduling.strict_labels, default_config.scheduling.strict_labels);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("delivery-schedule.toml");
    std::fs::write(
        &path,
        r#"
[storage]
database_path = ""

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.storage.database_path, "");
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Warn);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
    assert!(Config::load_from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_generate_config_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nested").join("config.toml");
    assert!(!config_path.parent().unwrap().exists());

    Config::generate_default_config(&config_path).unwrap();
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Delivery Schedule Configuration File"));
    assert!(content.contains("strict_labels = false"));

    // The generated file loads back
    assert!(Config::load_from_file(&config_path).is_ok());
}
