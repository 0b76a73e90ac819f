use delivery_schedule::config::LoggingConfig;
use delivery_schedule::logger;
use log::{Level, LevelFilter, Log, Record};

#[test]
fn test_logging_disabled_installs_nothing() {
    let config = LoggingConfig::default();
    assert!(!logger::init(&config).unwrap());
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        level: "verbose".to_string(),
        ..LoggingConfig::default()
    };
    assert!(logger::build_dispatch(&config, None).is_err());
}

#[test]
fn test_dispatch_writes_to_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("delivery-schedule.log");
    let config = LoggingConfig {
        enabled: true,
        level: "info".to_string(),
        log_to_stderr: false,
    };

    let (max_level, sink) = logger::build_dispatch(&config, Some(&log_path)).unwrap().into_log();
    assert_eq!(max_level, LevelFilter::Info);

    sink.log(
        &Record::builder()
            .args(format_args!("Next delivery set"))
            .level(Level::Info)
            .target("delivery_schedule")
            .build(),
    );
    sink.log(
        &Record::builder()
            .args(format_args!("Filtered detail"))
            .level(Level::Debug)
            .target("delivery_schedule")
            .build(),
    );
    sink.flush();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("Next delivery set"));
    assert!(content.contains("INFO"));
    assert!(!content.contains("Filtered detail"));
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("delivery-schedule/delivery-schedule.log"));
    }
}
