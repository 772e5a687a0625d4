use ladmin_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_install_is_a_subscriber_error() {
    let logger = Logger::builder("lightadmin-first")
        .level(LevelFilter::WARN)
        .init()
        .expect("first init should succeed");
    assert!(!logger.has_file_output());

    let err = Logger::builder("lightadmin-second").init().expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
