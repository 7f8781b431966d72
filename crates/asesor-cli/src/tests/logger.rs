use crate::error::AppError;
use crate::logger;

use std::path::PathBuf;

use asesor_config::LogLevel;

#[test]
fn test_unopenable_log_file_is_reported() {
    let path = PathBuf::from("/nonexistent-asesor-dir/nested/asesor.log");

    let result = logger::initialize(LogLevel::default(), Some(path), false);

    match result {
        Err(AppError::Logger { message }) => {
            assert!(message.contains("Failed to open log file"));
            assert!(message.contains("asesor.log"));
        }
        other => panic!("Expected logger error, got {other:?}"),
    }
}
