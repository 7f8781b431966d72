use crate::error::{AppError, Result as AppResult};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Route the `log` facade through fern.
///
/// With a `log_file` every record is appended there with a full timestamp and
/// its target. Otherwise records go to stderr, since stdout belongs to the
/// shell; `colored` only affects that console output.
pub fn initialize(
    log_level: asesor_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppResult<()> {
    let level_filter = log_level.0;

    let sink = match log_file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| AppError::Logger {
                    message: format!("Failed to open log file {}: {}", log_path.display(), e),
                })?;

            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {} [{}]",
                        humantime::format_rfc3339(SystemTime::now()),
                        record.level(),
                        message,
                        record.target(),
                    ))
                })
                .chain(file)
        }
        None => {
            let colors = colored.then(|| {
                ColoredLevelConfig::new()
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red)
            });

            Dispatch::new()
                .format(move |out, message, record| {
                    let level = match colors {
                        Some(colors) => colors.color(record.level()).to_string(),
                        None => record.level().to_string(),
                    };
                    out.finish(format_args!(
                        "[{} - {}] {}",
                        humantime::format_rfc3339_seconds(SystemTime::now()),
                        level,
                        message,
                    ))
                })
                .chain(std::io::stderr())
        }
    };

    Dispatch::new()
        .level(level_filter)
        // connection pool chatter from reqwest
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("rustyline", log::LevelFilter::Warn)
        .chain(sink)
        .apply()
        .map_err(|e| AppError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logging at {level_filter} to {}", path.display()),
        None => info!("Logging at {level_filter} to stderr"),
    }

    Ok(())
}
