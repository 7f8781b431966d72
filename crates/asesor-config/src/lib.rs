mod api_config;
mod config;
mod error;
mod list_scope_mode;
mod log_level;
mod logging_config;
mod owner_field;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use list_scope_mode::ListScopeMode;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use owner_field::OwnerField;

const DEFAULT_BASE_URL: &str = "https://asesorias-api.azurewebsites.net";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const CONFIG_DIR_ENV: &str = "ASESOR_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".asesor";
const CONFIG_FILE_NAME: &str = "config.toml";
