use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    /// `NAME=value` overrides that did not parse; reported by `log_summary`
    /// since `load` runs before the logger exists.
    #[serde(skip)]
    ignored_overrides: Vec<String>,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ASESOR_CONFIG_DIR env var, else use ./.asesor/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply ASESOR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ASESOR_CONFIG_DIR env var > ./.asesor/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;

        if let Some(ref file) = self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be empty"));
        }

        Ok(())
    }

    /// Environment overrides that were rejected during `load`.
    pub fn ignored_overrides(&self) -> &[String] {
        &self.ignored_overrides
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        for entry in &self.ignored_overrides {
            warn!("Ignoring {entry}: not a valid value");
        }
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!(
            "  scope: list by {}, owner field {}",
            self.api.list_scope, self.api.owner_field
        );
        info!(
            "  logging: {} -> {} (colored: {})",
            *self.logging.level,
            self.logging.file.as_deref().unwrap_or("stderr"),
            self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        let ignored = &mut self.ignored_overrides;

        // Api
        Self::apply_env_string("ASESOR_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("ASESOR_API_TIMEOUT_SECS", &mut self.api.timeout_secs, ignored);
        Self::apply_env_parse("ASESOR_API_LIST_SCOPE", &mut self.api.list_scope, ignored);
        Self::apply_env_parse("ASESOR_API_OWNER_FIELD", &mut self.api.owner_field, ignored);

        // Logging
        Self::apply_env_parse("ASESOR_LOG_LEVEL", &mut self.logging.level, ignored);
        Self::apply_env_bool("ASESOR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ASESOR_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(
        var_name: &str,
        target: &mut T,
        ignored: &mut Vec<String>,
    ) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => ignored.push(format!("{var_name}={val}")),
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
