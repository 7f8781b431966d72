use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, ListScopeMode, OwnerField};

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

// Request timeout constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote asesorías backend settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST backend
    pub base_url: String,
    /// Upper bound on every request, connect through body
    pub timeout_secs: u64,
    pub list_scope: ListScopeMode,
    pub owner_field: OwnerField,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            list_scope: ListScopeMode::default(),
            owner_field: OwnerField::default(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::api(format!("api.base_url '{}' is not a URL: {e}", self.base_url))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::api(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if url.cannot_be_a_base() {
            return Err(ConfigError::api(format!(
                "api.base_url '{}' cannot be used as a base",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::config(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether signing in must also resolve the numeric user id
    pub fn needs_user_id(&self) -> bool {
        self.list_scope == ListScopeMode::UserId || self.owner_field == OwnerField::UserId
    }
}
