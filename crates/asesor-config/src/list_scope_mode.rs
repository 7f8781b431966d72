use crate::ConfigError;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How the session list is narrowed to the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListScopeMode {
    /// `GET /asesorias`, the backend filters by bearer token
    Token,
    /// `GET /asesorias/username/{username}`
    #[default]
    Username,
    /// `GET /asesorias?usuario_id={id}`
    UserId,
}

impl ListScopeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListScopeMode::Token => "token",
            ListScopeMode::Username => "username",
            ListScopeMode::UserId => "user_id",
        }
    }
}

impl fmt::Display for ListScopeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListScopeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "token" => Ok(ListScopeMode::Token),
            "username" => Ok(ListScopeMode::Username),
            "user_id" => Ok(ListScopeMode::UserId),
            other => Err(ConfigError::config(format!(
                "api.list_scope must be token, username or user_id, got '{other}'"
            ))),
        }
    }
}
