use crate::ConfigError;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Owner key written into a new tutoring session payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerField {
    #[default]
    Username,
    UserId,
}

impl OwnerField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerField::Username => "username",
            OwnerField::UserId => "user_id",
        }
    }
}

impl fmt::Display for OwnerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnerField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "username" => Ok(OwnerField::Username),
            "user_id" => Ok(OwnerField::UserId),
            other => Err(ConfigError::config(format!(
                "api.owner_field must be username or user_id, got '{other}'"
            ))),
        }
    }
}
