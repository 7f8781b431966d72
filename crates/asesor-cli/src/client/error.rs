use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur while talking to the asesorías backend
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection failure or timeout before a response arrived
    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        timed_out: bool,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Credentials rejected or token response unusable
    #[error("Authentication failed: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    /// Form input rejected before any request was sent
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Non-success status from a resource endpoint
    #[error("Server returned {status}: {detail} {location}")]
    Resource {
        status: u16,
        detail: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid endpoint URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Network {
            message: err.to_string(),
            timed_out: err.is_timeout(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        ClientError::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn resource<S: Into<String>>(status: u16, detail: S) -> Self {
        ClientError::Resource {
            status,
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url<S: Into<String>>(message: S) -> Self {
        ClientError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text suitable for a banner: no source locations, no internals
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network {
                timed_out: true, ..
            } => "The server did not answer in time.".to_string(),
            ClientError::Network { .. } => "Could not reach the server.".to_string(),
            ClientError::Auth { message, .. } | ClientError::Validation { message, .. } => {
                message.clone()
            }
            ClientError::Resource { detail, .. } => detail.clone(),
            ClientError::Json { .. } => "The server sent a response that could not be read.".to_string(),
            ClientError::Url { message, .. } => message.clone(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
