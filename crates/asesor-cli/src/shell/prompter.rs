use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    /// User abandoned the current form (Ctrl-C)
    #[error("Input cancelled")]
    Cancelled,

    /// Input stream ended (Ctrl-D, closed stdin)
    #[error("Input closed")]
    Closed,

    #[error("Terminal error: {message} {location}")]
    Terminal {
        message: String,
        location: ErrorLocation,
    },
}

impl PromptError {
    #[track_caller]
    pub fn terminal<S: Into<String>>(message: S) -> Self {
        PromptError::Terminal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type PromptResult<T> = std::result::Result<T, PromptError>;

/// Source of form field input
pub trait Prompter {
    fn ask(&mut self, label: &str) -> PromptResult<String>;

    /// Same as `ask` but the typed text must not be echoed
    fn ask_secret(&mut self, label: &str) -> PromptResult<String>;
}
