use thiserror::Error;

/// Startup failures of the `asesor` binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] asesor_config::ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] crate::ClientError),

    #[error("Terminal error: {0}")]
    Prompt(#[from] crate::shell::PromptError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
