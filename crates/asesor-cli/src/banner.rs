use crate::{CliClientResult, ClientError, Outcome};

/// Severity of an inline message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// One user-visible message line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub level: BannerLevel,
    pub text: String,
}

impl Banner {
    pub fn new(level: BannerLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(BannerLevel::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(BannerLevel::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(BannerLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(BannerLevel::Error, text)
    }

    pub fn is_success(&self) -> bool {
        self.level == BannerLevel::Success
    }
}

/// Mutating form submissions that end in a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Register,
    Create,
    Update,
    Delete,
}

impl FormAction {
    fn success_text(&self) -> &'static str {
        match self {
            FormAction::Register => "User created successfully.",
            FormAction::Create => "Tutoring session created successfully.",
            FormAction::Update => "Tutoring session updated successfully.",
            FormAction::Delete => "Tutoring session deleted.",
        }
    }

    fn failure_prefix(&self) -> &'static str {
        match self {
            FormAction::Register => "Error creating the user",
            FormAction::Create => "Error creating the tutoring session",
            FormAction::Update => "Error updating the tutoring session",
            FormAction::Delete => "Error deleting the tutoring session",
        }
    }

    /// Banner for a finished submission.
    ///
    /// 200 is success and 204 is an informational "no content", except for
    /// deletes where 204 is the normal success reply.
    pub fn banner<T>(&self, result: &CliClientResult<Outcome<T>>) -> Banner {
        match result {
            Ok(Outcome::Done(_)) => Banner::success(self.success_text()),
            Ok(Outcome::NoContent) if *self == FormAction::Delete => {
                Banner::success(self.success_text())
            }
            Ok(Outcome::NoContent) => Banner::info("The server returned no content."),
            Err(e) => self.failure_banner(e),
        }
    }

    pub fn failure_banner(&self, error: &ClientError) -> Banner {
        Banner::error(format!("{}: {}", self.failure_prefix(), error.user_message()))
    }
}
