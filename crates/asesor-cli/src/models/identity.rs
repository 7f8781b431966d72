use std::fmt;

/// The signed-in user: created by the credential gate, dropped on logout
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    token: Option<String>,
    /// Numeric backend id, resolved only when the configured scope needs it
    pub user_id: Option<i64>,
}

impl Identity {
    pub fn new(username: impl Into<String>, token: Option<String>) -> Self {
        Self {
            username: username.into(),
            token,
            user_id: None,
        }
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Bearer token attached to every request made for this identity
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_id", &self.user_id)
            .finish()
    }
}
