use crate::{
    CliClientResult, Client, ClientError,
    models::{Identity, ListScope, TutoringSession},
};

use asesor_config::ListScopeMode;
use log::debug;

/// Sessions to show, plus the reason when there are none to show.
///
/// A failed fetch always yields an empty list, never a partial one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub sessions: Vec<TutoringSession>,
    pub error: Option<String>,
}

impl Listing {
    fn failed(error: &ClientError) -> Self {
        Self {
            sessions: Vec::new(),
            error: Some(format!(
                "Error fetching tutoring sessions: {}",
                error.user_message()
            )),
        }
    }
}

/// Narrow the collection to the signed-in user
pub fn scope_for(identity: &Identity, mode: ListScopeMode) -> CliClientResult<ListScope> {
    match mode {
        ListScopeMode::Token => Ok(ListScope::Token),
        ListScopeMode::Username => Ok(ListScope::Username(identity.username.clone())),
        ListScopeMode::UserId => identity.user_id.map(ListScope::UserId).ok_or_else(|| {
            ClientError::validation("Your user id is unknown; log out and sign in again.")
        }),
    }
}

pub async fn list(client: &Client, identity: &Identity, mode: ListScopeMode) -> Listing {
    let result = match scope_for(identity, mode) {
        Ok(scope) => client.list_sessions(identity, &scope).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(sessions) => {
            debug!("Fetched {} tutoring sessions", sessions.len());
            Listing {
                sessions,
                error: None,
            }
        }
        Err(e) => Listing::failed(&e),
    }
}
