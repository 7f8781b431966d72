//! Credential gate: turns a username/password pair into an [`Identity`].

use crate::{CliClientResult, Client, ClientError, models::Identity};

use log::warn;

/// Verify credentials against the backend token endpoint.
///
/// The password only ever travels to the backend; nothing is compared
/// locally. When `resolve_user_id` is set the numeric user id is looked up
/// once with the fresh token. A failed lookup leaves it unset and the
/// identity remains valid.
pub async fn authenticate(
    client: &Client,
    username: &str,
    password: &str,
    resolve_user_id: bool,
) -> CliClientResult<Identity> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ClientError::auth("Username and password are required."));
    }

    let token = client.login(username, password).await?;
    let identity = Identity::new(username, Some(token.access_token));

    if !resolve_user_id {
        return Ok(identity);
    }

    match client.get_user(&identity, username).await {
        Ok(profile) => Ok(identity.with_user_id(profile.id)),
        Err(e) => {
            warn!("Could not resolve user id for {username}: {e}");
            Ok(identity)
        }
    }
}
