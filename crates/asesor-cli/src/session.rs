use crate::models::Identity;

use log::info;

/// Interaction context handed to every shell handler.
///
/// Starts anonymous, holds the identity between a successful login and the
/// next logout, and disappears with the process.
#[derive(Debug, Default)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, identity: Identity) {
        info!("Signed in as {}", identity.username);
        self.identity = Some(identity);
    }

    /// Clear the identity, returning it if there was one
    pub fn sign_out(&mut self) -> Option<Identity> {
        let identity = self.identity.take();
        if let Some(ref identity) = identity {
            info!("Signed out {}", identity.username);
        }
        identity
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
