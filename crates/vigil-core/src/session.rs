//! The authenticated session model.
//!
//! A session is the credential/identity pair that gates all server access.
//! It is restored from durable storage once at startup, set by a successful
//! login exchange, and cleared by logout - never partially updated.

use serde::{Deserialize, Serialize};

/// The in-memory session state.
///
/// # Invariant
///
/// `credential` and `identity` are both present or both absent, never one
/// without the other. All mutation goes through [`Session::authenticate`]
/// and [`Session::clear`] to keep that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token, attached as `Authorization: Bearer <token>`.
    pub credential: Option<String>,
    /// User-identifying string (the login email).
    pub identity: Option<String>,
    /// True exactly once the persisted pair has been loaded (or confirmed
    /// absent) at startup.
    pub initialized: bool,
}

impl Session {
    /// Creates a fresh, uninitialized session.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when both credential and identity are held.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some() && self.identity.is_some()
    }

    /// True when the session has been restored and holds a credential.
    ///
    /// This is the gate every poller checks before touching the network.
    pub fn is_ready(&self) -> bool {
        self.initialized && self.credential.is_some()
    }

    /// Stores the credential/identity pair as one unit.
    pub fn authenticate(&mut self, credential: impl Into<String>, identity: impl Into<String>) {
        self.credential = Some(credential.into());
        self.identity = Some(identity.into());
    }

    /// Drops the credential/identity pair as one unit.
    pub fn clear(&mut self) {
        self.credential = None;
        self.identity = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_not_ready() {
        let session = Session::new();
        assert!(!session.initialized);
        assert!(!session.is_authenticated());
        assert!(!session.is_ready());
    }

    #[test]
    fn test_authenticate_sets_both() {
        let mut session = Session::new();
        session.authenticate("tok-123", "analyst@example.com");
        assert!(session.is_authenticated());
        // Still not ready until restore has marked it initialized.
        assert!(!session.is_ready());

        session.initialized = true;
        assert!(session.is_ready());
    }

    #[test]
    fn test_clear_drops_both() {
        let mut session = Session::new();
        session.authenticate("tok-123", "analyst@example.com");
        session.clear();
        assert!(session.credential.is_none());
        assert!(session.identity.is_none());
        assert!(!session.is_authenticated());
    }
}
