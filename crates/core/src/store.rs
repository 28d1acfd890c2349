//! Session persistence across the ephemeral and persistent backends

use crate::config::AuthConfig;
use crate::error::SessionError;
use crate::session::{Durability, UserSession};
use crate::storage::StorageBackend;
use std::rc::Rc;
use tracing::{debug, error, warn};

/// Reads, writes and clears the current [`UserSession`].
///
/// The ephemeral backend takes precedence when both hold a record. A write
/// lands in exactly one backend and clearing always empties both.
#[derive(Clone)]
pub struct SessionStore {
    ephemeral: Rc<dyn StorageBackend>,
    persistent: Rc<dyn StorageBackend>,
    key: String,
}

impl SessionStore {
    /// Create a store over the two backends using [`AuthConfig::SESSION_KEY`]
    pub fn new(ephemeral: Rc<dyn StorageBackend>, persistent: Rc<dyn StorageBackend>) -> Self {
        Self {
            ephemeral,
            persistent,
            key: AuthConfig::SESSION_KEY.to_string(),
        }
    }

    /// Use a different storage key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Storage key in use
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the current session.
    ///
    /// Never fails: an undecodable record is logged, removed from both
    /// backends and reported as absent.
    pub fn read(&self) -> Option<UserSession> {
        match self.try_read() {
            Ok(session) => session,
            Err(SessionError::MalformedSessionRecord(err)) => {
                warn!(key = %self.key, error = %err, "Discarding malformed session record");
                self.clear();
                None
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "Session storage unavailable, treating as logged out");
                None
            }
        }
    }

    /// Like [`read`](Self::read) but reports failures instead of absorbing them
    pub fn try_read(&self) -> Result<Option<UserSession>, SessionError> {
        let raw = match self.ephemeral.get(&self.key)? {
            Some(raw) => Some(raw),
            None => self.persistent.get(&self.key)?,
        };

        raw.map(|raw| serde_json::from_str(&raw).map_err(SessionError::MalformedSessionRecord))
            .transpose()
    }

    /// Store `session` in the backend selected by `durability`, emptying the other one first
    pub fn write(&self, session: &UserSession, durability: Durability) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(session).map_err(SessionError::Encode)?;
        let (target, other) = match durability {
            Durability::Ephemeral => (&self.ephemeral, &self.persistent),
            Durability::Persistent => (&self.persistent, &self.ephemeral),
        };

        other.remove(&self.key)?;
        target.set(&self.key, &encoded)?;

        debug!(username = %session.username, ?durability, "Stored session");
        Ok(())
    }

    /// Remove the session from both backends. Idempotent.
    pub fn clear(&self) {
        for backend in [&self.ephemeral, &self.persistent] {
            if let Err(err) = backend.remove(&self.key) {
                error!(error = %err, "Failed to clear session record");
            }
        }
        debug!("Cleared session");
    }

    /// Bearer token of the current session, if it has a non-empty one
    pub fn token(&self) -> Option<String> {
        self.read()
            .filter(UserSession::has_token)
            .map(|session| session.token)
    }
}
