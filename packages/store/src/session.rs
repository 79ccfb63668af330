//! # Session persistence: the `SessionStore` trait
//!
//! After a successful login the client caches a [`UserSession`] so a page
//! reload does not send the user back to the login form. Persistence goes
//! through the [`SessionStore`] trait so the same UI works against browser
//! local storage ([`crate::LocalStorageSessionStore`], web only), a JSON file
//! ([`crate::FileSessionStore`], desktop) or plain memory
//! ([`crate::MemorySessionStore`], tests).
//!
//! Implementations never fail loudly. A broken or unreadable store behaves
//! like an empty one: the user simply has to log in again. Stored payloads
//! that do not decode are removed so the next load starts clean.

use crate::models::UserSession;

/// Storage key (web) and file stem (desktop) of the cached session.
pub const SESSION_KEY: &str = "user";

/// Synchronous key/value persistence for the logged-in user.
pub trait SessionStore {
    /// Read the cached session, if any.
    fn load(&self) -> Option<UserSession>;
    /// Replace the cached session.
    fn save(&self, session: &UserSession);
    /// Forget the cached session (logout).
    fn clear(&self);
}

/// Decode a stored payload, logging when it is unusable.
pub(crate) fn decode_session(raw: &str) -> Option<UserSession> {
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Discarding unreadable session: {}", e);
            None
        }
    }
}

pub(crate) fn encode_session(session: &UserSession) -> Option<String> {
    match serde_json::to_string(session) {
        Ok(raw) => Some(raw),
        Err(e) => {
            tracing::error!("Failed to encode session: {}", e);
            None
        }
    }
}
