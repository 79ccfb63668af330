//! # Browser local storage session store
//!
//! [`LocalStorageSessionStore`] is the [`SessionStore`] used on the **web
//! platform**. The session lives in `window.localStorage` under the key
//! [`SESSION_KEY`] as a JSON object, the same shape the services use
//! (`{"userId":…,"fullName":…,"email":…}`).
//!
//! ## Error handling
//!
//! Local storage can be missing (privacy modes, sandboxed iframes) or full.
//! Every failure is logged and otherwise ignored, so the UI degrades to
//! "logged out" instead of crashing.

use web_sys::Storage;

use crate::models::UserSession;
use crate::session::{decode_session, encode_session, SessionStore, SESSION_KEY};

/// `window.localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageSessionStore;

impl LocalStorageSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("Local storage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Option<UserSession> {
        let storage = Self::storage()?;
        let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
        let session = decode_session(&raw);
        if session.is_none() {
            if let Err(e) = storage.remove_item(SESSION_KEY) {
                tracing::warn!("Failed to remove corrupt session: {:?}", e);
            }
        }
        session
    }

    fn save(&self, session: &UserSession) {
        let (Some(storage), Some(raw)) = (Self::storage(), encode_session(session)) else {
            return;
        };
        if let Err(e) = storage.set_item(SESSION_KEY, &raw) {
            tracing::error!("Failed to store session: {:?}", e);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(SESSION_KEY) {
                tracing::warn!("Failed to remove session: {:?}", e);
            }
        }
    }
}
