use std::sync::{Arc, Mutex};

use crate::models::UserSession;
use crate::session::{decode_session, encode_session, SessionStore};

/// In-memory SessionStore for testing and as a last-resort fallback.
///
/// Holds the encoded payload rather than the struct so it exercises the same
/// decode path as the persistent stores.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw payload, as if written by another tab.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: Arc::new(Mutex::new(Some(raw.to_string()))),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.raw.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<UserSession> {
        let mut slot = self.slot();
        let raw = slot.as_deref()?;
        let session = decode_session(raw);
        if session.is_none() {
            *slot = None;
        }
        session
    }

    fn save(&self, session: &UserSession) {
        if let Some(raw) = encode_session(session) {
            *self.slot() = Some(raw);
        }
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> UserSession {
        UserSession {
            user_id: 1,
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());

        store.save(&ada());
        assert_eq!(store.load(), Some(ada()));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        store.save(&ada());
        assert_eq!(other.load(), Some(ada()));
    }

    #[test]
    fn test_corrupt_payload_is_dropped() {
        let store = MemorySessionStore::with_raw("{not json");
        assert!(store.load().is_none());
        // Dropped on first read
        assert!(store.slot().is_none());
    }

    #[test]
    fn test_reads_payload_written_by_browser_client() {
        let store = MemorySessionStore::with_raw(
            r#"{"userId":5,"fullName":"Grace","email":"grace@example.com"}"#,
        );
        let session = store.load().unwrap();
        assert_eq!(session.user_id, 5);
        assert_eq!(session.full_name, "Grace");
    }
}
