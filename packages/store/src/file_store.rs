//! # Filesystem-backed session store
//!
//! [`FileSessionStore`] is a [`SessionStore`] implementation that persists the
//! logged-in user as a small JSON file. It is used on desktop so the session
//! survives an app restart, the way local storage does in the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── user.json          # {"userId":…,"fullName":…,"email":…}
//! ```
//!
//! ## Platform data directories
//!
//! Use [`FileSessionStore::default_dir`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/weight-tracker/` |
//! | Linux | `~/.local/share/weight-tracker/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\weight-tracker\` |

use std::io;
use std::path::{Path, PathBuf};

use crate::models::UserSession;
use crate::session::{decode_session, encode_session, SessionStore, SESSION_KEY};

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    base: PathBuf,
}

impl FileSessionStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// `<data_dir>/weight-tracker`, or the working directory when the
    /// platform has no data dir.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("weight-tracker")
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(format!("{SESSION_KEY}.json"))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<UserSession> {
        let path = self.session_path();
        let raw = std::fs::read_to_string(&path).ok()?;
        let session = decode_session(&raw);
        if session.is_none() {
            if let Err(e) = remove_if_present(&path) {
                tracing::warn!("Failed to remove corrupt {}: {}", path.display(), e);
            }
        }
        session
    }

    fn save(&self, session: &UserSession) {
        let Some(raw) = encode_session(session) else {
            return;
        };
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::error!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.session_path(), raw) {
            tracing::error!("Failed to write session: {}", e);
        }
    }

    fn clear(&self) {
        let path = self.session_path();
        if let Err(e) = remove_if_present(&path) {
            tracing::warn!("Failed to remove {}: {}", path.display(), e);
        }
    }
}

/// Delete `path`; a file that is already gone is not an error.
fn remove_if_present(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grace() -> UserSession {
        UserSession {
            user_id: 9,
            full_name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
        }
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileSessionStore::new(dir.path().join("nested"));
        assert!(store.load().is_none());
        store.save(&grace());

        // Re-open from same directory
        let reopened = FileSessionStore::new(dir.path().join("nested"));
        assert_eq!(reopened.load(), Some(grace()));

        reopened.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_corrupt_file_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.json");
        std::fs::write(&path, "garbage").unwrap();

        let store = FileSessionStore::new(dir.path().to_path_buf());
        assert!(store.load().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_clear_without_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().to_path_buf());
        assert!(remove_if_present(&store.session_path()).is_ok());
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_failed_removal_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the session file should be cannot be removed as a file
        let store = FileSessionStore::new(dir.path().to_path_buf());
        std::fs::create_dir(store.session_path()).unwrap();

        assert!(remove_if_present(&store.session_path()).is_err());
        store.clear();
        assert!(store.session_path().exists());
    }
}
