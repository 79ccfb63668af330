//! Shared session-store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] appropriate for the platform:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageSessionStore`]
//! - **Desktop** (native): a JSON file via [`store::FileSessionStore`]
//! - **WASM without `web`**: in-memory via [`store::MemorySessionStore`]

/// Create the platform-appropriate session store.
pub fn make_session_store() -> impl store::SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageSessionStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemorySessionStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileSessionStore::new(store::FileSessionStore::default_dir())
    }
}
