//! Platform session store constructor.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via `store::LocalStorage`
//! - **Native**: one file per key via [`store::FileStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// Create the platform session store using `key` for the persisted user.
///
/// On native targets the file lives under `<data_dir>/bloglist/`.
pub fn make_session_store(key: &str) -> store::SessionStore<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionStore::with_key(store::LocalStorage::new(), key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::SessionStore::with_key(store::FileStore::new(data_dir().join("bloglist")), key)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."))
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
fn data_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(".")
}
