//! Platform-appropriate store constructors.
//!
//! Returns the store services backed by the right [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via
//!   [`store::LocalStorageStore`]
//! - **Native** (check builds, tests): one process-wide
//!   [`store::MemoryStore`], so every view shares the same session state
//!
//! The services are plain objects over a shared backend, so constructing
//! one per call site is free. Every persistence operation in the UI goes
//! through these constructors; there is no fallback storage path.

use store::{AutoSaveStore, DocumentStore, SettingsStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformKv = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformKv = store::MemoryStore;

fn backing() -> PlatformKv {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static BACKING: OnceLock<store::MemoryStore> = OnceLock::new();
        BACKING.get_or_init(store::MemoryStore::new).clone()
    }
}

pub fn make_documents() -> DocumentStore<PlatformKv> {
    DocumentStore::new(backing())
}

pub fn make_autosave() -> AutoSaveStore<PlatformKv> {
    AutoSaveStore::new(backing())
}

pub fn make_settings() -> SettingsStore<PlatformKv> {
    SettingsStore::new(backing())
}

/// Wipe everything inkpad has persisted.
pub async fn clear_all() -> Result<(), store::StoreError> {
    store::clear_all(&backing()).await
}
