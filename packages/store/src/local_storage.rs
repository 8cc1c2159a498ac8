//! # localStorage backend — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. It persists every record into `window.localStorage` via
//! `web-sys`, which is also what makes the data visible to other tabs of the
//! same origin.
//!
//! ## Key layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `inkpad.documents` | JSON array of documents |
//! | `inkpad.autosave` | JSON auto-save snapshot |
//! | `inkpad.autosave.backups` | JSON array of snapshots, oldest first |
//! | `inkpad.settings` | JSON settings record |
//!
//! ## Error handling
//!
//! Reads degrade to `None`, so a broken or unavailable storage layer reads
//! as "no local data" rather than taking the session down. Writes surface
//! [`StoreError::Persistence`]; exceeding the origin's storage quota is the
//! canonical failure.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
///
/// Zero-size and `Clone`-friendly: the browser owns the actual storage, so
/// every instance is a handle to the same data.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Persistence("no window object".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Persistence("localStorage is unavailable".to_string()))
    }
}

fn js_error(value: JsValue) -> StoreError {
    let reason = value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"));
    StoreError::Persistence(reason)
}

impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match Self::storage() {
            Ok(storage) => Ok(storage.get_item(key).unwrap_or(None)),
            Err(_) => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
