pub mod error;
pub mod models;
pub mod transfer;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

mod documents;
pub use documents::DocumentStore;

mod autosave;
pub use autosave::{AutoSaveStore, DEFAULT_MAX_BACKUPS};

mod settings;
pub use settings::{Settings, SettingsPatch, SettingsStore};

pub use error::StoreError;
pub use models::{AutoSaveSnapshot, Document, DocumentDraft, DocumentPatch, StorageStats};
pub use transfer::{DocumentArchive, ExportFile, ExportFormat};

/// Keys the stores occupy in the backing key-value store.
pub mod keys {
    pub const DOCUMENTS: &str = "inkpad.documents";
    pub const AUTOSAVE: &str = "inkpad.autosave";
    pub const AUTOSAVE_BACKUPS: &str = "inkpad.autosave.backups";
    pub const SETTINGS: &str = "inkpad.settings";
}

/// Remove every key inkpad owns from the backing store: the document
/// collection, the current auto-save snapshot, the backup list, and the
/// settings record.
pub async fn clear_all<S: KeyValueStore>(store: &S) -> Result<(), StoreError> {
    store.remove(keys::DOCUMENTS).await?;
    store.remove(keys::AUTOSAVE).await?;
    store.remove(keys::AUTOSAVE_BACKUPS).await?;
    store.remove(keys::SETTINGS).await
}
