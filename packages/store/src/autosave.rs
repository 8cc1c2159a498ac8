//! # Auto-save — current snapshot plus rotating backups
//!
//! [`AutoSaveStore`] keeps exactly one "current" snapshot of in-progress
//! editor content (overwritten on every tick) and a bounded, oldest-first
//! list of historical backups. The editor shell drives it from a timer and
//! opportunistically on blur and unmount; the store itself has no schedule.
//!
//! Auto-save must never interrupt editing, so [`autosave`](AutoSaveStore::autosave)
//! swallows storage failures and only logs them. Reads degrade the same way
//! the rest of the crate does: a corrupted snapshot or backup list is "no
//! data".

use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::models::AutoSaveSnapshot;

/// Backups retained by default; the oldest is evicted first once exceeded.
pub const DEFAULT_MAX_BACKUPS: usize = 10;

/// Periodic snapshot store with a bounded FIFO backup list.
pub struct AutoSaveStore<S: KeyValueStore> {
    store: S,
    max_backups: usize,
}

impl<S: KeyValueStore> AutoSaveStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_backups: DEFAULT_MAX_BACKUPS,
        }
    }

    /// Builder method to cap the backup list at `max` entries.
    pub fn with_max_backups(mut self, max: usize) -> Self {
        self.max_backups = max;
        self
    }

    /// Snapshot `content` now: overwrite the current snapshot, then append
    /// it to the backup list, evicting the oldest entries past the cap.
    /// Failures are logged and swallowed.
    pub async fn autosave(&self, content: &str) {
        let snapshot = AutoSaveSnapshot::capture(content);
        if let Err(err) = self.write_current(&snapshot).await {
            tracing::warn!("auto-save failed: {err}");
            return;
        }
        if let Err(err) = self.push_backup(snapshot).await {
            tracing::warn!("auto-save backup failed: {err}");
        }
    }

    /// The most recent snapshot, if one was ever written this session or a
    /// previous one.
    pub async fn last_snapshot(&self) -> Option<AutoSaveSnapshot> {
        let raw = self.store.get(keys::AUTOSAVE).await.ok()??;
        serde_json::from_str(&raw).ok()
    }

    /// All retained backups, oldest first.
    pub async fn backups(&self) -> Vec<AutoSaveSnapshot> {
        match self.store.get(keys::AUTOSAVE_BACKUPS).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// The backup at `index` (0 = oldest). Out of range is `None`, not an
    /// error.
    pub async fn restore_backup(&self, index: usize) -> Option<AutoSaveSnapshot> {
        self.backups().await.into_iter().nth(index)
    }

    async fn write_current(&self, snapshot: &AutoSaveSnapshot) -> Result<(), StoreError> {
        let raw = serde_json::to_string(snapshot)
            .map_err(|err| StoreError::Persistence(err.to_string()))?;
        self.store.put(keys::AUTOSAVE, &raw).await
    }

    async fn push_backup(&self, snapshot: AutoSaveSnapshot) -> Result<(), StoreError> {
        let mut backups = self.backups().await;
        backups.push(snapshot);
        if backups.len() > self.max_backups {
            let excess = backups.len() - self.max_backups;
            backups.drain(..excess);
        }
        let raw = serde_json::to_string(&backups)
            .map_err(|err| StoreError::Persistence(err.to_string()))?;
        self.store.put(keys::AUTOSAVE_BACKUPS, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[tokio::test]
    async fn test_autosave_overwrites_current_snapshot() {
        let autosave = AutoSaveStore::new(MemoryStore::new());
        assert!(autosave.last_snapshot().await.is_none());

        autosave.autosave("<p>first draft</p>").await;
        autosave.autosave("<p>second draft here</p>").await;

        let snapshot = autosave.last_snapshot().await.unwrap();
        assert_eq!(snapshot.content, "<p>second draft here</p>");
        assert_eq!(snapshot.word_count, 3);
    }

    #[tokio::test]
    async fn test_backups_evict_oldest_first() {
        let autosave = AutoSaveStore::new(MemoryStore::new()).with_max_backups(2);

        autosave.autosave("one").await;
        autosave.autosave("two").await;
        autosave.autosave("three").await;

        let backups = autosave.backups().await;
        assert_eq!(backups.len(), 2);
        assert_eq!(backups[0].content, "two");
        assert_eq!(backups[1].content, "three");
        assert!(backups[0].timestamp <= backups[1].timestamp);
    }

    #[tokio::test]
    async fn test_backup_list_never_exceeds_default_cap() {
        let autosave = AutoSaveStore::new(MemoryStore::new());
        for n in 0..(DEFAULT_MAX_BACKUPS + 3) {
            autosave.autosave(&format!("draft {n}")).await;
        }

        let backups = autosave.backups().await;
        assert_eq!(backups.len(), DEFAULT_MAX_BACKUPS);
        assert_eq!(backups[0].content, "draft 3");
    }

    #[tokio::test]
    async fn test_restore_backup_out_of_range_is_none() {
        let autosave = AutoSaveStore::new(MemoryStore::new());
        autosave.autosave("only").await;

        assert_eq!(
            autosave.restore_backup(0).await.unwrap().content,
            "only"
        );
        assert!(autosave.restore_backup(1).await.is_none());
    }

    #[tokio::test]
    async fn test_autosave_swallows_storage_errors() {
        // Quota of zero rejects every write; autosave must not propagate.
        let autosave = AutoSaveStore::new(MemoryStore::with_quota(0));
        autosave.autosave("content").await;

        assert!(autosave.last_snapshot().await.is_none());
        assert!(autosave.backups().await.is_empty());
    }
}
