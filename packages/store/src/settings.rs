//! # Settings — single-record configuration with defaults merge
//!
//! One [`Settings`] record lives in the backing store. It is lazily created:
//! [`load`](SettingsStore::load) never fails and never writes. An absent
//! record, a missing field, or a parse error all resolve to defaults, with
//! stored values overriding defaults field by field. [`save`](SettingsStore::save)
//! merges a partial patch into the current settings and persists the merged
//! whole.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;

/// The editor's persisted configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Whether the auto-save timer runs at all.
    #[serde(default = "default_true")]
    pub auto_save: bool,
    /// Auto-save period in milliseconds. 0 disables the timer.
    #[serde(default = "default_auto_save_interval")]
    pub auto_save_interval: u64,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// CSS font size applied to the editing surface, e.g. `"14px"`.
    #[serde(default = "default_font_size")]
    pub font_size: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_true")]
    pub show_word_count: bool,
    #[serde(default = "default_true")]
    pub show_character_count: bool,
}

fn default_true() -> bool {
    true
}

fn default_auto_save_interval() -> u64 {
    30_000
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_font_size() -> String {
    "14px".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_save: true,
            auto_save_interval: default_auto_save_interval(),
            theme: default_theme(),
            font_size: default_font_size(),
            language: default_language(),
            show_word_count: true,
            show_character_count: true,
        }
    }
}

impl Settings {
    /// Overwrite the fields `patch` supplies.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(auto_save) = patch.auto_save {
            self.auto_save = auto_save;
        }
        if let Some(interval) = patch.auto_save_interval {
            self.auto_save_interval = interval;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(font_size) = patch.font_size {
            self.font_size = font_size;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(show) = patch.show_word_count {
            self.show_word_count = show;
        }
        if let Some(show) = patch.show_character_count {
            self.show_character_count = show;
        }
    }
}

/// Partial settings update. `None` fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsPatch {
    pub auto_save: Option<bool>,
    pub auto_save_interval: Option<u64>,
    pub theme: Option<String>,
    pub font_size: Option<String>,
    pub language: Option<String>,
    pub show_word_count: Option<bool>,
    pub show_character_count: Option<bool>,
}

/// Key-value-backed store for the single settings record.
pub struct SettingsStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored values merged over defaults. Never fails: a parse error falls
    /// back to the full defaults.
    pub async fn load(&self) -> Settings {
        match self.store.get(keys::SETTINGS).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!("settings record is corrupted, using defaults: {err}");
                Settings::default()
            }),
            _ => Settings::default(),
        }
    }

    /// Merge `patch` into the current settings, persist the merged whole,
    /// and return it.
    pub async fn save(&self, patch: SettingsPatch) -> Result<Settings, StoreError> {
        let mut settings = self.load().await;
        settings.apply(patch);
        let raw = serde_json::to_string(&settings)
            .map_err(|err| StoreError::Persistence(err.to_string()))?;
        self.store.put(keys::SETTINGS, &raw).await?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[tokio::test]
    async fn test_load_defaults_when_absent() {
        let settings = SettingsStore::new(MemoryStore::new());
        assert_eq!(settings.load().await, Settings::default());
    }

    #[tokio::test]
    async fn test_save_merges_partial_patch() {
        let settings = SettingsStore::new(MemoryStore::new());

        settings
            .save(SettingsPatch {
                font_size: Some("18px".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        settings
            .save(SettingsPatch {
                theme: Some("dark".to_string()),
                auto_save: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        let loaded = settings.load().await;
        assert_eq!(loaded.font_size, "18px");
        assert_eq!(loaded.theme, "dark");
        assert!(!loaded.auto_save);
        // Untouched fields keep their defaults.
        assert_eq!(loaded.auto_save_interval, 30_000);
        assert!(loaded.show_word_count);
    }

    #[tokio::test]
    async fn test_load_merges_stored_over_defaults() {
        let backing = MemoryStore::new();
        backing
            .put(keys::SETTINGS, r#"{"fontSize":"16px"}"#)
            .await
            .unwrap();

        let loaded = SettingsStore::new(backing).load().await;
        assert_eq!(loaded.font_size, "16px");
        assert_eq!(loaded.language, "en");
        assert!(loaded.auto_save);
    }

    #[tokio::test]
    async fn test_corrupted_record_falls_back_to_defaults() {
        let backing = MemoryStore::new();
        backing.put(keys::SETTINGS, "][").await.unwrap();

        assert_eq!(
            SettingsStore::new(backing).load().await,
            Settings::default()
        );
    }
}
