//! # Document store — CRUD over the persisted collection
//!
//! [`DocumentStore`] is the core of inkpad's persistence layer. It owns the
//! document collection in the backing key-value store exclusively: the editor
//! shell creates and updates documents through this API and never writes the
//! collection key directly. All reads and writes go through the
//! [`KeyValueStore`] trait, so the same logic works against the browser's
//! `localStorage` (web builds) or an in-memory map (tests, native builds).
//!
//! ## Read path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`get_all`](DocumentStore::get_all) | The full collection; an absent or unparsable record reads as empty. |
//! | [`get_by_id`](DocumentStore::get_by_id) | Single lookup by id. |
//! | [`search`](DocumentStore::search) | Case-insensitive substring match over title, content, category, and tags. No ranking. |
//! | [`favorites`](DocumentStore::favorites) / [`by_category`](DocumentStore::by_category) | Simple filters. |
//! | [`stats`](DocumentStore::stats) | Aggregates recomputed on demand from `get_all`. |
//!
//! ## Write path
//!
//! Every write is a full read-modify-write of the whole collection: load,
//! mutate in memory, serialise, store. [`create`](DocumentStore::create)
//! fails with [`StoreError::Persistence`] when the backing write fails (the
//! stored collection is then unchanged, because the failed write never
//! replaced it). [`update`](DocumentStore::update) and
//! [`delete`](DocumentStore::delete) fail with [`StoreError::NotFound`] for
//! an absent id, leaving the collection untouched.
//!
//! ## Concurrency
//!
//! Sequential, single-writer. The backing store may be shared across browser
//! tabs; there is no locking, so two tabs writing concurrently race and the
//! last whole-collection write silently wins. This is an accepted limitation
//! of the storage model, not something callers can opt out of.

use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::models::{Document, DocumentDraft, DocumentPatch, StorageStats};
use crate::transfer::{self, ExportFile, ExportFormat};

/// Key-value-backed CRUD over the document collection.
pub struct DocumentStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> DocumentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Construct a document from `draft`, append it to the collection, and
    /// persist. Returns the freshly generated id.
    pub async fn create(&self, draft: DocumentDraft) -> Result<String, StoreError> {
        let mut documents = self.get_all().await;
        let document = Document::new(draft);
        let id = document.id.clone();
        documents.push(document);
        self.persist(&documents).await?;
        Ok(id)
    }

    /// Overwrite the fields `patch` supplies on the document with `id`,
    /// refresh `updatedAt`, bump `version`, and persist.
    pub async fn update(&self, id: &str, patch: DocumentPatch) -> Result<(), StoreError> {
        let mut documents = self.get_all().await;
        let document = documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        document.apply(patch);
        self.persist(&documents).await
    }

    /// Remove the document with `id` and persist the filtered collection.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut documents = self.get_all().await;
        let before = documents.len();
        documents.retain(|d| d.id != id);
        if documents.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.persist(&documents).await
    }

    /// The full collection. An absent key or a corrupted record reads as an
    /// empty collection.
    pub async fn get_all(&self) -> Vec<Document> {
        let raw = match self.store.get(keys::DOCUMENTS).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!("failed to read document collection: {err}");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!("document collection is corrupted, treating as empty: {err}");
            Vec::new()
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Document> {
        self.get_all().await.into_iter().find(|d| d.id == id)
    }

    /// Case-insensitive substring search over title, content, category, and
    /// tags. Returns all matches in collection order.
    pub async fn search(&self, query: &str) -> Vec<Document> {
        let needle = query.to_lowercase();
        self.get_all()
            .await
            .into_iter()
            .filter(|doc| {
                doc.title.to_lowercase().contains(&needle)
                    || doc.content.to_lowercase().contains(&needle)
                    || doc.category.to_lowercase().contains(&needle)
                    || doc.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub async fn favorites(&self) -> Vec<Document> {
        self.get_all()
            .await
            .into_iter()
            .filter(|d| d.is_favorite)
            .collect()
    }

    pub async fn by_category(&self, category: &str) -> Vec<Document> {
        self.get_all()
            .await
            .into_iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Aggregate view over the collection, recomputed from `get_all`.
    pub async fn stats(&self) -> StorageStats {
        let documents = self.get_all().await;
        let total_bytes = serde_json::to_string(&documents)
            .map(|raw| raw.len())
            .unwrap_or(0);
        let total_words: usize = documents.iter().map(|d| d.word_count).sum();
        let total_characters: usize = documents.iter().map(|d| d.character_count).sum();
        let avg_words_per_document = if documents.is_empty() {
            0
        } else {
            (total_words as f64 / documents.len() as f64).round() as usize
        };
        StorageStats {
            documents: documents.len(),
            total_bytes,
            total_words,
            total_characters,
            avg_words_per_document,
            last_updated: documents.iter().map(|d| d.updated_at).max(),
        }
    }

    /// Serialise the collection into `format`. The caller is responsible for
    /// the download side effect.
    pub async fn export(&self, format: ExportFormat) -> ExportFile {
        let documents = self.get_all().await;
        transfer::export(&documents, format)
    }

    /// Parse `payload` as a document archive and append everything it holds
    /// to the collection, returning how many documents were added.
    ///
    /// Imported documents keep their ids: there is no dedup and no collision
    /// check, so importing an archive twice duplicates its documents. This
    /// merge semantic is deliberate, but it does mean `get_by_id` on a
    /// duplicated id finds only the first occurrence.
    pub async fn import(&self, payload: &str) -> Result<usize, StoreError> {
        let imported = transfer::parse_archive(payload)?;
        let mut documents = self.get_all().await;
        let added = imported.len();
        documents.extend(imported);
        self.persist(&documents).await?;
        Ok(added)
    }

    async fn persist(&self, documents: &[Document]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(documents)
            .map_err(|err| StoreError::Persistence(err.to_string()))?;
        self.store.put(keys::DOCUMENTS, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::{DEFAULT_CATEGORY, DEFAULT_TITLE};

    fn draft(title: &str, content: &str) -> DocumentDraft {
        DocumentDraft {
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_get_by_id() {
        let docs = DocumentStore::new(MemoryStore::new());
        let id = docs.create(draft("Plan", "<p>hello world</p>")).await.unwrap();

        let doc = docs.get_by_id(&id).await.unwrap();
        assert_eq!(doc.title, "Plan");
        assert_eq!(doc.version, 1);
        assert_eq!(doc.created_at, doc.updated_at);
        assert_eq!(doc.word_count, 2);
        assert_eq!(doc.category, DEFAULT_CATEGORY);
    }

    #[tokio::test]
    async fn test_create_with_empty_title_uses_placeholder() {
        let docs = DocumentStore::new(MemoryStore::new());
        let id = docs.create(draft("  ", "x")).await.unwrap();
        assert_eq!(docs.get_by_id(&id).await.unwrap().title, DEFAULT_TITLE);
    }

    #[tokio::test]
    async fn test_update_overwrites_only_supplied_fields() {
        let docs = DocumentStore::new(MemoryStore::new());
        let id = docs.create(draft("Plan", "<p>one two</p>")).await.unwrap();

        docs.update(
            &id,
            DocumentPatch {
                title: Some("Plan v2".to_string()),
                is_favorite: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let doc = docs.get_by_id(&id).await.unwrap();
        assert_eq!(doc.title, "Plan v2");
        assert!(doc.is_favorite);
        assert_eq!(doc.content, "<p>one two</p>");
        assert_eq!(doc.word_count, 2);
        assert_eq!(doc.version, 2);
        assert!(doc.updated_at >= doc.created_at);
    }

    #[tokio::test]
    async fn test_repeated_updates_increase_version() {
        let docs = DocumentStore::new(MemoryStore::new());
        let id = docs.create(draft("a", "b")).await.unwrap();

        let mut last_updated = docs.get_by_id(&id).await.unwrap().updated_at;
        for expected in 2..=4 {
            docs.update(
                &id,
                DocumentPatch {
                    content: Some(format!("rev {expected}")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
            let doc = docs.get_by_id(&id).await.unwrap();
            assert_eq!(doc.version, expected);
            assert!(doc.updated_at >= last_updated);
            last_updated = doc.updated_at;
        }
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let docs = DocumentStore::new(MemoryStore::new());
        docs.create(draft("a", "b")).await.unwrap();

        let err = docs
            .update("nope", DocumentPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound("nope".to_string()));
        assert_eq!(docs.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_document() {
        let docs = DocumentStore::new(MemoryStore::new());
        let id = docs.create(draft("a", "b")).await.unwrap();

        docs.delete(&id).await.unwrap();
        assert!(docs.get_by_id(&id).await.is_none());

        let err = docs.delete(&id).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound(id));
        assert!(docs.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupted_collection_reads_as_empty() {
        let backing = MemoryStore::new();
        backing.put(keys::DOCUMENTS, "not json{{").await.unwrap();

        let docs = DocumentStore::new(backing);
        assert!(docs.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let docs = DocumentStore::new(MemoryStore::new());
        for title in ["A", "B", "C"] {
            docs.create(draft(title, "body")).await.unwrap();
        }

        let hits = docs.search("b").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "B");
    }

    #[tokio::test]
    async fn test_search_covers_content_category_and_tags() {
        let docs = DocumentStore::new(MemoryStore::new());
        docs.create(DocumentDraft {
            title: "x".to_string(),
            content: "<p>needle in body</p>".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
        docs.create(DocumentDraft {
            title: "y".to_string(),
            category: "Needlework".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
        docs.create(DocumentDraft {
            title: "z".to_string(),
            tags: vec!["needles".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();
        docs.create(draft("unrelated", "nothing here")).await.unwrap();

        assert_eq!(docs.search("NEEDLE").await.len(), 3);
    }

    #[tokio::test]
    async fn test_favorites_and_category_filters() {
        let docs = DocumentStore::new(MemoryStore::new());
        docs.create(DocumentDraft {
            title: "fav".to_string(),
            is_favorite: true,
            ..Default::default()
        })
        .await
        .unwrap();
        docs.create(DocumentDraft {
            title: "work".to_string(),
            category: "Work".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

        let favorites = docs.favorites().await;
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].title, "fav");

        let work = docs.by_category("Work").await;
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].title, "work");
        assert!(docs.by_category("Other").await.is_empty());
    }

    #[tokio::test]
    async fn test_stats_aggregates() {
        let docs = DocumentStore::new(MemoryStore::new());
        docs.create(draft("a", "one two three")).await.unwrap();
        docs.create(draft("b", "four five")).await.unwrap();

        let stats = docs.stats().await;
        assert_eq!(stats.documents, 2);
        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.avg_words_per_document, 3); // 2.5 rounds up
        assert!(stats.total_bytes > 0);
        assert!(stats.last_updated.is_some());

        let empty = DocumentStore::new(MemoryStore::new()).stats().await;
        assert_eq!(empty.documents, 0);
        assert_eq!(empty.avg_words_per_document, 0);
        assert!(empty.last_updated.is_none());
    }

    #[tokio::test]
    async fn test_create_on_full_store_fails_without_mutation() {
        let docs = DocumentStore::new(MemoryStore::with_quota(600));
        let id = docs.create(draft("small", "x")).await.unwrap();

        let err = docs
            .create(draft("big", &"y".repeat(512)))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Persistence(_)));

        let all = docs.get_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
    }

    #[tokio::test]
    async fn test_import_appends_without_dedup() {
        let docs = DocumentStore::new(MemoryStore::new());
        docs.create(draft("existing", "x")).await.unwrap();

        let archive = docs.export(ExportFormat::Json).await.body;
        assert_eq!(docs.import(&archive).await.unwrap(), 1);
        assert_eq!(docs.import(&archive).await.unwrap(), 1);

        // One original plus two imported copies with the same id.
        assert_eq!(docs.get_all().await.len(), 3);
    }

    #[tokio::test]
    async fn test_import_malformed_leaves_collection_unchanged() {
        let docs = DocumentStore::new(MemoryStore::new());
        docs.create(draft("keep", "x")).await.unwrap();

        let err = docs.import("{ definitely not an archive").await.unwrap_err();
        assert!(matches!(err, StoreError::ImportFormat(_)));
        assert_eq!(docs.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_export_import_roundtrip_into_empty_store() {
        let source = DocumentStore::new(MemoryStore::new());
        source
            .create(DocumentDraft {
                title: "First".to_string(),
                content: "<p>alpha</p>".to_string(),
                tags: vec!["t1".to_string()],
                category: "Work".to_string(),
                is_favorite: true,
            })
            .await
            .unwrap();
        source.create(draft("Second", "<p>beta</p>")).await.unwrap();

        let exported = source.export(ExportFormat::Json).await;
        assert_eq!(exported.filename, "documents.json");

        let target = DocumentStore::new(MemoryStore::new());
        assert_eq!(target.import(&exported.body).await.unwrap(), 2);
        assert_eq!(target.get_all().await, source.get_all().await);
    }

    #[tokio::test]
    async fn test_clear_all_removes_every_key() {
        let backing = MemoryStore::new();
        let docs = DocumentStore::new(backing.clone());
        docs.create(draft("a", "b")).await.unwrap();
        backing.put(keys::SETTINGS, "{}").await.unwrap();
        backing.put(keys::AUTOSAVE, "{}").await.unwrap();

        crate::clear_all(&backing).await.unwrap();
        assert!(docs.get_all().await.is_empty());
        assert_eq!(backing.get(keys::SETTINGS).await.unwrap(), None);
        assert_eq!(backing.get(keys::AUTOSAVE).await.unwrap(), None);
    }
}
