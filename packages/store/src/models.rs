//! # Domain models
//!
//! The records inkpad persists and the inputs its stores accept. Everything
//! here is `Serialize + Deserialize`; field names serialise in camelCase so
//! the persisted records and the export archive share one wire form.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Document`] | A persisted unit of user-authored content plus metadata. |
//! | [`DocumentDraft`] | Caller-supplied fields for `create`; anything missing falls back to a default. |
//! | [`DocumentPatch`] | Partial update for `update`; `None` fields are left untouched. |
//! | [`AutoSaveSnapshot`] | A timestamped capture of in-progress editor content. |
//! | [`StorageStats`] | Aggregate view over the whole collection, recomputed on demand. |
//!
//! Word and character counts are derived here ([`count_words`],
//! [`count_characters`]): words are counted on tag-stripped text, characters
//! on the raw HTML fragment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to documents created with an empty title.
pub const DEFAULT_TITLE: &str = "Untitled document";
/// Category given to documents created with an empty category.
pub const DEFAULT_CATEGORY: &str = "General";

/// A persisted document.
///
/// `id` is unique across the collection and immutable, as is `createdAt`.
/// `version` starts at 1 and increments on every update, so it is
/// monotonically non-decreasing, and `updatedAt >= createdAt` always holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub character_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_version() -> u32 {
    1
}

impl Document {
    /// Construct a new document from a draft: fresh id, both timestamps set
    /// to now, version 1, counts derived from the content.
    pub fn new(draft: DocumentDraft) -> Self {
        let now = Utc::now();
        let title = if draft.title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            draft.title
        };
        let category = if draft.category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            draft.category
        };
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            word_count: count_words(&draft.content),
            character_count: count_characters(&draft.content),
            content: draft.content,
            created_at: now,
            updated_at: now,
            tags: draft.tags,
            category,
            is_favorite: draft.is_favorite,
            version: 1,
        }
    }

    /// Overwrite the fields a patch supplies, refresh `updated_at`, bump
    /// `version`. Counts are recomputed when the content changes.
    pub fn apply(&mut self, patch: DocumentPatch) {
        if let Some(title) = patch.title {
            self.title = if title.trim().is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title
            };
        }
        if let Some(content) = patch.content {
            self.word_count = count_words(&content);
            self.character_count = count_characters(&content);
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(is_favorite) = patch.is_favorite {
            self.is_favorite = is_favorite;
        }
        self.updated_at = Utc::now();
        self.version += 1;
    }
}

/// Fields a caller supplies when creating a document. Everything defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Partial update. `None` fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub is_favorite: Option<bool>,
}

/// A timestamped capture of in-progress editor content, kept for recovery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoSaveSnapshot {
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub word_count: usize,
    pub character_count: usize,
}

impl AutoSaveSnapshot {
    /// Capture `content` as of now, deriving the counts.
    pub fn capture(content: &str) -> Self {
        Self {
            word_count: count_words(content),
            character_count: count_characters(content),
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Aggregate view over the document collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    pub documents: usize,
    pub total_bytes: usize,
    pub total_words: usize,
    pub total_characters: usize,
    pub avg_words_per_document: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Drop HTML tags from a fragment, replacing each tag with a space so that
/// adjacent block elements do not fuse words together.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Number of whitespace-separated words in the tag-stripped text.
pub fn count_words(html: &str) -> usize {
    strip_tags(html).split_whitespace().count()
}

/// Number of characters in the raw fragment, tags included.
pub fn count_characters(html: &str) -> usize {
    html.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_strips_tags() {
        assert_eq!(count_words("<p>hello world</p>"), 2);
        assert_eq!(count_words("<p>one</p><p>two</p>"), 2);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("<br><hr>"), 0);
    }

    #[test]
    fn test_count_characters_keeps_tags() {
        assert_eq!(count_characters("<b>hi</b>"), 9);
    }

    #[test]
    fn test_new_document_applies_defaults() {
        let doc = Document::new(DocumentDraft {
            content: "<p>hi</p>".to_string(),
            ..Default::default()
        });
        assert_eq!(doc.title, DEFAULT_TITLE);
        assert_eq!(doc.category, DEFAULT_CATEGORY);
        assert_eq!(doc.version, 1);
        assert!(!doc.is_favorite);
        assert_eq!(doc.created_at, doc.updated_at);
        assert_eq!(doc.word_count, 1);
    }

    #[test]
    fn test_apply_recomputes_counts_only_for_content() {
        let mut doc = Document::new(DocumentDraft {
            title: "a".to_string(),
            content: "<p>one two</p>".to_string(),
            ..Default::default()
        });
        doc.apply(DocumentPatch {
            title: Some("b".to_string()),
            ..Default::default()
        });
        assert_eq!(doc.word_count, 2);
        assert_eq!(doc.version, 2);

        doc.apply(DocumentPatch {
            content: Some("<p>one two three</p>".to_string()),
            ..Default::default()
        });
        assert_eq!(doc.word_count, 3);
        assert_eq!(doc.version, 3);
    }
}
