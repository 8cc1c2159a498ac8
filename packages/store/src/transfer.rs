//! # Import/export — the document archive formats
//!
//! Two export formats over the same collection:
//!
//! - **Structured (lossless)**: a [`DocumentArchive`] serialised as pretty
//!   JSON, `{version, exportDate, documents}`. This is also the only format
//!   [`parse_archive`] accepts back.
//! - **Tabular (lossy)**: CSV with fixed columns
//!   `[title, content preview, word count, created date, category, tags]`.
//!   The content column is a tag-stripped preview capped at
//!   [`CSV_PREVIEW_CHARS`] characters; the full content does not survive.
//!
//! Serialisation here is pure string building; the file-download side effect
//! belongs to the UI layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::{strip_tags, Document};

/// Version tag written into structured exports.
pub const ARCHIVE_VERSION: &str = "1.0";
/// Characters of tag-stripped content kept in the CSV preview column.
pub const CSV_PREVIEW_CHARS: usize = 100;

/// The structured export envelope.
///
/// Parsing is lenient everywhere except the documents themselves: a missing
/// `version` or `exportDate` is fine, and a missing `documents` field is an
/// empty archive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentArchive {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Export formats the store can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Structured, lossless, re-importable.
    Json,
    /// Flat table for spreadsheets; content is truncated to a preview.
    Csv,
}

/// A rendered export, ready to hand to a download helper.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportFile {
    pub filename: &'static str,
    pub mime: &'static str,
    pub body: String,
}

/// Serialise `documents` into `format`.
pub fn export(documents: &[Document], format: ExportFormat) -> ExportFile {
    match format {
        ExportFormat::Json => ExportFile {
            filename: "documents.json",
            mime: "application/json",
            body: to_json(documents),
        },
        ExportFormat::Csv => ExportFile {
            filename: "documents.csv",
            mime: "text/csv",
            body: to_csv(documents),
        },
    }
}

/// Parse a structured archive, returning the documents it holds.
pub fn parse_archive(payload: &str) -> Result<Vec<Document>, StoreError> {
    let archive: DocumentArchive = serde_json::from_str(payload)
        .map_err(|err| StoreError::ImportFormat(err.to_string()))?;
    Ok(archive.documents)
}

fn to_json(documents: &[Document]) -> String {
    let archive = DocumentArchive {
        version: ARCHIVE_VERSION.to_string(),
        export_date: Some(Utc::now()),
        documents: documents.to_vec(),
    };
    serde_json::to_string_pretty(&archive).unwrap_or_else(|err| {
        tracing::warn!("archive serialisation failed: {err}");
        String::new()
    })
}

fn to_csv(documents: &[Document]) -> String {
    let mut rows = Vec::with_capacity(documents.len() + 1);
    rows.push(csv_row(&[
        "Title", "Content", "Words", "Created", "Category", "Tags",
    ]));
    for doc in documents {
        rows.push(csv_row(&[
            &doc.title,
            &content_preview(&doc.content),
            &doc.word_count.to_string(),
            &doc.created_at.format("%Y-%m-%d").to_string(),
            &doc.category,
            &doc.tags.join(", "),
        ]));
    }
    rows.join("\n")
}

fn csv_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

fn content_preview(content: &str) -> String {
    let text = strip_tags(content)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if text.chars().count() <= CSV_PREVIEW_CHARS {
        return text;
    }
    let mut preview: String = text.chars().take(CSV_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentDraft;

    fn doc(title: &str, content: &str) -> Document {
        Document::new(DocumentDraft {
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_archive_roundtrip() {
        let documents = vec![doc("a", "<p>alpha</p>"), doc("b", "<p>beta</p>")];
        let exported = export(&documents, ExportFormat::Json);
        assert_eq!(exported.mime, "application/json");

        let parsed = parse_archive(&exported.body).unwrap();
        assert_eq!(parsed, documents);
    }

    #[test]
    fn test_parse_rejects_malformed_payload() {
        let err = parse_archive("not json at all").unwrap_err();
        assert!(matches!(err, StoreError::ImportFormat(_)));

        // Documents that are not documents also fail.
        let err = parse_archive(r#"{"documents": [42]}"#).unwrap_err();
        assert!(matches!(err, StoreError::ImportFormat(_)));
    }

    #[test]
    fn test_parse_tolerates_missing_envelope_fields() {
        assert!(parse_archive("{}").unwrap().is_empty());
        assert!(parse_archive(r#"{"documents": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_csv_shape_and_quoting() {
        let mut d = doc("Says \"hi\"", "<p>body text</p>");
        d.tags = vec!["one".to_string(), "two".to_string()];

        let exported = export(&[d], ExportFormat::Csv);
        let lines: Vec<&str> = exported.body.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "\"Title\",\"Content\",\"Words\",\"Created\",\"Category\",\"Tags\""
        );
        assert!(lines[1].starts_with("\"Says \"\"hi\"\"\",\"body text\","));
        assert!(lines[1].contains("\"one, two\""));
    }

    #[test]
    fn test_csv_content_preview_is_truncated() {
        let long = format!("<p>{}</p>", "word ".repeat(60));
        let exported = export(&[doc("t", &long)], ExportFormat::Csv);
        let row = exported.body.lines().nth(1).unwrap();

        let preview = row.split("\",\"").nth(1).unwrap();
        assert_eq!(preview.chars().count(), CSV_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }
}
