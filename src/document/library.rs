//! Document ingestion
//!
//! Ties extraction, identifier derivation and storage together: uploaded
//! bytes go to a scoped temporary file, the extractor reads it back as text,
//! and the text is stored under its fingerprint.

use std::path::Path;
use std::sync::Arc;

use super::error::ExtractResult;
use super::extractor::TextExtractor;
use super::fingerprint::document_id;
use super::store::DocumentStore;

/// A document accepted into the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedDocument {
    pub id: String,
    pub chars: usize,
    /// True when the identifier was already present (same or colliding text)
    pub replaced: bool,
}

/// Extractor plus store
#[derive(Clone)]
pub struct DocumentLibrary {
    extractor: Arc<dyn TextExtractor>,
    store: DocumentStore,
}

impl DocumentLibrary {
    pub fn new(extractor: Arc<dyn TextExtractor>, store: DocumentStore) -> Self {
        Self { extractor, store }
    }

    /// Get the underlying store
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Ingest uploaded PDF bytes.
    ///
    /// The temporary file is removed when this returns, whether extraction
    /// succeeded or not.
    pub async fn ingest_bytes(&self, data: &[u8]) -> ExtractResult<IngestedDocument> {
        let tmp = tempfile::Builder::new()
            .prefix("pdfqa-upload-")
            .suffix(".pdf")
            .tempfile()?;

        tokio::fs::write(tmp.path(), data).await?;
        tracing::debug!(path = %tmp.path().display(), bytes = data.len(), "Wrote upload to temp file");

        self.ingest_path(tmp.path()).await
    }

    /// Ingest a PDF already on disk
    pub async fn ingest_path(&self, path: &Path) -> ExtractResult<IngestedDocument> {
        let text = self.extractor.extract(path).await?;
        let id = document_id(&text);
        let chars = text.chars().count();

        let replaced = self.store.insert(id.clone(), text).await.is_some();

        Ok(IngestedDocument {
            id,
            chars,
            replaced,
        })
    }

    /// Text previously stored under `id`
    pub async fn text(&self, id: &str) -> Option<Arc<str>> {
        self.store.get(id).await
    }
}
