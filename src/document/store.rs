//! In-memory document text store
//!
//! Process-wide map from document identifier to extracted text. Entries live
//! until the process exits; nothing is evicted or persisted.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Thread-safe document text store
#[derive(Clone, Default)]
pub struct DocumentStore {
    texts: Arc<RwLock<HashMap<String, Arc<str>>>>,
}

impl DocumentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert text under `id`, returning the text it replaced, if any.
    ///
    /// Replacing different text means two documents share an identifier;
    /// the newer text wins.
    pub async fn insert(&self, id: String, text: String) -> Option<Arc<str>> {
        let text: Arc<str> = Arc::from(text);
        let previous = self.texts.write().await.insert(id.clone(), text.clone());

        if let Some(old) = &previous {
            if **old != *text {
                tracing::warn!(
                    pdf_id = %id,
                    "Document identifier collision, replacing previously stored text"
                );
            }
        }

        previous
    }

    /// Get the text stored under `id`
    pub async fn get(&self, id: &str) -> Option<Arc<str>> {
        self.texts.read().await.get(id).cloned()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.texts.read().await.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.texts.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_creation() {
        let store = DocumentStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = DocumentStore::new();
        let replaced = store.insert("abc".into(), "hello".into()).await;

        assert!(replaced.is_none());
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("abc").await.as_deref(), Some("hello"));
        assert!(store.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_colliding_id_overwrites() {
        let store = DocumentStore::new();
        store.insert("collide123".into(), "first document".into()).await;
        let replaced = store
            .insert("collide123".into(), "second document".into())
            .await;

        assert_eq!(replaced.as_deref(), Some("first document"));
        assert_eq!(store.get("collide123").await.as_deref(), Some("second document"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = DocumentStore::new();
        let handle = store.clone();
        handle.insert("shared".into(), "text".into()).await;

        assert_eq!(store.get("shared").await.as_deref(), Some("text"));
    }
}
