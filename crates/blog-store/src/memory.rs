//! In-memory post collection.
//!
//! Same contract as the PostgreSQL store, kept in a `Vec` behind a tokio
//! `RwLock`. Used for tests and for running the server without a database.

use async_trait::async_trait;
use blog_core::{Post, PostDocument, Window};
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::repository::{PostStore, normalize_window};

/// Post collection held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RwLock<Vec<PostDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn find_all(&self, window: Option<Window>) -> StoreResult<Vec<PostDocument>> {
        let window = normalize_window(window.unwrap_or(Window::UNBOUNDED))?;

        let docs = self.docs.read().await;
        let skip = usize::try_from(window.skip).unwrap_or(usize::MAX);
        let remaining = docs.iter().skip(skip).cloned();

        let page = match usize::try_from(window.limit) {
            Ok(0) | Err(_) => remaining.collect(),
            Ok(limit) => remaining.take(limit).collect(),
        };
        Ok(page)
    }

    async fn find_by_title(&self, title: &str) -> StoreResult<Option<PostDocument>> {
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|doc| doc.title() == title).cloned())
    }

    async fn insert_many(&self, posts: Vec<Post>) -> StoreResult<Vec<PostDocument>> {
        let inserted: Vec<PostDocument> = posts.into_iter().map(PostDocument::new).collect();
        self.docs.write().await.extend(inserted.iter().cloned());
        tracing::debug!(count = inserted.len(), "Inserted posts");
        Ok(inserted)
    }

    async fn find_one_and_delete(&self, title: &str) -> StoreResult<Option<PostDocument>> {
        let mut docs = self.docs.write().await;
        let position = docs.iter().position(|doc| doc.title() == title);
        Ok(position.map(|index| docs.remove(index)))
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    fn titles(docs: &[PostDocument]) -> Vec<&str> {
        docs.iter().map(|d| d.title()).collect()
    }

    async fn seeded(count: usize) -> MemoryStore {
        let store = MemoryStore::new();
        let posts = (0..count).map(|i| Post::simple(format!("P{i}"), "x")).collect();
        store.insert_many(posts).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let store = MemoryStore::new();
        let inserted = store
            .insert_many(vec![Post::simple("A", "1"), Post::simple("A", "2")])
            .await
            .unwrap();
        assert_eq!(inserted.len(), 2);
        assert_ne!(inserted[0].id, inserted[1].id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_find_all_insertion_order() {
        let store = seeded(3).await;
        let docs = store.find_all(None).await.unwrap();
        assert_eq!(titles(&docs), vec!["P0", "P1", "P2"]);
    }

    #[tokio::test]
    async fn test_find_all_window() {
        let store = seeded(5).await;
        let docs = store
            .find_all(Some(Window { skip: 1, limit: 2 }))
            .await
            .unwrap();
        assert_eq!(titles(&docs), vec!["P1", "P2"]);
    }

    #[tokio::test]
    async fn test_zero_limit_is_unlimited() {
        let store = seeded(4).await;
        let docs = store
            .find_all(Some(Window { skip: 1, limit: 0 }))
            .await
            .unwrap();
        assert_eq!(docs.len(), 3);
    }

    #[tokio::test]
    async fn test_skip_past_end() {
        let store = seeded(2).await;
        let docs = store
            .find_all(Some(Window { skip: 10, limit: 5 }))
            .await
            .unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_negative_limit_is_absolute() {
        let store = seeded(5).await;
        let docs = store
            .find_all(Some(Window { skip: 1, limit: -2 }))
            .await
            .unwrap();
        assert_eq!(titles(&docs), vec!["P1", "P2"]);
    }

    #[tokio::test]
    async fn test_negative_skip_rejected() {
        let store = seeded(2).await;
        let result = store.find_all(Some(Window { skip: -20, limit: 20 })).await;
        assert!(matches!(result, Err(StoreError::InvalidWindow { .. })));
    }

    #[tokio::test]
    async fn test_find_by_title_first_match() {
        let store = MemoryStore::new();
        store
            .insert_many(vec![Post::simple("A", "first"), Post::simple("A", "second")])
            .await
            .unwrap();
        let found = store.find_by_title("A").await.unwrap().unwrap();
        assert_eq!(found.post.content.as_deref(), Some("first"));
        assert!(store.find_by_title("a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_one_and_delete_removes_first_only() {
        let store = MemoryStore::new();
        store
            .insert_many(vec![Post::simple("A", "first"), Post::simple("A", "second")])
            .await
            .unwrap();

        let deleted = store.find_one_and_delete("A").await.unwrap().unwrap();
        assert_eq!(deleted.post.content.as_deref(), Some("first"));

        let left = store.find_by_title("A").await.unwrap().unwrap();
        assert_eq!(left.post.content.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_find_one_and_delete_missing() {
        let store = seeded(1).await;
        assert!(store.find_one_and_delete("missing").await.unwrap().is_none());
        assert_eq!(store.len().await, 1);
    }
}
