//! Posts service.
//!
//! Thin orchestration over the post store. Titles are matched exactly;
//! absent posts are reported as `None`/`false`, never as errors.

use std::sync::Arc;

use blog_core::{PageRequest, Post, PostDocument};
use blog_store::{PostStore, StoreResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatePostResponse {
    /// Whether at least one document was stored.
    pub status: bool,
    /// Owner id from the request path, echoed back unchecked.
    pub userid: String,
}

/// Post use-cases backed by a [`PostStore`].
#[derive(Clone)]
pub struct PostsService {
    store: Arc<dyn PostStore>,
}

impl PostsService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// All stored posts.
    pub async fn list_posts(&self) -> StoreResult<Vec<PostDocument>> {
        self.store.find_all(None).await
    }

    /// One page of posts.
    pub async fn list_page(&self, page: PageRequest) -> StoreResult<Vec<PostDocument>> {
        let window = page.window();
        tracing::debug!(
            page_number = page.page_number,
            skip = window.skip,
            limit = window.limit,
            "Listing page of posts"
        );
        self.store.find_all(Some(window)).await
    }

    /// The first post titled exactly `title`.
    pub async fn get_post(&self, title: &str) -> StoreResult<Option<PostDocument>> {
        self.store.find_by_title(title).await
    }

    /// Store `post` on behalf of `owner_id`.
    ///
    /// The owner is not validated or recorded.
    pub async fn create_post(
        &self,
        post: Post,
        owner_id: impl Into<String>,
    ) -> StoreResult<CreatePostResponse> {
        let inserted = self.store.insert_many(vec![post]).await?;
        let userid = owner_id.into();

        tracing::info!(count = inserted.len(), userid = %userid, "Post created");

        Ok(CreatePostResponse {
            status: !inserted.is_empty(),
            userid,
        })
    }

    /// Remove the first post titled `title`; `true` if one was removed.
    pub async fn delete_post(&self, title: &str) -> StoreResult<bool> {
        let removed = self.store.find_one_and_delete(title).await?;
        if let Some(doc) = &removed {
            tracing::info!(id = %doc.id, title = %title, "Post deleted");
        }
        Ok(removed.is_some())
    }
}

impl std::fmt::Debug for PostsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostsService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_store::MemoryStore;

    fn service() -> PostsService {
        PostsService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service();

        let response = service
            .create_post(Post::simple("A", "B"), "u1")
            .await
            .unwrap();
        assert_eq!(
            response,
            CreatePostResponse {
                status: true,
                userid: "u1".to_string()
            }
        );

        let found = service.get_post("A").await.unwrap().unwrap();
        assert_eq!(found.post, Post::simple("A", "B"));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        assert!(service().get_post("nothing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_false() {
        assert!(!service().delete_post("nonexistent").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let service = service();
        service.create_post(Post::simple("A", "B"), "u1").await.unwrap();

        assert!(service.delete_post("A").await.unwrap());
        assert!(service.get_post("A").await.unwrap().is_none());
        assert!(!service.delete_post("A").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_creates_same_title() {
        let service = service();

        let (a, b) = tokio::join!(
            service.create_post(Post::simple("Same", "one"), "u1"),
            service.create_post(Post::simple("Same", "two"), "u2"),
        );
        assert!(a.unwrap().status);
        assert!(b.unwrap().status);

        let all = service.list_posts().await.unwrap();
        assert_eq!(all.iter().filter(|d| d.title() == "Same").count(), 2);
    }

    #[tokio::test]
    async fn test_list_page() {
        let service = service();
        for i in 0..25 {
            service
                .create_post(Post::simple(format!("P{i}"), "x"), "u")
                .await
                .unwrap();
        }

        let first = service.list_page(PageRequest::new(1, None)).await.unwrap();
        assert_eq!(first.len(), 20);

        let second = service.list_page(PageRequest::new(2, None)).await.unwrap();
        assert_eq!(second.len(), 5);
        assert_eq!(second[0].title(), "P20");

        let small = service.list_page(PageRequest::new(3, Some(2))).await.unwrap();
        let titles: Vec<_> = small.iter().map(|d| d.title()).collect();
        assert_eq!(titles, vec!["P4", "P5"]);
    }

    #[tokio::test]
    async fn test_list_page_zero_is_rejected_by_store() {
        let service = service();
        service.create_post(Post::simple("A", "B"), "u").await.unwrap();
        assert!(service.list_page(PageRequest::new(0, None)).await.is_err());
    }
}
