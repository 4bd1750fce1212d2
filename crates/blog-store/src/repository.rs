//! Store contract shared by the PostgreSQL and in-memory backends.
//!
//! The contract mirrors a document collection: find-all (optionally
//! windowed), find-first-by-title, bulk insert and find-and-delete.
//!
//! Window semantics:
//! - `limit == 0` means no limit.
//! - A negative `limit` counts as its absolute value.
//! - A negative `skip` is rejected with [`StoreError::InvalidWindow`].
//!
//! Results are in insertion order.

use async_trait::async_trait;
use blog_core::{Post, PostDocument, Window};

use crate::error::{StoreError, StoreResult};

/// Document collection of posts.
#[async_trait]
pub trait PostStore: Send + Sync + 'static {
    /// All posts, or the posts inside `window`.
    async fn find_all(&self, window: Option<Window>) -> StoreResult<Vec<PostDocument>>;

    /// First post whose title equals `title`.
    async fn find_by_title(&self, title: &str) -> StoreResult<Option<PostDocument>>;

    /// Insert `posts`, returning the stored documents with their new ids.
    async fn insert_many(&self, posts: Vec<Post>) -> StoreResult<Vec<PostDocument>>;

    /// Remove and return the first post whose title equals `title`.
    async fn find_one_and_delete(&self, title: &str) -> StoreResult<Option<PostDocument>>;

    /// Release the underlying connection. Further calls may fail.
    async fn close(&self);
}

/// Bring `window` into the form both backends execute.
pub fn normalize_window(window: Window) -> StoreResult<Window> {
    if window.skip < 0 {
        return Err(StoreError::InvalidWindow {
            skip: window.skip,
            limit: window.limit,
        });
    }
    Ok(Window {
        skip: window.skip,
        limit: window.limit.saturating_abs(),
    })
}
