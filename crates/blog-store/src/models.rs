//! Database models for the storage layer.
//!
//! These types map directly to database rows. The document itself lives in
//! a JSONB column and decodes straight into the `blog-core` post type.

use blog_core::{Post, PostDocument, PostId};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// Database row for the `posts` table.
#[derive(Debug, Clone, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub doc: Json<Post>,
}

impl From<PostRow> for PostDocument {
    fn from(row: PostRow) -> Self {
        Self {
            id: PostId::from_uuid(row.id),
            post: row.doc.0,
        }
    }
}
