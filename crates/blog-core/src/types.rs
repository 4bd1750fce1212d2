//! Core data types for the poetry blog.
//!
//! A post is a loosely-shaped document: the older `{title, content}` shape
//! and the richer poem shape (`notes`, `paragraphs`, `dynasty`, `author`)
//! are both accepted. Every field is optional on input; nothing beyond the
//! declared fields is kept.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a stored post.
///
/// Generated on insert. Titles are the lookup key for the HTTP routes; the
/// id only distinguishes documents that share a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PostId(pub Uuid);

impl PostId {
    /// Creates a new random PostId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PostId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Post
// ============================================================================

/// Reads an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A blog post (a poem) as submitted by clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Title, also the lookup key for detail and delete.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Free-form body, used by the simple post shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Tags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<String>,

    /// Lines of the poem.
    #[serde(default, deserialize_with = "null_as_default")]
    pub paragraphs: Vec<String>,

    /// Dynasty the poem dates from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynasty: Option<String>,

    /// Poet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Post {
    /// Creates a post in the simple `{title, content}` shape.
    pub fn simple(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Creates a post in the poem shape.
    pub fn poem(
        title: impl Into<String>,
        author: impl Into<String>,
        dynasty: impl Into<String>,
        paragraphs: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            paragraphs,
            dynasty: Some(dynasty.into()),
            author: Some(author.into()),
            ..Self::default()
        }
    }
}

/// A post as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostDocument {
    pub id: PostId,
    #[serde(flatten)]
    pub post: Post,
}

impl PostDocument {
    /// Wraps a post with a freshly generated id.
    pub fn new(post: Post) -> Self {
        Self {
            id: PostId::new(),
            post,
        }
    }

    pub fn title(&self) -> &str {
        &self.post.title
    }
}

// ============================================================================
// Person
// ============================================================================

/// Payload accepted by the person create/update stubs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

// ============================================================================
// Tests
// ============================================================================
