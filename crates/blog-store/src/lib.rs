//! blog-store: document storage for blog posts
//!
//! This crate provides:
//! - The `PostStore` contract (find-all, find-by-title, insert, find-and-delete)
//! - A PostgreSQL implementation storing each post as a JSONB document
//! - An in-memory implementation with the same semantics
//! - Embedded migrations
//!
//! # Usage
//!
//! ```rust,ignore
//! use blog_store::{PostStore, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! store.insert_many(vec![post]).await?;
//! let posts = store.find_all(None).await?;
//!
//! store.close().await;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::PostRow;
pub use repository::{PostStore, normalize_window};
pub use store::{DEFAULT_DATABASE_URL, Store, StoreConfig};

// Re-export blog-core for downstream crates
pub use blog_core;
