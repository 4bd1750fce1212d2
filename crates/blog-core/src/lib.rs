//! blog-core: domain types for the poetry blog
//!
//! This crate provides:
//! - `Post` and `PostDocument`, the stored post shape
//! - `PersonInput`, the payload of the person stubs
//! - Skip/limit pagination (`PageRequest`, `Window`)
//!
//! It performs no I/O; the store and server crates build on it.

pub mod pagination;
pub mod types;

pub use pagination::{DEFAULT_PAGE_SIZE, PageRequest, Window};
pub use types::{PersonInput, Post, PostDocument, PostId};
