//! blog-server: HTTP API server for the poetry blog
//!
//! This crate provides:
//! - REST endpoints for posts (list, detail, create, edit stub, delete)
//! - Person stubs and a multipart upload endpoint
//! - Per-route exception filters
//! - OpenAPI documentation and static file serving
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! Handlers call the services in [`services`], which call a
//! [`blog_store::PostStore`] held in [`AppState`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use blog_server::{routes, AppState, ServerConfig};
//! use blog_store::MemoryStore;
//!
//! let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
//! let app = routes::build_router(state);
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig, StoreBackend};
pub use error::{ApiError, ApiResult};
pub use filters::{ExceptionFilter, FilteredRoute, LoggingFilter, get_with_filter};
pub use state::AppState;

// Re-export dependent crates
pub use blog_core;
pub use blog_store;
