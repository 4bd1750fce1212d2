//! Application state shared across handlers.

use std::sync::Arc;

use blog_store::PostStore;

use crate::config::ServerConfig;
use crate::services::{PersonService, PostsService};

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    config: Arc<ServerConfig>,
    posts: PostsService,
    person: PersonService,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Arc<dyn PostStore>, config: ServerConfig) -> Self {
        Self {
            posts: PostsService::new(store),
            person: PersonService::new(),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn posts(&self) -> &PostsService {
        &self.posts
    }

    pub fn person(&self) -> &PersonService {
        &self.person
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
