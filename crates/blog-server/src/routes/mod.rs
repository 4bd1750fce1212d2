//! Route definitions for the HTTP API.

pub mod docs;
pub mod health;
pub mod person;
pub mod posts;
pub mod root;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the complete router with all routes.
///
/// Static files from `static_dir` are served under `static_prefix`.
pub fn build_router(state: AppState) -> Router {
    let static_prefix = state.config().static_prefix.clone();
    let static_dir = state.config().static_dir.clone();

    tracing::debug!(
        prefix = %static_prefix,
        dir = %static_dir.display(),
        "Serving static files"
    );

    Router::new()
        .merge(root::routes())
        .merge(health::routes())
        .merge(posts::routes())
        .merge(person::routes())
        .merge(docs::routes())
        .nest_service(&static_prefix, ServeDir::new(static_dir))
        .with_state(state)
}
