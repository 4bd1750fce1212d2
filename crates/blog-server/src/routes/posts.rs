//! Post routes.
//!
//! - GET /posts - List posts, optionally one page at a time
//! - GET /posts/{title} - Fetch a post by exact title
//! - POST /posts/{userid} - Create a post
//! - PUT /posts/{id} - Echo an edit without storing it
//! - DELETE /posts/{title} - Delete the first post with a title
//!
//! All item routes share one path segment, so the router sees a single
//! `/posts/{key}`; each handler reads the segment under its own meaning.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use blog_core::{PageRequest, Post, PostDocument};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiResult;
use crate::services::CreatePostResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for GET /posts.
///
/// Without `pageNumber` every post is returned and `pageSize` is ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// 1-based page number.
    pub page_number: Option<i64>,
    /// Page size (default 20; 0 disables the limit).
    pub page_size: Option<i64>,
}

/// Response for GET /posts/{title}.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostDetailResponse {
    /// The post, or `null` if no post has this title.
    pub data: Option<PostDocument>,
}

/// Response for PUT /posts/{id}.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatePostResponse {
    pub id: String,
    /// The request body, unchanged.
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /posts - List posts.
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Posts in insertion order", body = [PostDocument]),
        (status = 400, description = "Non-integer paging parameters or a negative window"),
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> ApiResult<Json<Vec<PostDocument>>> {
    let posts = match query.page_number {
        Some(page_number) => {
            let page = PageRequest::new(page_number, query.page_size);
            state.posts().list_page(page).await?
        }
        None => state.posts().list_posts().await?,
    };

    tracing::info!(count = posts.len(), "Listed posts");
    Ok(Json(posts))
}

/// GET /posts/{title} - Fetch one post.
#[utoipa::path(
    get,
    path = "/posts/{title}",
    tag = "posts",
    params(("title" = String, Path, description = "Exact post title")),
    responses((status = 200, description = "The post or null", body = PostDetailResponse))
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<PostDetailResponse>> {
    let data = state.posts().get_post(&title).await?;
    tracing::debug!(title = %title, found = data.is_some(), "Fetched post");
    Ok(Json(PostDetailResponse { data }))
}

/// POST /posts/{userid} - Create a post.
#[utoipa::path(
    post,
    path = "/posts/{userid}",
    tag = "posts",
    params(("userid" = String, Path, description = "Owner id, echoed back")),
    request_body = Post,
    responses((status = 201, description = "Insert result", body = CreatePostResponse))
)]
pub async fn create_post(
    State(state): State<AppState>,
    Path(userid): Path<String>,
    Json(post): Json<Post>,
) -> ApiResult<(StatusCode, Json<CreatePostResponse>)> {
    let response = state.posts().create_post(post, userid).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /posts/{id} - Edit a post.
///
/// Not persisted: the id and body are echoed back as received.
// TODO: decide whether edits should be stored; nothing here writes to the store yet.
#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post key")),
    request_body = Post,
    responses((status = 200, description = "Echo of the request", body = UpdatePostResponse))
)]
pub async fn update_post(
    Path(id): Path<String>,
    Json(data): Json<serde_json::Value>,
) -> Json<UpdatePostResponse> {
    tracing::debug!(id = %id, "Echoing post update");
    Json(UpdatePostResponse { id, data })
}

/// DELETE /posts/{title} - Delete a post.
#[utoipa::path(
    delete,
    path = "/posts/{title}",
    tag = "posts",
    params(("title" = String, Path, description = "Exact post title")),
    responses((status = 200, description = "Whether a post was removed", body = bool))
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<bool>> {
    let removed = state.posts().delete_post(&title).await?;
    Ok(Json(removed))
}

/// Build post routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/posts", get(list_posts)).route(
        "/posts/{key}",
        get(get_post)
            .post(create_post)
            .put(update_post)
            .delete(delete_post),
    )
}

// ============================================================================
// Tests
// ============================================================================
