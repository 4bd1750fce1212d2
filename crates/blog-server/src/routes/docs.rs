//! API documentation.
//!
//! - GET /docs-json - OpenAPI document generated from the route annotations
//! - GET /docs - Swagger UI reading `/docs-json`

use axum::{Json, Router, extract::State, response::Html, routing::get};
use utoipa::OpenApi;

use crate::routes::{health, person, posts, root};
use crate::services::CreatePostResponse;
use crate::state::AppState;

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/docs-json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Poetry blog API",
        description = "Just api description",
        version = "1.0"
    ),
    paths(
        root::get_hello,
        health::health_check,
        posts::list_posts,
        posts::get_post,
        posts::create_post,
        posts::update_post,
        posts::delete_post,
        person::create_person,
        person::list_people,
        person::get_person,
        person::update_person,
        person::remove_person,
        person::upload_files,
    ),
    components(schemas(
        blog_core::Post,
        blog_core::PostDocument,
        blog_core::PostId,
        blog_core::PersonInput,
        CreatePostResponse,
        posts::PostDetailResponse,
        posts::UpdatePostResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "blog", description = "Poetry blog"),
        (name = "posts", description = "Poems"),
        (name = "person", description = "People and uploads"),
        (name = "default", description = "Root"),
    )
)]
pub struct ApiDoc;

/// Default base URL of the Swagger UI assets.
pub const DEFAULT_DOCS_ASSET_URL: &str = "https://unpkg.com/swagger-ui-dist@5";

/// Swagger UI page loading its assets from `asset_url`.
fn swagger_ui_page(asset_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Poetry blog API</title>
  <link rel="stylesheet" href="{asset_url}/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="{asset_url}/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{OPENAPI_PATH}", dom_id: "#swagger-ui" }});
  </script>
</body>
</html>
"##
    )
}

/// GET /docs-json - OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs - Swagger UI.
async fn swagger_ui(State(state): State<AppState>) -> Html<String> {
    Html(swagger_ui_page(&state.config().docs_asset_url))
}

/// Build documentation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_json))
        .route("/docs", get(swagger_ui))
}
