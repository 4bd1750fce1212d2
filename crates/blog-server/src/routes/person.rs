//! Person routes.
//!
//! The CRUD routes are placeholders answering with a fixed message; nothing
//! is stored. `POST /person/file` accepts multipart uploads and writes every
//! file part to the upload directory.

use std::path::Path as FsPath;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State, multipart::Field},
    http::StatusCode,
    routing::{get, post},
};
use blog_core::PersonInput;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// A file part written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedFile {
    /// Form field the file came in.
    pub field: String,
    /// File name sent by the client.
    pub original_name: String,
    /// Name of the file inside the upload directory.
    pub stored_name: String,
    pub content_type: Option<String>,
    pub size: usize,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Add a text field, turning repeated names into arrays.
fn append_field(fields: &mut Map<String, Value>, name: String, value: String) {
    match fields.get_mut(&name) {
        Some(Value::Array(values)) => values.push(Value::String(value)),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, Value::String(value)]);
        }
        None => {
            fields.insert(name, Value::String(value));
        }
    }
}

fn write_failed(dir: &FsPath, e: std::io::Error) -> ApiError {
    tracing::error!(error = %e, dir = %dir.display(), "Failed to write upload");
    ApiError::Internal("Failed to store uploaded file".to_string())
}

/// Stream one file part to `dir` under a random name.
async fn store_file(dir: &FsPath, name: String, mut field: Field<'_>) -> ApiResult<UploadedFile> {
    let original_name = field.file_name().unwrap_or_default().to_string();
    let content_type = field.content_type().map(str::to_string);

    let stored_name = Uuid::new_v4().simple().to_string();
    let mut file = File::create(dir.join(&stored_name))
        .await
        .map_err(|e| write_failed(dir, e))?;

    let mut size = 0;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?
    {
        size += chunk.len();
        file.write_all(&chunk).await.map_err(|e| write_failed(dir, e))?;
    }
    file.flush().await.map_err(|e| write_failed(dir, e))?;

    Ok(UploadedFile {
        field: name,
        original_name,
        stored_name,
        content_type,
        size,
    })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /person - Create a person.
#[utoipa::path(
    post,
    path = "/person",
    tag = "person",
    request_body = PersonInput,
    responses((status = 201, description = "Placeholder message", body = String))
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(input): Json<PersonInput>,
) -> (StatusCode, String) {
    (StatusCode::CREATED, state.person().create(&input))
}

/// GET /person - List people.
#[utoipa::path(
    get,
    path = "/person",
    tag = "person",
    responses((status = 200, description = "Placeholder message", body = String))
)]
pub async fn list_people(State(state): State<AppState>) -> String {
    state.person().find_all()
}

/// GET /person/{id} - Fetch a person.
#[utoipa::path(
    get,
    path = "/person/{id}",
    tag = "person",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Placeholder message", body = String),
        (status = 400, description = "Id is not an integer"),
    )
)]
pub async fn get_person(State(state): State<AppState>, Path(id): Path<i64>) -> String {
    state.person().find_one(id)
}

/// PATCH /person/{id} - Update a person.
#[utoipa::path(
    patch,
    path = "/person/{id}",
    tag = "person",
    params(("id" = i64, Path, description = "Person id")),
    request_body = PersonInput,
    responses((status = 200, description = "Placeholder message", body = String))
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<PersonInput>,
) -> String {
    state.person().update(id, &input)
}

/// DELETE /person/{id} - Remove a person.
#[utoipa::path(
    delete,
    path = "/person/{id}",
    tag = "person",
    params(("id" = i64, Path, description = "Person id")),
    responses((status = 200, description = "Placeholder message", body = String))
)]
pub async fn remove_person(State(state): State<AppState>, Path(id): Path<i64>) -> String {
    state.person().remove(id)
}

/// POST /person/file - Upload files.
///
/// Every part with a file name is written to the upload directory; the
/// other parts are echoed back as JSON. The request body size is not capped.
#[utoipa::path(
    post,
    path = "/person/file",
    tag = "person",
    responses(
        (status = 201, description = "Summary of the text fields", body = String),
        (status = 400, description = "Malformed multipart body"),
    )
)]
pub async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, String)> {
    let upload_dir = state.config().upload_dir.clone();
    tokio::fs::create_dir_all(&upload_dir).await.map_err(|e| {
        tracing::error!(error = %e, dir = %upload_dir.display(), "Failed to create upload dir");
        ApiError::Internal("Failed to prepare upload directory".to_string())
    })?;

    let mut fields = Map::new();
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if field.file_name().is_some() {
            files.push(store_file(&upload_dir, name, field).await?);
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Invalid form field: {}", e)))?;
            append_field(&mut fields, name, text);
        }
    }

    tracing::info!(count = files.len(), files = ?files, "Files uploaded");

    Ok((
        StatusCode::CREATED,
        format!("upload files: {}", Value::Object(fields)),
    ))
}

/// Build person routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/person", get(list_people).post(create_person))
        .route(
            "/person/file",
            post(upload_files).layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/person/{id}",
            get(get_person).patch(update_person).delete(remove_person),
        )
}

// ============================================================================
// Tests
// ============================================================================
