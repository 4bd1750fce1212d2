//! Root route.
//!
//! `GET /` always fails with a [`GreetingError`]. The route is registered
//! through [`get_with_filter`] with a [`LoggingFilter`], so the error is
//! logged and the client gets an empty `200`.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::{ErrorDetails, ErrorResponse};
use crate::filters::{Caught, LoggingFilter, get_with_filter};
use crate::state::AppState;

/// Raised by the root route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("greeting failed: {code} ({detail})")]
pub struct GreetingError {
    pub code: String,
    pub detail: String,
}

impl GreetingError {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
        }
    }
}

/// Unfiltered, this renders as a 500 with the usual error body.
impl IntoResponse for GreetingError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorDetails {
                code: "GREETING_FAILED".to_string(),
                message: self.to_string(),
            },
        };
        let response = (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        Caught::attach(self, response)
    }
}

/// GET / - Greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = "default",
    responses((status = 200, description = "Empty; the raised error is logged"))
)]
pub async fn get_hello() -> Result<String, GreetingError> {
    Err(GreetingError::new("1", "2"))
}

/// Build the root route.
pub fn routes() -> Router<AppState> {
    get_with_filter::<_, _, GreetingError, _>("/", get_hello, LoggingFilter).register(Router::new())
}
