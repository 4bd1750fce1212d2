//! Exception filters attached to individual routes.
//!
//! A handler returns its error type as usual. The error's `IntoResponse`
//! impl stashes it in the response extensions via [`Caught::attach`]; a
//! filter registered on the route takes it back out and decides the final
//! response. Routes are registered together with their filter through
//! [`get_with_filter`], which yields a [`FilteredRoute`] that is applied to
//! the router explicitly.

use std::marker::PhantomData;
use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    handler::Handler,
    http::{Method, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};

use crate::state::AppState;

/// An error of type `E` riding in a response's extensions.
pub struct Caught<E>(pub Arc<E>);

impl<E> Clone for Caught<E> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<E: Send + Sync + 'static> Caught<E> {
    /// Attach `error` to `response` so a filter can intercept it.
    pub fn attach(error: E, mut response: Response) -> Response {
        response.extensions_mut().insert(Self(Arc::new(error)));
        response
    }
}

/// What a filter gets to see of the request that failed.
#[derive(Debug, Clone)]
pub struct RequestSummary {
    pub method: Method,
    pub uri: Uri,
}

/// Intercepts errors of type `E` raised by a route.
///
/// Returning `None` leaves the response to the default: an empty `200 OK`.
pub trait ExceptionFilter<E>: Clone + Send + Sync + 'static {
    fn catch(&self, error: &E, request: &RequestSummary) -> Option<Response>;
}

/// Logs the error and swallows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingFilter;

impl<E> ExceptionFilter<E> for LoggingFilter
where
    E: std::fmt::Display + std::fmt::Debug,
{
    fn catch(&self, error: &E, request: &RequestSummary) -> Option<Response> {
        tracing::warn!(
            error = %error,
            detail = ?error,
            method = %request.method,
            uri = %request.uri,
            "Exception caught by filter"
        );
        None
    }
}

/// A route registration carrying its exception filter.
pub struct FilteredRoute<E, F> {
    method: Method,
    path: &'static str,
    route: MethodRouter<AppState>,
    filter: F,
    _error: PhantomData<fn() -> E>,
}

/// Register `handler` for `GET path` with `filter` intercepting its `E` errors.
pub fn get_with_filter<H, T, E, F>(path: &'static str, handler: H, filter: F) -> FilteredRoute<E, F>
where
    H: Handler<T, AppState>,
    T: 'static,
    E: Send + Sync + 'static,
    F: ExceptionFilter<E>,
{
    FilteredRoute {
        method: Method::GET,
        path,
        route: get(handler),
        filter,
        _error: PhantomData,
    }
}

impl<E, F> FilteredRoute<E, F>
where
    E: Send + Sync + 'static,
    F: ExceptionFilter<E>,
{
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        self.path
    }

    /// Add this route to `router`.
    pub fn register(self, router: Router<AppState>) -> Router<AppState> {
        let filter = self.filter;
        let layer = middleware::from_fn(move |request: Request, next: Next| {
            let filter = filter.clone();
            async move { intercept::<E, F>(filter, request, next).await }
        });

        tracing::debug!(method = %self.method, path = self.path, "Registering filtered route");
        router.route(self.path, self.route.layer(layer))
    }
}

async fn intercept<E, F>(filter: F, request: Request, next: Next) -> Response
where
    E: Send + Sync + 'static,
    F: ExceptionFilter<E>,
{
    let summary = RequestSummary {
        method: request.method().clone(),
        uri: request.uri().clone(),
    };

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<Caught<E>>() {
        Some(Caught(error)) => filter
            .catch(&error, &summary)
            .unwrap_or_else(|| StatusCode::OK.into_response()),
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use blog_store::MemoryStore;
    use tower::ServiceExt;

    use crate::config::ServerConfig;

    #[derive(Debug, thiserror::Error)]
    #[error("test failure {0}")]
    struct TestError(u32);

    impl IntoResponse for TestError {
        fn into_response(self) -> Response {
            Caught::attach(self, StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }

    #[derive(Clone)]
    struct TeapotFilter;

    impl ExceptionFilter<TestError> for TeapotFilter {
        fn catch(&self, error: &TestError, _request: &RequestSummary) -> Option<Response> {
            Some((StatusCode::IM_A_TEAPOT, format!("caught {}", error.0)).into_response())
        }
    }

    fn router_with<F: ExceptionFilter<TestError>>(filter: F, fail: bool) -> Router {
        let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
        let route = get_with_filter::<_, _, TestError, _>(
            "/t",
            move || async move {
                if fail {
                    Err(TestError(7))
                } else {
                    Ok("fine")
                }
            },
            filter,
        );
        assert_eq!(route.method(), &Method::GET);
        assert_eq!(route.path(), "/t");
        route.register(Router::new()).with_state(state)
    }

    async fn call(router: Router) -> (StatusCode, String) {
        let response = router
            .oneshot(
                axum::http::Request::builder()
                    .uri("/t")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_logging_filter_swallows() {
        let (status, body) = call(router_with(LoggingFilter, true)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_filter_can_replace_response() {
        let (status, body) = call(router_with(TeapotFilter, true)).await;
        assert_eq!(status, StatusCode::IM_A_TEAPOT);
        assert_eq!(body, "caught 7");
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let (status, body) = call(router_with(TeapotFilter, false)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "fine");
    }
}
