//! HTTP surface: routing, handlers, and request logging.
//!
//! ## Structure
//!
//! - [`handlers`] - the canned-response and emission endpoints.
//! - [`middleware`] - one structured log line per completed request.

pub mod handlers;
pub mod middleware;

use crate::server::dispatch::dispatcher::Dispatcher;
use axum::Router;
use axum::routing::get;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

/// Builds the application router around a [`Dispatcher`] handle.
pub fn router(dispatcher: Dispatcher) -> Router {
    Router::new()
        .route("/", get(handlers::root).post(handlers::submit_emission))
        .route("/slow", get(handlers::slow))
        .route("/timeout", get(handlers::timeout))
        .route("/500", get(handlers::internal_error))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(AppState { dispatcher })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn app() -> Router {
        router(Dispatcher::spawn(5))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_serves_canned_document() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let document: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(document["users"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn error_profile_answers_500() {
        let response = app()
            .oneshot(Request::builder().uri("/500").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_profile_answers_408_after_stalling() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/timeout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn accepts_valid_emission_request() {
        let response = app()
            .oneshot(post_json(r#"{"duration": "1s", "rate": 5}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn rejects_zero_rate_before_dispatch() {
        let (tx, mut rx) = tokio::sync::mpsc::channel(5);
        let response = router(Dispatcher::new(tx))
            .oneshot(post_json(r#"{"duration": "1s", "rate": 0}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        // Nothing must have reached the queue.
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn rejects_malformed_duration() {
        let response = app()
            .oneshot(post_json(r#"{"duration": "soon", "rate": 5}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let response = app().oneshot(post_json("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_missing_content_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::from(r#"{"duration": "1s", "rate": 5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
