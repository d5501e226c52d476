//! noteful-server: HTTP API server for the Noteful folders and notes backend
//!
//! This crate provides:
//! - REST endpoints for folders and notes (list, get, create, delete, patch)
//! - Existence guards that turn unknown ids into 404 before any handler runs
//! - JSON error envelopes of the form `{ "error": { "message": "..." } }`
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request ID assignment and echo
//! - Request tracing and logging, with the request id on each span
//! - CORS handling
//!
//! # Usage
//!
//! ```rust,ignore
//! use noteful_server::{build_app, config::ServerConfig, state::AppState};
//! use noteful_store::{Store, StoreConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let store = Store::connect(StoreConfig::from_url(&config.database_url)).await?;
//! let app = build_app(AppState::new(store, config))?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use noteful_core;
pub use noteful_store;

use crate::middleware::request_id::{propagate_request_id, request_span, set_request_id};

/// Build the full application: routes plus the middleware stack.
///
/// The request id is assigned outermost so the trace span and every
/// response, CORS preflights included, carry it.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(&state.config().cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(request_span::<axum::body::Body>))
        .layer(propagate_request_id())
        .layer(set_request_id()))
}

/// Build CORS layer from configuration.
pub fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }

    // Parse comma-separated origins
    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse().map_err(|_| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("'{}' is not a valid origin", s),
            })
        })
        .collect::<Result<Vec<http::HeaderValue>, _>>()?;

    Ok(layer.allow_origin(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::request_id::REQUEST_ID_HEADER;
    use crate::routes::test_support;
    use axum::http::StatusCode;

    #[test]
    fn test_cors_any() {
        assert!(build_cors_layer("*").is_ok());
    }

    #[test]
    fn test_cors_list() {
        assert!(build_cors_layer("http://localhost:3000, https://noteful.example").is_ok());
    }

    #[test]
    fn test_cors_invalid_origin() {
        let err = build_cors_layer("http://ok.example,bad\norigin").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let app = build_app(test_support::lazy_state()).unwrap();
        let (status, headers, _) = test_support::send(app, "GET", "/", "").await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers.contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_client_request_id_is_echoed() {
        use axum::body::Body;
        use tower::ServiceExt;

        let app = build_app(test_support::lazy_state()).unwrap();
        let request = axum::http::Request::builder()
            .uri("/api/folders/nope")
            .header(REQUEST_ID_HEADER, "client-chosen-id")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).unwrap(),
            "client-chosen-id"
        );
    }

    #[tokio::test]
    async fn test_error_responses_carry_request_id() {
        let app = build_app(test_support::lazy_state()).unwrap();
        let (status, headers, _) =
            test_support::send(app, "POST", "/api/folders", "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(headers.contains_key(REQUEST_ID_HEADER));
    }
}
