//! Root greeting endpoint.

use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / - Plain-text greeting.
async fn greeting() -> &'static str {
    "Hello, world!"
}

/// Build root routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(greeting))
}
