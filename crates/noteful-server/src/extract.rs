//! Lenient JSON body extraction.
//!
//! `axum::Json` rejects requests without a JSON content type and answers
//! with a plain-text body. Clients of this API often omit both the header
//! and the body on updates, and expect the usual error envelope, so bodies
//! are read as bytes and decoded here instead.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Extracts and deserializes a JSON body. An empty body decodes as `{}`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e.body_text())))?;

        parse_json_body(&bytes).map(JsonBody)
    }
}

/// Decode a request body, treating a blank body as an empty object.
pub fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        bytes
    };

    serde_json::from_slice(bytes)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))
}
