//! Request extractors that reject with [`ApiError`].
//!
//! Every rejection goes through the same JSON error body as handler errors.
//!
//! Unlike `axum::Json`, a request without a JSON body is not rejected: an
//! empty body or a non-JSON `Content-Type` yields `T::default()`, so a bare
//! `POST /items` reaches validation and reports which fields are missing.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, StatusCode, header, request::Parts},
};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// JSON request body that falls back to `T::default()` when absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;

        parse_body(is_json, &bytes).map(JsonBody)
    }
}

/// The `{name}` path segment, percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(pub String);

impl<S> FromRequestParts<S> for ItemName
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;

        Ok(Self(name))
    }
}

/// Map an axum rejection onto `ApiError`, keeping client-error statuses.
fn rejected(status: StatusCode, message: String) -> ApiError {
    if status.is_server_error() {
        ApiError::Internal(message)
    } else {
        ApiError::Rejected { status, message }
    }
}

/// True for `application/json` and `application/*+json` media types.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn parse_body<T>(is_json: bool, bytes: &[u8]) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(bytes)
        .map_err(|e| ApiError::BadRequest(format!("Malformed JSON body: {e}")))
}
