//! JSON request bodies with caller-facing error messages.
//!
//! axum's own `Json` extractor rejects with plain-text bodies; these helpers
//! reject with [`AppError`] so failures render as `{"error": ...}`.

use crate::error::AppError;
use anyhow::anyhow;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::{HeaderMap, StatusCode, header},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use validator::Validate;

pub const INVALID_JSON: &str = "Invalid JSON";
pub const JSON_REQUIRED: &str = "Request must be JSON";

/// Deserializes a request body, separating malformed JSON from schema mismatches.
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(bytes).map_err(|err| match err.classify() {
        Category::Syntax | Category::Eof => AppError::BadRequest(anyhow!(INVALID_JSON)),
        Category::Data => AppError::BadRequest(anyhow!("Invalid request body: {}", err)),
        Category::Io => AppError::InternalError(anyhow::Error::new(err)),
    })
}

/// Whether the request declares `application/json` or an `application/*+json` type.
pub fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Buffers the request body, keeping axum's rejection status (e.g. 413) but
/// rendering it as an [`AppError`].
pub async fn read_body<S>(req: Request, state: &S) -> Result<Bytes, AppError>
where
    S: Send + Sync,
{
    Bytes::from_request(req, state).await.map_err(body_rejection)
}

fn body_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::BadRequest(anyhow!(rejection.body_text()))
    }
}

/// Extractor parsing the body as JSON whatever content type the client declares.
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req, state).await?;
        parse_json(&bytes).map(JsonPayload)
    }
}

/// Extractor requiring a JSON content type and a body that parses into `T`
/// and passes its validation rules.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::BadRequest(anyhow!(JSON_REQUIRED)));
        }

        let bytes = read_body(req, state).await?;

        let value: T = parse_json(&bytes)?;
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
