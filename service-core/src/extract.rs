//! Request extractors shared by the services.

use crate::error::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::{HeaderMap, StatusCode, header},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON body extractor whose rejections render as [`AppError`].
///
/// The whole body must be a single JSON document: trailing bytes after the
/// top-level value are rejected. Duplicate object keys keep the last value.
/// Every malformed body (missing content type, bad syntax, missing or
/// mistyped field) is reported as a 422 validation error carrying the
/// deserializer's diagnostic. Bodies over the configured limit stay 413.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            tracing::debug!("Rejected body without JSON content type");
            return Err(AppError::ValidationError(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        let bytes = Bytes::from_request(req, state).await?;
        parse_body(&bytes).map(Self)
    }
}

/// Decode a complete JSON document into `T`.
///
/// The document is read into a [`Value`] first so that `from_slice` checks
/// for trailing characters and repeated keys collapse to the last one.
fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed JSON body");
        AppError::ValidationError(format!("Failed to parse the request body as JSON: {}", e))
    })?;

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "Rejected JSON body with wrong shape");
        AppError::ValidationError(format!(
            "Failed to deserialize the JSON body into the target type: {}",
            e
        ))
    })
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        let diagnostic = rejection.body_text();
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            tracing::debug!(%diagnostic, "Request body exceeded limit");
            AppError::PayloadTooLarge(diagnostic)
        } else {
            tracing::debug!(%diagnostic, "Failed to read request body");
            AppError::ValidationError(diagnostic)
        }
    }
}
