//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Extract the untrusted user payload from the request body
//!
//! # Design Decisions
//! - Request ID added as early as possible so every log line can carry it
//! - Bodies not declared as JSON are treated as an empty object, so they
//!   fail validation with "All fields are required" rather than a parse error
//! - An empty JSON body, an array or a scalar is also an empty object
//! - Duplicate keys keep the last value

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, HeaderValue, StatusCode},
};
use serde_json::Value;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::response::ApiError;
use crate::users::UserPayload;

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Produces a fresh UUID v4 request id.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Extractor for the body of `POST /user` and `PUT /user/{id}`.
#[derive(Debug, Clone, Default)]
pub struct UserJson(pub UserPayload);

impl<S> FromRequest<S> for UserJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(is_json_content_type)
            .unwrap_or(false);

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::InvalidBody
            }
        })?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(UserPayload::default()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejected malformed user payload");
            ApiError::InvalidBody
        })?;

        // Arrays and scalars carry no named fields.
        if !value.is_object() {
            return Ok(Self(UserPayload::default()));
        }

        serde_json::from_value(value).map(Self).map_err(|e| {
            tracing::debug!(error = %e, "Rejected user payload with non-string field");
            ApiError::InvalidBody
        })
    }
}

/// The `{id}` segment of `/users/{id}` and `/user/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| Self(id))
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected user id");
                ApiError::InvalidUserId
            })
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
        || mime.to_ascii_lowercase().ends_with("+json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/user");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_json_payload() {
        let req = request(
            Some("application/json; charset=utf-8"),
            r#"{"firstName":"Jane","lastName":"Doe","hobby":"Chess"}"#,
        );
        let UserJson(payload) = UserJson::from_request(req, &()).await.unwrap();
        assert_eq!(payload.first_name.as_deref(), Some("Jane"));
        assert_eq!(payload.hobby.as_deref(), Some("Chess"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_empty_payload() {
        let req = request(Some("text/plain"), "firstName=Jane");
        let UserJson(payload) = UserJson::from_request(req, &()).await.unwrap();
        assert!(payload.first_name.is_none());

        let req = request(None, r#"{"firstName":"Jane"}"#);
        let UserJson(payload) = UserJson::from_request(req, &()).await.unwrap();
        assert!(payload.first_name.is_none());
    }

    #[tokio::test]
    async fn test_empty_json_body_is_empty_payload() {
        let req = request(Some("application/json"), "");
        let UserJson(payload) = UserJson::from_request(req, &()).await.unwrap();
        assert!(payload.last_name.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let req = request(Some("application/json"), "{not json");
        let err = UserJson::from_request(req, &()).await.unwrap_err();
        assert_eq!(err, ApiError::InvalidBody);

        let req = request(Some("application/json"), r#"{"firstName":7}"#);
        let err = UserJson::from_request(req, &()).await.unwrap_err();
        assert_eq!(err, ApiError::InvalidBody);
    }

    #[tokio::test]
    async fn test_array_body_has_no_fields() {
        let req = request(Some("application/json"), r#"["Jane","Doe","Chess"]"#);
        let UserJson(payload) = UserJson::from_request(req, &()).await.unwrap();
        assert!(payload.first_name.is_none());
        assert!(payload.last_name.is_none());
        assert!(payload.hobby.is_none());

        let req = request(Some("application/json"), "42");
        let UserJson(payload) = UserJson::from_request(req, &()).await.unwrap();
        assert!(payload.hobby.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_keys_keep_last_value() {
        let req = request(
            Some("application/json"),
            r#"{"firstName":"Jo","firstName":"Jane","lastName":"Doe","hobby":"Chess"}"#,
        );
        let UserJson(payload) = UserJson::from_request(req, &()).await.unwrap();
        assert_eq!(payload.first_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let mut maker = UuidRequestId;
        let req = axum::http::Request::new(());
        let a = maker.make_request_id(&req).unwrap();
        let b = maker.make_request_id(&req).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
