//! Response bodies and error mapping.
//!
//! # Responsibilities
//! - Define the JSON shapes returned to clients
//! - Map every handler failure to a status code and `{error}` body
//!
//! # Design Decisions
//! - Errors stop at the handler boundary; nothing escapes as a 500
//! - The error's display text is the client-facing message

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::users::{StoreError, User, ValidationError};

pub const USER_ADDED: &str = "User added successfully";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_REMOVED: &str = "User removed successfully";

/// Failures surfaced by the user API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid JSON body")]
    InvalidBody,

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Invalid route")]
    InvalidRoute,

    #[error("Invalid user id")]
    InvalidUserId,

    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Duplicate) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InvalidRoute => StatusCode::NOT_FOUND,
            ApiError::InvalidUserId => StatusCode::BAD_REQUEST,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Success body for write operations.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl MessageBody {
    pub fn with_user(message: &'static str, user: User) -> Self {
        Self {
            message,
            user: Some(user),
        }
    }

    pub fn bare(message: &'static str) -> Self {
        Self { message, user: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(ValidationError::HobbyLength).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::Duplicate).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::InvalidRoute.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidUserId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Timeout.status_code(), StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_messages_pass_through() {
        assert_eq!(
            ApiError::from(StoreError::Duplicate).to_string(),
            "User with the same first and last name already exists"
        );
        assert_eq!(ApiError::from(StoreError::NotFound).to_string(), "User not found");
        assert_eq!(
            ApiError::from(ValidationError::InvalidCharacters).to_string(),
            "Names must contain only alphabets"
        );
    }

    #[test]
    fn test_bare_message_omits_user() {
        let json = serde_json::to_value(MessageBody::bare(USER_REMOVED)).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "User removed successfully" }));
    }
}
