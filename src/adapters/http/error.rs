//! HTTP error envelope.
//!
//! Translates domain errors into status codes and the JSON error body:
//! `{"error": "..."}` for single failures, `{"errors": [...]}` for
//! validation lists. Infrastructure details never leak to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::foundation::ErrorCode;
use crate::domain::movie::MovieError;
use crate::domain::subscription::SubscriptionError;
use crate::domain::user::UserError;
use crate::domain::wishlist::WishlistError;

/// An error ready to render as an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: serde_json::Value,
}

impl ApiError {
    /// Single-message error with an explicit status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    /// Field-error list (422).
    pub fn validation(messages: Vec<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: json!({ "errors": messages }),
        }
    }

    /// Opaque 500 for unexpected failures.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    /// Returns the response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Maps a domain error code to an HTTP status.
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::InvalidFormat
        | ErrorCode::EmailTaken
        | ErrorCode::InvalidStateTransition
        | ErrorCode::PaymentNotCompleted => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::UserNotFound
        | ErrorCode::MovieNotFound
        | ErrorCode::SubscriptionNotFound
        | ErrorCode::WishlistEntryNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::PaymentProviderError | ErrorCode::PushGatewayError => StatusCode::BAD_GATEWAY,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn from_code(code: ErrorCode, message: String) -> ApiError {
    let status = status_for(code);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = %code, %message, "Internal error");
        ApiError::internal()
    } else {
        ApiError::new(status, message)
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match &err {
            UserError::Validation(errors) => {
                ApiError::validation(errors.iter().map(|e| e.to_string()).collect())
            }
            _ => from_code(err.code(), err.to_string()),
        }
    }
}

impl From<SubscriptionError> for ApiError {
    fn from(err: SubscriptionError) -> Self {
        from_code(err.code(), err.to_string())
    }
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match &err {
            MovieError::Validation(errors) => {
                ApiError::validation(errors.iter().map(|e| e.to_string()).collect())
            }
            _ => from_code(err.code(), err.to_string()),
        }
    }
}

impl From<WishlistError> for ApiError {
    fn from(err: WishlistError) -> Self {
        from_code(err.code(), err.to_string())
    }
}
