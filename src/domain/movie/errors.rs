//! Movie-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, MovieId, ValidationError};

/// Movie catalog errors.
#[derive(Debug, Clone)]
pub enum MovieError {
    /// No movie with this id.
    NotFound(MovieId),

    /// Draft failed validation.
    Validation(Vec<ValidationError>),

    /// Actor may not perform this catalog operation or view this title.
    AccessDenied { reason: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl MovieError {
    pub fn not_found(id: MovieId) -> Self {
        MovieError::NotFound(id)
    }

    pub fn validation(errors: Vec<ValidationError>) -> Self {
        MovieError::Validation(errors)
    }

    pub fn access_denied(reason: impl Into<String>) -> Self {
        MovieError::AccessDenied {
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MovieError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MovieError::NotFound(_) => ErrorCode::MovieNotFound,
            MovieError::Validation(_) => ErrorCode::ValidationFailed,
            MovieError::AccessDenied { .. } => ErrorCode::Forbidden,
            MovieError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl std::fmt::Display for MovieError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieError::NotFound(id) => write!(f, "Movie {} not found", id),
            MovieError::Validation(errors) => {
                let joined = errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Validation failed: {}", joined)
            }
            MovieError::AccessDenied { reason } => write!(f, "Access denied: {}", reason),
            MovieError::Infrastructure(message) => write!(f, "Infrastructure error: {}", message),
        }
    }
}

impl std::error::Error for MovieError {}

impl From<DomainError> for MovieError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => MovieError::access_denied(err.message),
            _ => MovieError::Infrastructure(err.message),
        }
    }
}
