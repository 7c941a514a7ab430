//! User-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// User account errors.
#[derive(Debug, Clone)]
pub enum UserError {
    /// No account with this id.
    NotFound(UserId),

    /// An account with this email already exists.
    EmailTaken(String),

    /// Email or password did not match.
    InvalidCredentials,

    /// Registration or preference input failed validation.
    Validation(Vec<ValidationError>),

    /// Token presented at logout was invalid or already expired.
    InvalidToken(String),

    /// Infrastructure error.
    Infrastructure(String),
}

impl UserError {
    pub fn not_found(id: UserId) -> Self {
        UserError::NotFound(id)
    }

    pub fn email_taken(email: impl Into<String>) -> Self {
        UserError::EmailTaken(email.into())
    }

    pub fn validation(errors: Vec<ValidationError>) -> Self {
        UserError::Validation(errors)
    }

    pub fn invalid_token(reason: impl Into<String>) -> Self {
        UserError::InvalidToken(reason.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::EmailTaken(_) => ErrorCode::EmailTaken,
            UserError::InvalidCredentials => ErrorCode::Unauthorized,
            UserError::Validation(_) => ErrorCode::ValidationFailed,
            UserError::InvalidToken(_) => ErrorCode::Unauthorized,
            UserError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserError::NotFound(id) => write!(f, "User {} not found", id),
            UserError::EmailTaken(email) => write!(f, "Email {} is already registered", email),
            UserError::InvalidCredentials => write!(f, "Invalid email or password"),
            UserError::Validation(errors) => {
                let joined = errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Validation failed: {}", joined)
            }
            UserError::InvalidToken(reason) => write!(f, "Invalid token: {}", reason),
            UserError::Infrastructure(message) => write!(f, "Infrastructure error: {}", message),
        }
    }
}

impl std::error::Error for UserError {}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::UserNotFound => {
                UserError::Infrastructure(err.message)
            }
            ErrorCode::EmailTaken => UserError::EmailTaken(
                err.details.get("email").cloned().unwrap_or_default(),
            ),
            _ => UserError::Infrastructure(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_expected_categories() {
        assert_eq!(UserError::InvalidCredentials.code(), ErrorCode::Unauthorized);
        assert_eq!(
            UserError::email_taken("a@b.c").code(),
            ErrorCode::EmailTaken
        );
        assert_eq!(
            UserError::validation(vec![]).code(),
            ErrorCode::ValidationFailed
        );
    }

    #[test]
    fn validation_display_joins_errors() {
        let err = UserError::validation(vec![
            ValidationError::empty_field("first_name"),
            ValidationError::too_short("password", 6, 3),
        ]);
        let text = err.to_string();
        assert!(text.contains("first_name"));
        assert!(text.contains("password"));
    }
}
