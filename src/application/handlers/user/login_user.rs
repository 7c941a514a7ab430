//! LoginUserHandler - Command handler for credential login.

use std::sync::Arc;

use crate::domain::user::{PasswordHasher, User, UserError};
use crate::ports::{IssuedToken, TokenIssuer, UserRepository};

/// Command to log in with email and password.
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

/// Result of successful login.
#[derive(Debug, Clone)]
pub struct LoginUserResult {
    pub user: User,
    pub token: IssuedToken,
}

/// Handler for credential login.
///
/// Failures never reveal whether the email or the password was wrong.
pub struct LoginUserHandler {
    users: Arc<dyn UserRepository>,
    token_issuer: Arc<dyn TokenIssuer>,
    hasher: PasswordHasher,
}

impl LoginUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, token_issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            users,
            token_issuer,
            hasher: PasswordHasher::new(),
        }
    }

    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<LoginUserResult, UserError> {
        let user = self
            .users
            .find_by_email(&cmd.email)
            .await
            .map_err(|e| UserError::infrastructure(e.to_string()))?
            .ok_or(UserError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify(&cmd.password, &user.password_hash)
            .map_err(|e| UserError::infrastructure(e.to_string()))?;
        if !matches {
            tracing::warn!(email = %cmd.email, "Failed login attempt");
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .token_issuer
            .issue(&user)
            .map_err(|e| UserError::infrastructure(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginUserResult { user, token })
    }
}
