//! LogoutUserHandler - Command handler for logout.
//!
//! Bearer tokens are stateless, so logout records the presented token in
//! the blacklist until its natural expiry. Already-expired tokens are
//! rejected; there is nothing to revoke.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, Timestamp};
use crate::domain::user::UserError;
use crate::ports::{TokenBlacklist, TokenIssuer};

/// Command to log out.
#[derive(Debug, Clone)]
pub struct LogoutUserCommand {
    pub token: String,
}

/// Result of successful logout.
#[derive(Debug, Clone)]
pub struct LogoutUserResult {
    /// When the revoked token would have expired anyway.
    pub revoked_until: Timestamp,
}

/// Handler for logout.
pub struct LogoutUserHandler {
    token_issuer: Arc<dyn TokenIssuer>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl LogoutUserHandler {
    pub fn new(token_issuer: Arc<dyn TokenIssuer>, blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self {
            token_issuer,
            blacklist,
        }
    }

    pub async fn handle(&self, cmd: LogoutUserCommand) -> Result<LogoutUserResult, UserError> {
        let expires_at = self
            .token_issuer
            .expiry_of(&cmd.token)
            .map_err(|e| UserError::invalid_token(e.to_string()))?;

        if expires_at <= Timestamp::now() {
            return Err(UserError::invalid_token("token already expired"));
        }

        self.blacklist
            .insert(&cmd.token, expires_at)
            .await
            .map_err(|e| match e.code {
                ErrorCode::ValidationFailed => UserError::invalid_token("token already revoked"),
                _ => UserError::infrastructure(e.to_string()),
            })?;

        tracing::info!("Token revoked at logout");

        Ok(LogoutUserResult {
            revoked_until: expires_at,
        })
    }
}
