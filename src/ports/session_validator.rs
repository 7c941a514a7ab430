//! Token issuing and validation ports.
//!
//! Tokens are signed bearer JWTs carrying a user id and expiry. The
//! validator resolves a presented token to an [`AuthenticatedUser`],
//! rejecting revoked (logged-out) tokens; the issuer signs new tokens
//! at signup/login and decodes expiry at logout.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp};
use crate::domain::user::User;

/// A freshly signed bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Validates access tokens and extracts user identity.
///
/// HTTP middleware uses this to resolve Bearer tokens. Implementations
/// must verify the signature, reject expired and revoked tokens, and
/// confirm the user still exists.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validates a token, returning the authenticated user.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

/// Signs tokens for authenticated users.
pub trait TokenIssuer: Send + Sync {
    /// Issues a signed token for the user.
    fn issue(&self, user: &User) -> Result<IssuedToken, AuthError>;

    /// Decodes the expiry claim of a token without consulting the
    /// blacklist. Used at logout to record the revocation window.
    fn expiry_of(&self, token: &str) -> Result<Timestamp, AuthError>;
}
