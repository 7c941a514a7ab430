//! Mock authentication adapters for testing.
//!
//! These avoid real signing keys: tokens are opaque strings registered
//! up front, and validation is a map lookup.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp};
use crate::domain::user::User;
use crate::ports::{IssuedToken, SessionValidator, TokenIssuer};

/// Token issuer whose tokens are plain strings with a recorded expiry.
#[derive(Default)]
pub struct MockTokenIssuer {
    expiries: Mutex<HashMap<String, Timestamp>>,
}

impl MockTokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token expiring in seven days and returns it.
    pub fn mint(&self, name: &str) -> String {
        let token = format!("mock-{}", name);
        self.expiries
            .lock()
            .unwrap()
            .insert(token.clone(), Timestamp::now().add_days(7));
        token
    }

    /// Registers an already-expired token and returns it.
    pub fn mint_expired(&self, name: &str) -> String {
        let token = format!("mock-{}", name);
        self.expiries
            .lock()
            .unwrap()
            .insert(token.clone(), Timestamp::now().minus_days(1));
        token
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, user: &User) -> Result<IssuedToken, AuthError> {
        let token = format!("mock-token-{}", user.id);
        let expires_at = Timestamp::now().add_days(7);
        self.expiries
            .lock()
            .unwrap()
            .insert(token.clone(), expires_at);
        Ok(IssuedToken { token, expires_at })
    }

    fn expiry_of(&self, token: &str) -> Result<Timestamp, AuthError> {
        self.expiries
            .lock()
            .unwrap()
            .get(token)
            .copied()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Session validator backed by a static token → user map.
#[derive(Default)]
pub struct MockSessionValidator {
    sessions: Mutex<HashMap<String, AuthenticatedUser>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token as belonging to the given user.
    pub fn register(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.sessions.lock().unwrap().insert(token.into(), user);
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.sessions
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, UserId};

    #[tokio::test]
    async fn registered_token_validates() {
        let validator = MockSessionValidator::new();
        let user = AuthenticatedUser::new(UserId::new(), "ada@example.com", Role::User);
        validator.register("tok-1", user.clone());

        let resolved = validator.validate("tok-1").await.unwrap();
        assert_eq!(resolved.id, user.id);

        assert!(validator.validate("tok-2").await.is_err());
    }

    #[test]
    fn minted_tokens_have_expiries() {
        let issuer = MockTokenIssuer::new();
        let live = issuer.mint("live");
        let stale = issuer.mint_expired("stale");

        assert!(issuer.expiry_of(&live).unwrap() > Timestamp::now());
        assert!(issuer.expiry_of(&stale).unwrap() < Timestamp::now());
        assert!(issuer.expiry_of("unknown").is_err());
    }
}
