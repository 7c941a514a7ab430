//! JWT token service.
//!
//! Issues HS256 bearer tokens carrying the user id and expiry, and
//! validates presented tokens against the signature, the clock, the
//! logout blacklist, and the user table (so deleted accounts and role
//! changes take effect immediately).

use std::str::FromStr;
use std::sync::Arc;

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp, UserId};
use crate::domain::user::User;
use crate::ports::{IssuedToken, SessionValidator, TokenBlacklist, TokenIssuer, UserRepository};

/// Token lifetime: seven days, as issued at signup/login.
const TOKEN_TTL_DAYS: i64 = 7;

/// JWT signing configuration.
#[derive(Clone)]
pub struct JwtConfig {
    secret: SecretString,
    ttl_days: i64,
}

impl JwtConfig {
    /// Creates a config with the default seven-day lifetime.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            ttl_days: TOKEN_TTL_DAYS,
        }
    }

    /// Overrides the token lifetime (tests use negative values to mint
    /// already-expired tokens).
    pub fn with_ttl_days(mut self, ttl_days: i64) -> Self {
        self.ttl_days = ttl_days;
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id.
    sub: String,
    /// Expiry, Unix seconds.
    exp: i64,
    /// Issued at, Unix seconds.
    iat: i64,
}

/// Issues and validates HS256 bearer tokens.
pub struct JwtTokenService {
    config: JwtConfig,
    users: Arc<dyn UserRepository>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl JwtTokenService {
    pub fn new(
        config: JwtConfig,
        users: Arc<dyn UserRepository>,
        blacklist: Arc<dyn TokenBlacklist>,
    ) -> Self {
        Self {
            config,
            users,
            blacklist,
        }
    }

    fn decode_claims(&self, token: &str, validate_exp: bool) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.validate_exp = validate_exp;
        validation.required_spec_claims.clear();

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, user: &User) -> Result<IssuedToken, AuthError> {
        let now = Timestamp::now();
        let expires_at = now.add_days(self.config.ttl_days);
        let claims = Claims {
            sub: user.id.to_string(),
            exp: expires_at.as_unix_secs(),
            iat: now.as_unix_secs(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| AuthError::service_unavailable(format!("Token signing failed: {}", e)))?;

        Ok(IssuedToken { token, expires_at })
    }

    fn expiry_of(&self, token: &str) -> Result<Timestamp, AuthError> {
        let claims = self.decode_claims(token, false)?;
        Ok(Timestamp::from_unix_secs(claims.exp))
    }
}

#[async_trait::async_trait]
impl SessionValidator for JwtTokenService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token, true)?;

        let revoked = self
            .blacklist
            .contains(token)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;
        if revoked {
            return Err(AuthError::TokenRevoked);
        }

        let user_id = UserId::from_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;
        let user = self
            .users
            .find_by_id(&user_id)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthenticatedUser::new(user.id, user.email, user.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryTokenBlacklist, InMemoryUserRepository};
    use crate::domain::user::Registration;
    use crate::ports::TokenBlacklist as _;
    use crate::ports::UserRepository as _;

    async fn seed_user(users: &InMemoryUserRepository) -> User {
        let registration = Registration {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "s3cret!".to_string(),
            mobile_number: "5551234567".to_string(),
        };
        let user = User::register(UserId::new(), &registration, "hash".to_string());
        users.save(&user).await.unwrap();
        user
    }

    fn service(
        users: Arc<InMemoryUserRepository>,
        blacklist: Arc<InMemoryTokenBlacklist>,
    ) -> JwtTokenService {
        JwtTokenService::new(JwtConfig::new("test-secret-key"), users, blacklist)
    }

    #[tokio::test]
    async fn issue_then_validate_round_trips() {
        let users = Arc::new(InMemoryUserRepository::new());
        let blacklist = Arc::new(InMemoryTokenBlacklist::new());
        let user = seed_user(&users).await;

        let svc = service(users, blacklist);
        let issued = svc.issue(&user).unwrap();
        let authenticated = svc.validate(&issued.token).await.unwrap();

        assert_eq!(authenticated.id, user.id);
        assert_eq!(authenticated.email, user.email);
        assert_eq!(authenticated.role, user.role);
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() {
        let users = Arc::new(InMemoryUserRepository::new());
        let blacklist = Arc::new(InMemoryTokenBlacklist::new());
        let user = seed_user(&users).await;

        let svc = service(users, blacklist.clone());
        let issued = svc.issue(&user).unwrap();
        blacklist
            .insert(&issued.token, issued.expires_at)
            .await
            .unwrap();

        let err = svc.validate(&issued.token).await.unwrap_err();
        assert!(matches!(err, AuthError::TokenRevoked));
    }

    #[tokio::test]
    async fn expired_token_is_rejected_but_expiry_is_still_readable() {
        let users = Arc::new(InMemoryUserRepository::new());
        let blacklist = Arc::new(InMemoryTokenBlacklist::new());
        let user = seed_user(&users).await;

        let svc = JwtTokenService::new(
            JwtConfig::new("test-secret-key").with_ttl_days(-1),
            users,
            blacklist,
        );
        let issued = svc.issue(&user).unwrap();

        let err = svc.validate(&issued.token).await.unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));

        // Logout still needs to read the exp claim off expired tokens.
        assert_eq!(svc.expiry_of(&issued.token).unwrap(), issued.expires_at);
    }

    #[tokio::test]
    async fn token_signed_with_another_secret_is_rejected() {
        let users = Arc::new(InMemoryUserRepository::new());
        let blacklist = Arc::new(InMemoryTokenBlacklist::new());
        let user = seed_user(&users).await;

        let other = JwtTokenService::new(
            JwtConfig::new("other-secret"),
            users.clone(),
            blacklist.clone(),
        );
        let issued = other.issue(&user).unwrap();

        let svc = service(users, blacklist);
        let err = svc.validate(&issued.token).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn token_for_a_deleted_user_is_rejected() {
        let users = Arc::new(InMemoryUserRepository::new());
        let blacklist = Arc::new(InMemoryTokenBlacklist::new());
        let user = seed_user(&users).await;

        let svc = service(users.clone(), blacklist);
        let issued = svc.issue(&user).unwrap();
        users.delete(&user.id).await.unwrap();

        let err = svc.validate(&issued.token).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }
}
