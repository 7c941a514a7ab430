//! Token blacklist port for logout.
//!
//! Bearer tokens are stateless; logout works by recording the presented
//! token until its natural expiry and rejecting it in the auth middleware.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp};

/// Persistence contract for revoked tokens.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    /// Records a token as revoked until `expires_at`.
    ///
    /// Revoking the same token twice surfaces as a `DomainError`
    /// (unique token constraint), which callers treat as "already
    /// logged out".
    async fn insert(&self, token: &str, expires_at: Timestamp) -> Result<(), DomainError>;

    /// Returns true if the token has been revoked.
    async fn contains(&self, token: &str) -> Result<bool, DomainError>;

    /// Removes entries whose expiry has passed. Returns the number removed.
    async fn purge_expired(&self, now: Timestamp) -> Result<u64, DomainError>;
}
