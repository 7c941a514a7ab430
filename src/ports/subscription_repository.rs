//! Subscription repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::subscription::Subscription;

/// Persistence contract for subscription records.
///
/// One record per user (unique user_id). Lookups by session reference
/// are scoped to `Pending` status so completed or cancelled checkouts
/// can never be replayed.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Inserts a new subscription.
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Updates an existing subscription.
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Finds the subscription owned by a user.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Subscription>, DomainError>;

    /// Finds a pending subscription by its checkout reference.
    async fn find_pending_by_session(
        &self,
        session_id: &str,
    ) -> Result<Option<Subscription>, DomainError>;

    /// Finds a pending subscription by owner and checkout reference.
    async fn find_pending_by_user_and_session(
        &self,
        user_id: &UserId,
        session_id: &str,
    ) -> Result<Option<Subscription>, DomainError>;
}
