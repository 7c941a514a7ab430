//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Persistence contract for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    ///
    /// A duplicate email surfaces as a `DomainError` with code
    /// `EmailTaken` (and the email in details), not a database error.
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Updates an existing user.
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Finds a user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Finds a user by email (exact match).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Deletes a user. Subscription and wishlist rows cascade.
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;

    /// Returns the device tokens of every user who opted into push
    /// notifications and registered a device.
    async fn push_targets(&self) -> Result<Vec<String>, DomainError>;
}
