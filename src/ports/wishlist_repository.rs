//! Wishlist repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MovieId, UserId};
use crate::domain::movie::Movie;
use crate::domain::wishlist::WishlistEntry;

/// Persistence contract for wishlist pairs.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Finds the entry for a (user, movie) pair.
    async fn find(
        &self,
        user_id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<WishlistEntry>, DomainError>;

    /// Inserts an entry. The (user, movie) pair is unique.
    async fn insert(&self, entry: &WishlistEntry) -> Result<(), DomainError>;

    /// Removes the entry for a pair. Returns true if a row was removed.
    async fn remove(&self, user_id: &UserId, movie_id: &MovieId) -> Result<bool, DomainError>;

    /// Removes every entry for a user. Returns the number removed.
    async fn clear(&self, user_id: &UserId) -> Result<u64, DomainError>;

    /// Returns the movies on a user's wishlist, newest first.
    async fn movies_for(&self, user_id: &UserId) -> Result<Vec<Movie>, DomainError>;
}
