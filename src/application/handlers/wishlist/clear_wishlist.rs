//! ClearWishlistHandler - Command handler for clearing a wishlist.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::wishlist::WishlistError;
use crate::ports::WishlistRepository;

/// Command to clear the caller's wishlist.
#[derive(Debug, Clone)]
pub struct ClearWishlistCommand {
    pub user_id: UserId,
}

/// Result of clearing.
#[derive(Debug, Clone)]
pub struct ClearWishlistResult {
    /// How many entries were removed.
    pub removed: u64,
}

/// Handler for clearing a wishlist. Clearing an empty wishlist succeeds
/// with a count of zero.
pub struct ClearWishlistHandler {
    wishlists: Arc<dyn WishlistRepository>,
}

impl ClearWishlistHandler {
    pub fn new(wishlists: Arc<dyn WishlistRepository>) -> Self {
        Self { wishlists }
    }

    pub async fn handle(
        &self,
        cmd: ClearWishlistCommand,
    ) -> Result<ClearWishlistResult, WishlistError> {
        let removed = self
            .wishlists
            .clear(&cmd.user_id)
            .await
            .map_err(WishlistError::from)?;

        tracing::info!(user_id = %cmd.user_id, removed, "Wishlist cleared");

        Ok(ClearWishlistResult { removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWishlistRepository;
    use crate::domain::foundation::MovieId;
    use crate::domain::wishlist::WishlistEntry;
    use crate::ports::WishlistRepository as _;

    #[tokio::test]
    async fn clears_all_entries_for_the_user_only() {
        let wishlists = Arc::new(InMemoryWishlistRepository::new());
        let alice = UserId::new();
        let bob = UserId::new();
        for _ in 0..3 {
            wishlists
                .insert(&WishlistEntry::new(alice, MovieId::new()))
                .await
                .unwrap();
        }
        wishlists
            .insert(&WishlistEntry::new(bob, MovieId::new()))
            .await
            .unwrap();

        let handler = ClearWishlistHandler::new(wishlists.clone());
        let result = handler
            .handle(ClearWishlistCommand { user_id: alice })
            .await
            .unwrap();

        assert_eq!(result.removed, 3);
        assert_eq!(wishlists.clear(&bob).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn clearing_an_empty_wishlist_returns_zero() {
        let wishlists = Arc::new(InMemoryWishlistRepository::new());
        let handler = ClearWishlistHandler::new(wishlists);

        let result = handler
            .handle(ClearWishlistCommand {
                user_id: UserId::new(),
            })
            .await
            .unwrap();

        assert_eq!(result.removed, 0);
    }
}
