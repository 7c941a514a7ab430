//! RemoveFromWishlistHandler - Command handler for explicit removal.

use std::sync::Arc;

use crate::domain::foundation::{MovieId, UserId};
use crate::domain::wishlist::WishlistError;
use crate::ports::WishlistRepository;

/// Command to remove a movie from the caller's wishlist.
#[derive(Debug, Clone)]
pub struct RemoveFromWishlistCommand {
    pub user_id: UserId,
    pub movie_id: MovieId,
}

/// Result of removal.
#[derive(Debug, Clone)]
pub struct RemoveFromWishlistResult {
    pub movie_id: MovieId,
}

/// Handler for explicit wishlist removal.
pub struct RemoveFromWishlistHandler {
    wishlists: Arc<dyn WishlistRepository>,
}

impl RemoveFromWishlistHandler {
    pub fn new(wishlists: Arc<dyn WishlistRepository>) -> Self {
        Self { wishlists }
    }

    pub async fn handle(
        &self,
        cmd: RemoveFromWishlistCommand,
    ) -> Result<RemoveFromWishlistResult, WishlistError> {
        let removed = self
            .wishlists
            .remove(&cmd.user_id, &cmd.movie_id)
            .await
            .map_err(WishlistError::from)?;

        if !removed {
            return Err(WishlistError::not_in_wishlist(cmd.movie_id));
        }

        Ok(RemoveFromWishlistResult {
            movie_id: cmd.movie_id,
        })
    }
}
