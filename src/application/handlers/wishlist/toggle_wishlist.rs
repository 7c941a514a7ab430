//! ToggleWishlistHandler - Command handler for the wishlist toggle.
//!
//! Adding a movie that is already wishlisted removes it instead.

use std::sync::Arc;

use crate::domain::foundation::{MovieId, UserId};
use crate::domain::wishlist::{ToggleOutcome, WishlistEntry, WishlistError};
use crate::ports::{MovieRepository, WishlistRepository};

/// Command to toggle a movie on the caller's wishlist.
#[derive(Debug, Clone)]
pub struct ToggleWishlistCommand {
    pub user_id: UserId,
    pub movie_id: MovieId,
}

/// Result of the toggle.
#[derive(Debug, Clone)]
pub struct ToggleWishlistResult {
    pub movie_id: MovieId,
    pub outcome: ToggleOutcome,
}

/// Handler for the wishlist toggle.
pub struct ToggleWishlistHandler {
    wishlists: Arc<dyn WishlistRepository>,
    movies: Arc<dyn MovieRepository>,
}

impl ToggleWishlistHandler {
    pub fn new(wishlists: Arc<dyn WishlistRepository>, movies: Arc<dyn MovieRepository>) -> Self {
        Self { wishlists, movies }
    }

    pub async fn handle(
        &self,
        cmd: ToggleWishlistCommand,
    ) -> Result<ToggleWishlistResult, WishlistError> {
        if self
            .movies
            .find_by_id(&cmd.movie_id)
            .await
            .map_err(WishlistError::from)?
            .is_none()
        {
            return Err(WishlistError::movie_not_found(cmd.movie_id));
        }

        let existing = self
            .wishlists
            .find(&cmd.user_id, &cmd.movie_id)
            .await
            .map_err(WishlistError::from)?;

        let outcome = match existing {
            Some(_) => {
                self.wishlists
                    .remove(&cmd.user_id, &cmd.movie_id)
                    .await
                    .map_err(WishlistError::from)?;
                ToggleOutcome::Removed
            }
            None => {
                let entry = WishlistEntry::new(cmd.user_id, cmd.movie_id);
                self.wishlists
                    .insert(&entry)
                    .await
                    .map_err(WishlistError::from)?;
                ToggleOutcome::Added
            }
        };

        tracing::info!(
            user_id = %cmd.user_id,
            movie_id = %cmd.movie_id,
            wishlisted = outcome.is_wishlisted(),
            "Wishlist toggled"
        );

        Ok(ToggleWishlistResult {
            movie_id: cmd.movie_id,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryMovieRepository, InMemoryWishlistRepository};
    use crate::domain::movie::{Movie, MovieDraft};
    use crate::domain::subscription::Plan;
    use crate::ports::MovieRepository as _;

    async fn seed_movie(movies: &InMemoryMovieRepository) -> MovieId {
        let movie = Movie::create(
            MovieId::new(),
            MovieDraft {
                title: "Heat".to_string(),
                genre: "Crime".to_string(),
                release_year: 1995,
                rating: 8.3,
                director: "Michael Mann".to_string(),
                duration_minutes: 170,
                description: "A crew of thieves and the cop chasing them.".to_string(),
                plan: Plan::Basic,
                poster_url: None,
                banner_url: None,
            },
        );
        movies.save(&movie).await.unwrap();
        movie.id
    }

    #[tokio::test]
    async fn toggle_adds_then_removes_then_adds_again() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let wishlists = Arc::new(InMemoryWishlistRepository::new());
        let movie_id = seed_movie(&movies).await;
        let user_id = UserId::new();

        let handler = ToggleWishlistHandler::new(wishlists, movies);
        let cmd = ToggleWishlistCommand { user_id, movie_id };

        let first = handler.handle(cmd.clone()).await.unwrap();
        assert_eq!(first.outcome, ToggleOutcome::Added);

        let second = handler.handle(cmd.clone()).await.unwrap();
        assert_eq!(second.outcome, ToggleOutcome::Removed);

        let third = handler.handle(cmd).await.unwrap();
        assert_eq!(third.outcome, ToggleOutcome::Added);
    }

    #[tokio::test]
    async fn unknown_movie_fails_with_not_found() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let wishlists = Arc::new(InMemoryWishlistRepository::new());

        let handler = ToggleWishlistHandler::new(wishlists, movies);
        let err = handler
            .handle(ToggleWishlistCommand {
                user_id: UserId::new(),
                movie_id: MovieId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, WishlistError::MovieNotFound(_)));
    }

    #[tokio::test]
    async fn toggles_are_scoped_per_user() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let wishlists = Arc::new(InMemoryWishlistRepository::new());
        let movie_id = seed_movie(&movies).await;

        let handler = ToggleWishlistHandler::new(wishlists, movies);
        let alice = UserId::new();
        let bob = UserId::new();

        let a = handler
            .handle(ToggleWishlistCommand {
                user_id: alice,
                movie_id,
            })
            .await
            .unwrap();
        let b = handler
            .handle(ToggleWishlistCommand {
                user_id: bob,
                movie_id,
            })
            .await
            .unwrap();

        // Bob's add is independent of Alice's.
        assert_eq!(a.outcome, ToggleOutcome::Added);
        assert_eq!(b.outcome, ToggleOutcome::Added);
    }
}
