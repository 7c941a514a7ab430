//! ListWishlistHandler - Query handler for a user's wishlisted movies.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::movie::Movie;
use crate::domain::wishlist::WishlistError;
use crate::ports::WishlistRepository;

/// Query for the caller's wishlist.
#[derive(Debug, Clone)]
pub struct ListWishlistQuery {
    pub user_id: UserId,
}

/// Result of the wishlist query.
#[derive(Debug, Clone)]
pub struct ListWishlistResult {
    pub movies: Vec<Movie>,
}

/// Handler for listing wishlisted movies.
pub struct ListWishlistHandler {
    wishlists: Arc<dyn WishlistRepository>,
}

impl ListWishlistHandler {
    pub fn new(wishlists: Arc<dyn WishlistRepository>) -> Self {
        Self { wishlists }
    }

    pub async fn handle(
        &self,
        query: ListWishlistQuery,
    ) -> Result<ListWishlistResult, WishlistError> {
        let movies = self
            .wishlists
            .movies_for(&query.user_id)
            .await
            .map_err(WishlistError::from)?;
        Ok(ListWishlistResult { movies })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryMovieRepository, InMemoryWishlistRepository};
    use crate::domain::foundation::MovieId;
    use crate::domain::movie::MovieDraft;
    use crate::domain::subscription::Plan;
    use crate::domain::wishlist::WishlistEntry;
    use crate::ports::{MovieRepository as _, WishlistRepository as _};

    #[tokio::test]
    async fn lists_only_the_users_movies() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let wishlists = Arc::new(InMemoryWishlistRepository::with_movies(movies.clone()));

        let movie = crate::domain::movie::Movie::create(
            MovieId::new(),
            MovieDraft {
                title: "Heat".to_string(),
                genre: "Crime".to_string(),
                release_year: 1995,
                rating: 8.3,
                director: "Michael Mann".to_string(),
                duration_minutes: 170,
                description: "Thieves and the cop chasing them.".to_string(),
                plan: Plan::Basic,
                poster_url: None,
                banner_url: None,
            },
        );
        movies.save(&movie).await.unwrap();

        let alice = UserId::new();
        wishlists
            .insert(&WishlistEntry::new(alice, movie.id))
            .await
            .unwrap();

        let handler = ListWishlistHandler::new(wishlists);
        let result = handler
            .handle(ListWishlistQuery { user_id: alice })
            .await
            .unwrap();
        assert_eq!(result.movies.len(), 1);
        assert_eq!(result.movies[0].title, "Heat");

        let handler_empty = ListWishlistHandler::new(Arc::new(InMemoryWishlistRepository::new()));
        let empty = handler_empty
            .handle(ListWishlistQuery {
                user_id: UserId::new(),
            })
            .await
            .unwrap();
        assert!(empty.movies.is_empty());
    }
}
