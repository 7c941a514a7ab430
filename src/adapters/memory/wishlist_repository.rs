//! In-memory implementation of WishlistRepository.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, MovieId, UserId};
use crate::domain::movie::Movie;
use crate::domain::wishlist::WishlistEntry;
use crate::ports::{MovieRepository, WishlistRepository};

use super::InMemoryMovieRepository;

/// Mutex-backed wishlist store.
///
/// `movies_for` joins against a movie repository when one is attached
/// (via [`with_movies`](Self::with_movies)); without one it returns an
/// empty list, which is enough for toggle/remove/clear tests.
#[derive(Default)]
pub struct InMemoryWishlistRepository {
    entries: Mutex<Vec<WishlistEntry>>,
    movies: Option<Arc<InMemoryMovieRepository>>,
}

impl InMemoryWishlistRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a movie store so `movies_for` can resolve titles.
    pub fn with_movies(movies: Arc<InMemoryMovieRepository>) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            movies: Some(movies),
        }
    }
}

#[async_trait]
impl WishlistRepository for InMemoryWishlistRepository {
    async fn find(
        &self,
        user_id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<WishlistEntry>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.user_id == user_id && &e.movie_id == movie_id)
            .cloned())
    }

    async fn insert(&self, entry: &WishlistEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().unwrap();
        if entries
            .iter()
            .any(|e| e.user_id == entry.user_id && e.movie_id == entry.movie_id)
        {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Pair already wishlisted",
            ));
        }
        entries.push(entry.clone());
        Ok(())
    }

    async fn remove(&self, user_id: &UserId, movie_id: &MovieId) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !(&e.user_id == user_id && &e.movie_id == movie_id));
        Ok(entries.len() < before)
    }

    async fn clear(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| &e.user_id != user_id);
        Ok((before - entries.len()) as u64)
    }

    async fn movies_for(&self, user_id: &UserId) -> Result<Vec<Movie>, DomainError> {
        let mut user_entries: Vec<WishlistEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| &e.user_id == user_id)
            .cloned()
            .collect();
        user_entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let Some(movies) = &self.movies else {
            return Ok(Vec::new());
        };

        let mut result = Vec::with_capacity(user_entries.len());
        for entry in user_entries {
            if let Some(movie) = movies.find_by_id(&entry.movie_id).await? {
                result.push(movie);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_find_remove_round_trip() {
        let repo = InMemoryWishlistRepository::new();
        let user_id = UserId::new();
        let movie_id = MovieId::new();

        repo.insert(&WishlistEntry::new(user_id, movie_id))
            .await
            .unwrap();
        assert!(repo.find(&user_id, &movie_id).await.unwrap().is_some());

        assert!(repo.remove(&user_id, &movie_id).await.unwrap());
        assert!(!repo.remove(&user_id, &movie_id).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_pair_is_rejected() {
        let repo = InMemoryWishlistRepository::new();
        let entry = WishlistEntry::new(UserId::new(), MovieId::new());

        repo.insert(&entry).await.unwrap();
        assert!(repo.insert(&entry).await.is_err());
    }
}
