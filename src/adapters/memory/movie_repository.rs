//! In-memory implementation of MovieRepository.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, MovieId};
use crate::domain::movie::Movie;
use crate::ports::{MoviePage, MovieQuery, MovieRepository, PAGE_SIZE};

/// Mutex-backed movie store with the same search semantics as the
/// postgres adapter (ILIKE title substring, exact genre, pages of 12).
#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: Mutex<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn save(&self, movie: &Movie) -> Result<(), DomainError> {
        self.movies.lock().unwrap().push(movie.clone());
        Ok(())
    }

    async fn update(&self, movie: &Movie) -> Result<(), DomainError> {
        let mut movies = self.movies.lock().unwrap();
        match movies.iter_mut().find(|m| m.id == movie.id) {
            Some(slot) => {
                *slot = movie.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::MovieNotFound,
                format!("Movie {} not found", movie.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, DomainError> {
        Ok(self
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| &m.id == id)
            .cloned())
    }

    async fn delete(&self, id: &MovieId) -> Result<(), DomainError> {
        self.movies.lock().unwrap().retain(|m| &m.id != id);
        Ok(())
    }

    async fn search(&self, query: &MovieQuery) -> Result<MoviePage, DomainError> {
        let movies = self.movies.lock().unwrap();

        let needle = query.search.as_ref().map(|s| s.to_lowercase());
        let matching: Vec<Movie> = movies
            .iter()
            .filter(|m| {
                needle
                    .as_ref()
                    .map(|n| m.title.to_lowercase().contains(n))
                    .unwrap_or(true)
            })
            .filter(|m| {
                query
                    .genre
                    .as_ref()
                    .map(|g| &m.genre == g)
                    .unwrap_or(true)
            })
            .cloned()
            .collect();

        let total = matching.len() as u32;
        let total_pages = (total + PAGE_SIZE - 1) / PAGE_SIZE;
        let current_page = query.page_number();
        let offset = ((current_page - 1) * PAGE_SIZE) as usize;
        let page_movies = matching
            .into_iter()
            .skip(offset)
            .take(PAGE_SIZE as usize)
            .collect();

        Ok(MoviePage {
            movies: page_movies,
            total_pages,
            current_page,
        })
    }
}
