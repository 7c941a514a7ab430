//! ListMoviesHandler - Query handler for the public catalog listing.

use std::sync::Arc;

use crate::domain::movie::MovieError;
use crate::ports::{MoviePage, MovieQuery, MovieRepository};

/// Query for the paged catalog listing.
#[derive(Debug, Clone, Default)]
pub struct ListMoviesQuery {
    pub filter: MovieQuery,
}

/// Result of the listing query.
#[derive(Debug, Clone)]
pub struct ListMoviesResult {
    pub page: MoviePage,
}

/// Handler for the catalog listing. No auth required.
pub struct ListMoviesHandler {
    movies: Arc<dyn MovieRepository>,
}

impl ListMoviesHandler {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn handle(&self, query: ListMoviesQuery) -> Result<ListMoviesResult, MovieError> {
        let page = self
            .movies
            .search(&query.filter)
            .await
            .map_err(MovieError::from)?;
        Ok(ListMoviesResult { page })
    }
}
