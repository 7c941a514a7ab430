//! Movie repository port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, MovieId};
use crate::domain::movie::Movie;

/// Catalog page size, matching the original listing.
pub const PAGE_SIZE: u32 = 12;

/// Search and filter parameters for the catalog listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieQuery {
    /// Case-insensitive title substring.
    pub search: Option<String>,

    /// Exact genre match.
    pub genre: Option<String>,

    /// 1-based page number. Zero or missing means page 1.
    pub page: Option<u32>,
}

impl MovieQuery {
    /// Returns the effective 1-based page number.
    pub fn page_number(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Persistence contract for catalog movies.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Inserts a new movie.
    async fn save(&self, movie: &Movie) -> Result<(), DomainError>;

    /// Updates an existing movie.
    async fn update(&self, movie: &Movie) -> Result<(), DomainError>;

    /// Finds a movie by id.
    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, DomainError>;

    /// Deletes a movie. Wishlist rows referencing it cascade.
    async fn delete(&self, id: &MovieId) -> Result<(), DomainError>;

    /// Searches the catalog with paging.
    async fn search(&self, query: &MovieQuery) -> Result<MoviePage, DomainError>;
}
