//! HTTP DTOs for wishlist endpoints.

use serde::Serialize;

use crate::adapters::http::movies::dto::MovieResponse;
use crate::domain::movie::Movie;

/// Toggle/remove response.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistToggleResponse {
    pub message: String,
    pub movie_id: String,
    pub is_wishlisted: bool,
}

/// Clear response.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistClearResponse {
    pub message: String,
    pub count: u64,
}

/// A wishlisted movie, flagged as such.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistedMovieResponse {
    #[serde(flatten)]
    pub movie: MovieResponse,
    pub is_wishlisted: bool,
}

impl From<&Movie> for WishlistedMovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            movie: MovieResponse::from(movie),
            is_wishlisted: true,
        }
    }
}

/// Listing response.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistResponse {
    pub movies: Vec<WishlistedMovieResponse>,
}
