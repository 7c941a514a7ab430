//! HTTP adapter for wishlist endpoints.
//!
//! - `GET /api/v1/wishlists` - The caller's wishlisted movies
//! - `POST /api/v1/wishlists/:movie_id` - Toggle a movie
//! - `DELETE /api/v1/wishlists/:movie_id` - Remove a movie
//! - `DELETE /api/v1/wishlists` - Clear the wishlist

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::wishlist_routes;
