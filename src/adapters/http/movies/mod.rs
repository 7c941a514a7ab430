//! HTTP adapter for catalog endpoints.
//!
//! - `GET /api/v1/movies` - Public paged listing with search/filter
//! - `GET /api/v1/movies/:id` - Tier-gated detail view
//! - `POST /api/v1/movies` - Create (supervisor/admin)
//! - `PATCH|PUT /api/v1/movies/:id` - Update (supervisor/admin)
//! - `DELETE /api/v1/movies/:id` - Delete (supervisor/admin)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::movie_routes;
