//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with DTOs, handlers, and routes;
//! `router` assembles them under `/api/v1`.

pub mod auth;
pub mod error;
pub mod middleware;
pub mod movies;
pub mod router;
pub mod state;
pub mod subscriptions;
pub mod wishlists;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
