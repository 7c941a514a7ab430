//! API router assembly.

use std::time::Duration;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::auth::auth_routes;
use super::middleware::{auth_middleware, AuthState};
use super::movies::movie_routes;
use super::state::AppState;
use super::subscriptions::subscription_routes;
use super::wishlists::wishlist_routes;

/// Builds the full API router.
///
/// All routes live under `/api/v1`. The auth middleware runs on every
/// request; routes that need a user enforce it with `RequireAuth`.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let validator: AuthState = state.session_validator.clone();

    let api = Router::new()
        .merge(auth_routes())
        .nest("/movies", movie_routes())
        .nest("/subscriptions", subscription_routes())
        .nest("/wishlists", wishlist_routes());

    Router::new()
        .nest("/api/v1", api)
        .layer(middleware::from_fn_with_state(validator, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
