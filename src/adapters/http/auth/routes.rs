//! Route table for account endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{login, logout, signup, update_preferences};

/// Account routes, mounted at the API root.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/update_preferences", post(update_preferences))
}
