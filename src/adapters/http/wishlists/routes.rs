//! Route table for wishlist endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{clear_wishlist, list_wishlist, remove_from_wishlist, toggle_wishlist};

/// Wishlist routes, mounted at `/wishlists`.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlist).delete(clear_wishlist))
        .route("/:movie_id", post(toggle_wishlist).delete(remove_from_wishlist))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_build() {
        let _router: Router<AppState> = wishlist_routes();
    }
}
