//! Route table for catalog endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{create_movie, delete_movie, get_movie, list_movies, update_movie};

/// Catalog routes, mounted at `/movies`.
pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_movies).post(create_movie))
        .route(
            "/:id",
            get(get_movie)
                .patch(update_movie)
                .put(update_movie)
                .delete(delete_movie),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_build() {
        let _router: Router<AppState> = movie_routes();
    }
}
