//! HTTP handlers for wishlist endpoints.

use std::str::FromStr;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::wishlist::{
    ClearWishlistCommand, ListWishlistQuery, RemoveFromWishlistCommand, ToggleWishlistCommand,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::MovieId;

use super::dto::{
    WishlistClearResponse, WishlistResponse, WishlistToggleResponse, WishlistedMovieResponse,
};

fn parse_movie_id(id: &str) -> Result<MovieId, ApiError> {
    MovieId::from_str(id)
        .map_err(|_| ApiError::new(StatusCode::NOT_FOUND, "Movie not found"))
}

/// POST /api/v1/wishlists/:movie_id - toggle.
pub async fn toggle_wishlist(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let movie_id = parse_movie_id(&movie_id)?;

    let result = state
        .toggle_wishlist_handler()
        .handle(ToggleWishlistCommand {
            user_id: user.id,
            movie_id,
        })
        .await?;

    let is_wishlisted = result.outcome.is_wishlisted();
    let message = if is_wishlisted {
        "Movie added to wishlist"
    } else {
        "Movie removed from wishlist"
    };

    Ok(Json(WishlistToggleResponse {
        message: message.to_string(),
        movie_id: result.movie_id.to_string(),
        is_wishlisted,
    }))
}

/// DELETE /api/v1/wishlists/:movie_id - remove.
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let movie_id = parse_movie_id(&movie_id)?;

    let result = state
        .remove_from_wishlist_handler()
        .handle(RemoveFromWishlistCommand {
            user_id: user.id,
            movie_id,
        })
        .await?;

    Ok(Json(WishlistToggleResponse {
        message: "Movie removed from wishlist".to_string(),
        movie_id: result.movie_id.to_string(),
        is_wishlisted: false,
    }))
}

/// DELETE /api/v1/wishlists - clear.
pub async fn clear_wishlist(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .clear_wishlist_handler()
        .handle(ClearWishlistCommand { user_id: user.id })
        .await?;

    Ok(Json(WishlistClearResponse {
        message: "All wishlisted movies removed".to_string(),
        count: result.removed,
    }))
}

/// GET /api/v1/wishlists - list.
pub async fn list_wishlist(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .list_wishlist_handler()
        .handle(ListWishlistQuery { user_id: user.id })
        .await?;

    Ok(Json(WishlistResponse {
        movies: result
            .movies
            .iter()
            .map(WishlistedMovieResponse::from)
            .collect(),
    }))
}
