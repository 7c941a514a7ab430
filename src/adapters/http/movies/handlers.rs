//! HTTP handlers for catalog endpoints.

use std::str::FromStr;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::movie::{
    CreateMovieCommand, DeleteMovieCommand, GetMovieQuery, ListMoviesQuery, UpdateMovieCommand,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::MovieId;
use crate::ports::MovieQuery;

use super::dto::{MovieListResponse, MovieRequest, MovieResponse};

fn parse_movie_id(id: &str) -> Result<MovieId, ApiError> {
    MovieId::from_str(id)
        .map_err(|_| ApiError::new(StatusCode::NOT_FOUND, "Movie not found"))
}

/// GET /api/v1/movies - public listing with search/filter/paging.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(filter): Query<MovieQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .list_movies_handler()
        .handle(ListMoviesQuery { filter })
        .await?;

    Ok(Json(MovieListResponse::from(&result.page)))
}

/// GET /api/v1/movies/:id - tier-gated detail.
pub async fn get_movie(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let movie_id = parse_movie_id(&id)?;

    let result = state
        .get_movie_handler()
        .handle(GetMovieQuery {
            viewer_id: user.id,
            viewer_role: user.role,
            movie_id,
        })
        .await?;

    Ok(Json(MovieResponse::from(&result.movie)))
}

/// POST /api/v1/movies - create (supervisor/admin).
pub async fn create_movie(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<MovieRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .create_movie_handler()
        .handle(CreateMovieCommand {
            actor_role: user.role,
            draft: request.into(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MovieResponse::from(&result.movie))))
}

/// PATCH|PUT /api/v1/movies/:id - update (supervisor/admin).
pub async fn update_movie(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<MovieRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let movie_id = parse_movie_id(&id)?;

    let result = state
        .update_movie_handler()
        .handle(UpdateMovieCommand {
            actor_role: user.role,
            movie_id,
            draft: request.into(),
        })
        .await?;

    Ok(Json(MovieResponse::from(&result.movie)))
}

/// DELETE /api/v1/movies/:id - delete (supervisor/admin).
pub async fn delete_movie(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let movie_id = parse_movie_id(&id)?;

    state
        .delete_movie_handler()
        .handle(DeleteMovieCommand {
            actor_role: user.role,
            movie_id,
        })
        .await?;

    Ok(Json(serde_json::json!({
        "message": "Movie deleted successfully"
    })))
}
