//! UpdateMovieHandler - Command handler for editing catalog entries.

use std::sync::Arc;

use crate::domain::foundation::{MovieId, Role};
use crate::domain::movie::{can_manage_catalog, AccessDecision, Movie, MovieDraft, MovieError};
use crate::ports::MovieRepository;

/// Command to edit a movie.
#[derive(Debug, Clone)]
pub struct UpdateMovieCommand {
    pub actor_role: Role,
    pub movie_id: MovieId,
    pub draft: MovieDraft,
}

/// Result of a movie update.
#[derive(Debug, Clone)]
pub struct UpdateMovieResult {
    pub movie: Movie,
}

/// Handler for movie updates.
pub struct UpdateMovieHandler {
    movies: Arc<dyn MovieRepository>,
}

impl UpdateMovieHandler {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn handle(&self, cmd: UpdateMovieCommand) -> Result<UpdateMovieResult, MovieError> {
        if let AccessDecision::Denied { reason } = can_manage_catalog(cmd.actor_role) {
            return Err(MovieError::access_denied(reason));
        }

        cmd.draft.validate().map_err(MovieError::validation)?;

        let mut movie = self
            .movies
            .find_by_id(&cmd.movie_id)
            .await
            .map_err(MovieError::from)?
            .ok_or(MovieError::NotFound(cmd.movie_id))?;

        movie.apply(cmd.draft);
        self.movies.update(&movie).await.map_err(MovieError::from)?;

        tracing::info!(movie_id = %movie.id, "Movie updated");

        Ok(UpdateMovieResult { movie })
    }
}
