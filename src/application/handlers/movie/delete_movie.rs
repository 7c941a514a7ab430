//! DeleteMovieHandler - Command handler for removing catalog entries.

use std::sync::Arc;

use crate::domain::foundation::{MovieId, Role};
use crate::domain::movie::{can_manage_catalog, AccessDecision, MovieError};
use crate::ports::MovieRepository;

/// Command to delete a movie.
#[derive(Debug, Clone)]
pub struct DeleteMovieCommand {
    pub actor_role: Role,
    pub movie_id: MovieId,
}

/// Result of a movie deletion.
#[derive(Debug, Clone)]
pub struct DeleteMovieResult {
    pub movie_id: MovieId,
}

/// Handler for movie deletion.
pub struct DeleteMovieHandler {
    movies: Arc<dyn MovieRepository>,
}

impl DeleteMovieHandler {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn handle(&self, cmd: DeleteMovieCommand) -> Result<DeleteMovieResult, MovieError> {
        if let AccessDecision::Denied { reason } = can_manage_catalog(cmd.actor_role) {
            return Err(MovieError::access_denied(reason));
        }

        if self
            .movies
            .find_by_id(&cmd.movie_id)
            .await
            .map_err(MovieError::from)?
            .is_none()
        {
            return Err(MovieError::NotFound(cmd.movie_id));
        }

        self.movies
            .delete(&cmd.movie_id)
            .await
            .map_err(MovieError::from)?;

        tracing::info!(movie_id = %cmd.movie_id, "Movie deleted");

        Ok(DeleteMovieResult {
            movie_id: cmd.movie_id,
        })
    }
}
