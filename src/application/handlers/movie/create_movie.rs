//! CreateMovieHandler - Command handler for adding catalog entries.
//!
//! Restricted to supervisor/admin. On success a "new movie" push goes to
//! every opted-in device; delivery failures are logged, never surfaced
//! to the caller.

use std::sync::Arc;

use crate::domain::foundation::{MovieId, Role};
use crate::domain::movie::{can_manage_catalog, AccessDecision, Movie, MovieDraft, MovieError};
use crate::ports::{MovieRepository, PushGateway, PushMessage, UserRepository};

/// Command to add a movie to the catalog.
#[derive(Debug, Clone)]
pub struct CreateMovieCommand {
    pub actor_role: Role,
    pub draft: MovieDraft,
}

/// Result of movie creation.
#[derive(Debug, Clone)]
pub struct CreateMovieResult {
    pub movie: Movie,
}

/// Handler for movie creation.
pub struct CreateMovieHandler {
    movies: Arc<dyn MovieRepository>,
    users: Arc<dyn UserRepository>,
    push_gateway: Arc<dyn PushGateway>,
}

impl CreateMovieHandler {
    pub fn new(
        movies: Arc<dyn MovieRepository>,
        users: Arc<dyn UserRepository>,
        push_gateway: Arc<dyn PushGateway>,
    ) -> Self {
        Self {
            movies,
            users,
            push_gateway,
        }
    }

    pub async fn handle(&self, cmd: CreateMovieCommand) -> Result<CreateMovieResult, MovieError> {
        if let AccessDecision::Denied { reason } = can_manage_catalog(cmd.actor_role) {
            return Err(MovieError::access_denied(reason));
        }

        cmd.draft.validate().map_err(MovieError::validation)?;

        let movie = Movie::create(MovieId::new(), cmd.draft);
        self.movies.save(&movie).await.map_err(MovieError::from)?;

        tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie added to catalog");

        self.broadcast_new_movie(&movie).await;

        Ok(CreateMovieResult { movie })
    }

    /// Best-effort push to every registered device.
    async fn broadcast_new_movie(&self, movie: &Movie) {
        let tokens = match self.users.push_targets().await {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load push targets");
                return;
            }
        };

        if tokens.is_empty() {
            return;
        }

        let message = PushMessage::new(
            "New Movie Added!",
            format!("{} has been added to Movie Explorer.", movie.title),
        )
        .with_data("movie_id", movie.id.to_string())
        .with_data("url", format!("/movies/{}", movie.id));

        match self.push_gateway.send(&tokens, &message).await {
            Ok(deliveries) => {
                let rejected = deliveries
                    .iter()
                    .filter(|d| !d.outcome.is_accepted())
                    .count();
                tracing::info!(
                    movie_id = %movie.id,
                    delivered = deliveries.len() - rejected,
                    rejected,
                    "New-movie notification sent"
                );
            }
            Err(e) => {
                tracing::error!(movie_id = %movie.id, error = %e, "Push broadcast failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fcm::MockPushGateway;
    use crate::adapters::memory::{InMemoryMovieRepository, InMemoryUserRepository};
    use crate::domain::foundation::UserId;
    use crate::domain::subscription::Plan;
    use crate::domain::user::{Registration, User};
    use crate::ports::UserRepository as _;

    fn valid_draft() -> MovieDraft {
        MovieDraft {
            title: "Dune".to_string(),
            genre: "Sci-Fi".to_string(),
            release_year: 2021,
            rating: 8.0,
            director: "Denis Villeneuve".to_string(),
            duration_minutes: 155,
            description: "House Atreides takes over Arrakis.".to_string(),
            plan: Plan::Platinum,
            poster_url: None,
            banner_url: None,
        }
    }

    async fn seed_push_user(users: &InMemoryUserRepository, token: &str) {
        let registration = Registration {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: format!("{}@example.com", token),
            password: "s3cret!".to_string(),
            mobile_number: "5551234567".to_string(),
        };
        let mut user = User::register(UserId::new(), &registration, "hash".to_string());
        user.update_preferences(Some(token.to_string()), None);
        users.save(&user).await.unwrap();
    }

    fn handler(
        movies: Arc<InMemoryMovieRepository>,
        users: Arc<InMemoryUserRepository>,
        push: Arc<MockPushGateway>,
    ) -> CreateMovieHandler {
        CreateMovieHandler::new(movies, users, push)
    }

    #[tokio::test]
    async fn supervisor_creates_movie_and_notifies_devices() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let push = Arc::new(MockPushGateway::new());
        seed_push_user(&users, "device-1").await;
        seed_push_user(&users, "device-2").await;

        let result = handler(movies.clone(), users, push.clone())
            .handle(CreateMovieCommand {
                actor_role: Role::Supervisor,
                draft: valid_draft(),
            })
            .await
            .unwrap();

        assert_eq!(result.movie.title, "Dune");

        use crate::ports::MovieRepository as _;
        assert!(movies.find_by_id(&result.movie.id).await.unwrap().is_some());

        let sent = push.sent();
        assert_eq!(sent.len(), 1);
        let (tokens, message) = &sent[0];
        assert_eq!(tokens.len(), 2);
        assert!(message.body.contains("Dune"));
        assert_eq!(
            message.data.get("movie_id").map(String::as_str),
            Some(result.movie.id.to_string().as_str())
        );
    }

    #[tokio::test]
    async fn regular_user_is_forbidden() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let push = Arc::new(MockPushGateway::new());

        let err = handler(movies, users, push)
            .handle(CreateMovieCommand {
                actor_role: Role::User,
                draft: valid_draft(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MovieError::AccessDenied { .. }));
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_with_field_errors() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let push = Arc::new(MockPushGateway::new());

        let mut draft = valid_draft();
        draft.title = String::new();

        let err = handler(movies, users, push)
            .handle(CreateMovieCommand {
                actor_role: Role::Admin,
                draft,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MovieError::Validation(_)));
    }

    #[tokio::test]
    async fn push_failure_does_not_fail_the_request() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let push = Arc::new(MockPushGateway::failing());
        seed_push_user(&users, "device-1").await;

        let result = handler(movies, users, push)
            .handle(CreateMovieCommand {
                actor_role: Role::Admin,
                draft: valid_draft(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn no_push_is_attempted_without_registered_devices() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let push = Arc::new(MockPushGateway::new());

        handler(movies, users, push.clone())
            .handle(CreateMovieCommand {
                actor_role: Role::Admin,
                draft: valid_draft(),
            })
            .await
            .unwrap();

        assert!(push.sent().is_empty());
    }
}
