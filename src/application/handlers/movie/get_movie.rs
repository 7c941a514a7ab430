//! GetMovieHandler - Query handler for tier-gated movie detail.
//!
//! Supervisors and admins bypass the gate. Regular users must hold an
//! active subscription whose tier covers the movie's required plan; a
//! user who somehow has no subscription row gets a default basic one
//! provisioned on the spot.

use std::sync::Arc;

use crate::domain::foundation::{MovieId, Role, SubscriptionId, Timestamp, UserId};
use crate::domain::movie::{can_view_movie, AccessDecision, Movie, MovieError};
use crate::domain::subscription::Subscription;
use crate::ports::{MovieRepository, SubscriptionRepository};

/// Query for a movie's detail view.
#[derive(Debug, Clone)]
pub struct GetMovieQuery {
    pub viewer_id: UserId,
    pub viewer_role: Role,
    pub movie_id: MovieId,
}

/// Result of the detail query.
#[derive(Debug, Clone)]
pub struct GetMovieResult {
    pub movie: Movie,
}

/// Handler for the gated detail query.
pub struct GetMovieHandler {
    movies: Arc<dyn MovieRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl GetMovieHandler {
    pub fn new(
        movies: Arc<dyn MovieRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            movies,
            subscriptions,
        }
    }

    pub async fn handle(&self, query: GetMovieQuery) -> Result<GetMovieResult, MovieError> {
        let movie = self
            .movies
            .find_by_id(&query.movie_id)
            .await
            .map_err(MovieError::from)?
            .ok_or(MovieError::NotFound(query.movie_id))?;

        // Back-office roles skip the subscription machinery entirely.
        if query.viewer_role.bypasses_tier_gate() {
            return Ok(GetMovieResult { movie });
        }

        let subscription = self.current_subscription(query.viewer_id).await?;

        match can_view_movie(query.viewer_role, Some(&subscription), movie.plan) {
            AccessDecision::Granted => Ok(GetMovieResult { movie }),
            AccessDecision::Denied { reason } => {
                tracing::info!(
                    user_id = %query.viewer_id,
                    movie_id = %query.movie_id,
                    %reason,
                    "Movie access denied"
                );
                Err(MovieError::access_denied(reason))
            }
        }
    }

    /// Loads and reconciles the viewer's subscription, provisioning a
    /// default basic one if the row is missing.
    async fn current_subscription(&self, user_id: UserId) -> Result<Subscription, MovieError> {
        let existing = self
            .subscriptions
            .find_by_user(&user_id)
            .await
            .map_err(MovieError::from)?;

        let subscription = match existing {
            Some(subscription) => {
                let reconciled = subscription.reconcile(Timestamp::now());
                if reconciled.downgraded {
                    self.subscriptions
                        .update(&reconciled.subscription)
                        .await
                        .map_err(MovieError::from)?;
                }
                reconciled.subscription
            }
            None => {
                let subscription = Subscription::default_basic(SubscriptionId::new(), user_id);
                self.subscriptions
                    .save(&subscription)
                    .await
                    .map_err(MovieError::from)?;
                tracing::warn!(user_id = %user_id, "Provisioned missing default subscription");
                subscription
            }
        };

        Ok(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryMovieRepository, InMemorySubscriptionRepository};
    use crate::domain::movie::MovieDraft;
    use crate::domain::subscription::{Plan, SubscriptionStatus};
    use crate::ports::{MovieRepository as _, SubscriptionRepository as _};

    fn movie_requiring(plan: Plan) -> Movie {
        Movie::create(
            MovieId::new(),
            MovieDraft {
                title: "Interstellar".to_string(),
                genre: "Sci-Fi".to_string(),
                release_year: 2014,
                rating: 8.7,
                director: "Christopher Nolan".to_string(),
                duration_minutes: 169,
                description: "They go through a wormhole.".to_string(),
                plan,
                poster_url: None,
                banner_url: None,
            },
        )
    }

    async fn seed_active(
        subscriptions: &InMemorySubscriptionRepository,
        user_id: UserId,
        plan: Plan,
        expiry: Option<Timestamp>,
    ) {
        let mut sub = Subscription::default_basic(SubscriptionId::new(), user_id);
        if plan.is_paid() {
            sub.begin_checkout(
                plan,
                "cus_1".to_string(),
                "cs_1".to_string(),
                None,
                expiry.unwrap_or_else(|| Timestamp::now().add_days(30)),
            );
            sub.activate(None).unwrap();
        }
        subscriptions.save(&sub).await.unwrap();
    }

    fn handler(
        movies: Arc<InMemoryMovieRepository>,
        subscriptions: Arc<InMemorySubscriptionRepository>,
    ) -> GetMovieHandler {
        GetMovieHandler::new(movies, subscriptions)
    }

    #[tokio::test]
    async fn basic_user_sees_basic_movie() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let movie = movie_requiring(Plan::Basic);
        movies.save(&movie).await.unwrap();
        let user_id = UserId::new();
        seed_active(&subscriptions, user_id, Plan::Basic, None).await;

        let result = handler(movies, subscriptions)
            .handle(GetMovieQuery {
                viewer_id: user_id,
                viewer_role: Role::User,
                movie_id: movie.id,
            })
            .await
            .unwrap();

        assert_eq!(result.movie.id, movie.id);
    }

    #[tokio::test]
    async fn basic_user_is_denied_platinum_movie() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let movie = movie_requiring(Plan::Platinum);
        movies.save(&movie).await.unwrap();
        let user_id = UserId::new();
        seed_active(&subscriptions, user_id, Plan::Basic, None).await;

        let err = handler(movies, subscriptions)
            .handle(GetMovieQuery {
                viewer_id: user_id,
                viewer_role: Role::User,
                movie_id: movie.id,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MovieError::AccessDenied { .. }));
    }

    #[tokio::test]
    async fn platinum_user_sees_platinum_movie() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let movie = movie_requiring(Plan::Platinum);
        movies.save(&movie).await.unwrap();
        let user_id = UserId::new();
        seed_active(&subscriptions, user_id, Plan::Platinum, None).await;

        let result = handler(movies, subscriptions)
            .handle(GetMovieQuery {
                viewer_id: user_id,
                viewer_role: Role::User,
                movie_id: movie.id,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn supervisor_bypasses_gate_without_subscription() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let movie = movie_requiring(Plan::Platinum);
        movies.save(&movie).await.unwrap();

        let result = handler(movies, subscriptions)
            .handle(GetMovieQuery {
                viewer_id: UserId::new(),
                viewer_role: Role::Supervisor,
                movie_id: movie.id,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_subscription_is_provisioned_as_basic() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let movie = movie_requiring(Plan::Basic);
        movies.save(&movie).await.unwrap();
        let user_id = UserId::new();

        let result = handler(movies, subscriptions.clone())
            .handle(GetMovieQuery {
                viewer_id: user_id,
                viewer_role: Role::User,
                movie_id: movie.id,
            })
            .await;

        assert!(result.is_ok());
        let provisioned = subscriptions.find_by_user(&user_id).await.unwrap().unwrap();
        assert_eq!(provisioned.plan, Plan::Basic);
        assert_eq!(provisioned.status, SubscriptionStatus::Active);
    }

    #[tokio::test]
    async fn expired_gold_viewer_is_downgraded_then_denied_gold_movie() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let movie = movie_requiring(Plan::Gold);
        movies.save(&movie).await.unwrap();
        let user_id = UserId::new();
        seed_active(
            &subscriptions,
            user_id,
            Plan::Gold,
            Some(Timestamp::now().minus_days(1)),
        )
        .await;

        let err = handler(movies, subscriptions.clone())
            .handle(GetMovieQuery {
                viewer_id: user_id,
                viewer_role: Role::User,
                movie_id: movie.id,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MovieError::AccessDenied { .. }));

        // The downgrade was persisted along the way.
        let stored = subscriptions.find_by_user(&user_id).await.unwrap().unwrap();
        assert_eq!(stored.plan, Plan::Basic);
    }

    #[tokio::test]
    async fn missing_movie_fails_with_not_found() {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());

        let err = handler(movies, subscriptions)
            .handle(GetMovieQuery {
                viewer_id: UserId::new(),
                viewer_role: Role::User,
                movie_id: MovieId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MovieError::NotFound(_)));
    }
}
