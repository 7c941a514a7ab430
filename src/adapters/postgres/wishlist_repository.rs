//! PostgreSQL implementation of WishlistRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, MovieId, Timestamp, UserId, WishlistEntryId};
use crate::domain::movie::Movie;
use crate::domain::subscription::Plan;
use crate::domain::wishlist::WishlistEntry;
use crate::ports::WishlistRepository;

/// PostgreSQL implementation of the WishlistRepository port.
pub struct PostgresWishlistRepository {
    pool: PgPool,
}

impl PostgresWishlistRepository {
    /// Creates a new PostgresWishlistRepository with the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a wishlist entry.
#[derive(Debug, sqlx::FromRow)]
struct WishlistRow {
    id: Uuid,
    user_id: Uuid,
    movie_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<WishlistRow> for WishlistEntry {
    fn from(row: WishlistRow) -> Self {
        WishlistEntry {
            id: WishlistEntryId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            movie_id: MovieId::from_uuid(row.movie_id),
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

/// Movie columns as selected through the wishlist join.
#[derive(Debug, sqlx::FromRow)]
struct WishlistedMovieRow {
    id: Uuid,
    title: String,
    genre: String,
    release_year: i32,
    rating: f64,
    director: String,
    duration_minutes: i32,
    description: String,
    plan: String,
    poster_url: Option<String>,
    banner_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<WishlistedMovieRow> for Movie {
    type Error = DomainError;

    fn try_from(row: WishlistedMovieRow) -> Result<Self, Self::Error> {
        let plan = Plan::parse(&row.plan).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid plan value: {}", row.plan),
            )
        })?;

        Ok(Movie {
            id: MovieId::from_uuid(row.id),
            title: row.title,
            genre: row.genre,
            release_year: row.release_year,
            rating: row.rating,
            director: row.director,
            duration_minutes: row.duration_minutes,
            description: row.description,
            plan,
            poster_url: row.poster_url,
            banner_url: row.banner_url,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl WishlistRepository for PostgresWishlistRepository {
    async fn find(
        &self,
        user_id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<WishlistEntry>, DomainError> {
        let row: Option<WishlistRow> =
            sqlx::query_as("SELECT * FROM wishlists WHERE user_id = $1 AND movie_id = $2")
                .bind(user_id.as_uuid())
                .bind(movie_id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to load wishlist entry: {}", e))
                })?;

        Ok(row.map(WishlistEntry::from))
    }

    async fn insert(&self, entry: &WishlistEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO wishlists (id, user_id, movie_id, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(entry.user_id.as_uuid())
        .bind(entry.movie_id.as_uuid())
        .bind(entry.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert wishlist entry: {}", e)))?;

        Ok(())
    }

    async fn remove(&self, user_id: &UserId, movie_id: &MovieId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM wishlists WHERE user_id = $1 AND movie_id = $2")
            .bind(user_id.as_uuid())
            .bind(movie_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to remove wishlist entry: {}", e))
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM wishlists WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to clear wishlist: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn movies_for(&self, user_id: &UserId) -> Result<Vec<Movie>, DomainError> {
        let rows: Vec<WishlistedMovieRow> = sqlx::query_as(
            r#"
            SELECT m.* FROM movies m
            JOIN wishlists w ON w.movie_id = m.id
            WHERE w.user_id = $1
            ORDER BY w.created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load wishlist: {}", e)))?;

        rows.into_iter().map(Movie::try_from).collect()
    }
}
