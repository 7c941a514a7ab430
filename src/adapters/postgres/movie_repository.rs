//! PostgreSQL implementation of MovieRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, MovieId, Timestamp};
use crate::domain::movie::Movie;
use crate::domain::subscription::Plan;
use crate::ports::{MoviePage, MovieQuery, MovieRepository, PAGE_SIZE};

/// PostgreSQL implementation of the MovieRepository port.
pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    /// Creates a new PostgresMovieRepository with the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a movie.
#[derive(Debug, sqlx::FromRow)]
struct MovieRow {
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

impl TryFrom<MovieRow> for Movie {
    type Error = DomainError;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
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
impl MovieRepository for PostgresMovieRepository {
    async fn save(&self, movie: &Movie) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO movies (
                id, title, genre, release_year, rating, director, duration_minutes,
                description, plan, poster_url, banner_url, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(movie.id.as_uuid())
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(movie.release_year)
        .bind(movie.rating)
        .bind(&movie.director)
        .bind(movie.duration_minutes)
        .bind(&movie.description)
        .bind(movie.plan.as_str())
        .bind(&movie.poster_url)
        .bind(&movie.banner_url)
        .bind(movie.created_at.as_datetime())
        .bind(movie.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save movie: {}", e)))?;

        Ok(())
    }

    async fn update(&self, movie: &Movie) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE movies SET
                title = $2,
                genre = $3,
                release_year = $4,
                rating = $5,
                director = $6,
                duration_minutes = $7,
                description = $8,
                plan = $9,
                poster_url = $10,
                banner_url = $11,
                updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(movie.id.as_uuid())
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(movie.release_year)
        .bind(movie.rating)
        .bind(&movie.director)
        .bind(movie.duration_minutes)
        .bind(&movie.description)
        .bind(movie.plan.as_str())
        .bind(&movie.poster_url)
        .bind(&movie.banner_url)
        .bind(movie.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update movie: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MovieNotFound,
                format!("Movie {} not found", movie.id),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, DomainError> {
        let row: Option<MovieRow> = sqlx::query_as("SELECT * FROM movies WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to load movie: {}", e)))?;

        row.map(Movie::try_from).transpose()
    }

    async fn delete(&self, id: &MovieId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete movie: {}", e)))?;

        Ok(())
    }

    async fn search(&self, query: &MovieQuery) -> Result<MoviePage, DomainError> {
        let title_pattern = query.search.as_ref().map(|s| format!("%{}%", s));
        let current_page = query.page_number();
        let offset = ((current_page - 1) * PAGE_SIZE) as i64;

        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM movies
            WHERE ($1::text IS NULL OR title ILIKE $1)
              AND ($2::text IS NULL OR genre = $2)
            "#,
        )
        .bind(&title_pattern)
        .bind(&query.genre)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to count movies: {}", e)))?;

        let rows: Vec<MovieRow> = sqlx::query_as(
            r#"
            SELECT * FROM movies
            WHERE ($1::text IS NULL OR title ILIKE $1)
              AND ($2::text IS NULL OR genre = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&title_pattern)
        .bind(&query.genre)
        .bind(PAGE_SIZE as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to search movies: {}", e)))?;

        let movies = rows
            .into_iter()
            .map(Movie::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let total_pages = ((count as u32) + PAGE_SIZE - 1) / PAGE_SIZE;

        Ok(MoviePage {
            movies,
            total_pages,
            current_page,
        })
    }
}
