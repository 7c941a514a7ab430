//! PostgreSQL implementation of TokenBlacklist.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::TokenBlacklist;

/// PostgreSQL implementation of the TokenBlacklist port.
pub struct PostgresTokenBlacklist {
    pool: PgPool,
}

impl PostgresTokenBlacklist {
    /// Creates a new PostgresTokenBlacklist with the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenBlacklist for PostgresTokenBlacklist {
    async fn insert(&self, token: &str, expires_at: Timestamp) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO blacklisted_tokens (token, expires_at) VALUES ($1, $2)")
            .bind(token)
            .bind(expires_at.as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.constraint() == Some("blacklisted_tokens_pkey") {
                        return DomainError::validation("token", "Token already revoked");
                    }
                }
                DomainError::database(format!("Failed to blacklist token: {}", e))
            })?;

        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM blacklisted_tokens WHERE token = $1)")
                .bind(token)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to check blacklist: {}", e)))?;

        Ok(exists)
    }

    async fn purge_expired(&self, now: Timestamp) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM blacklisted_tokens WHERE expires_at <= $1")
            .bind(now.as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to purge blacklist: {}", e)))?;

        Ok(result.rows_affected())
    }
}
