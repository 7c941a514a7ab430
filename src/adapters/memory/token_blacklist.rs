//! In-memory implementation of TokenBlacklist.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::TokenBlacklist;

/// Mutex-backed revoked-token store.
#[derive(Default)]
pub struct InMemoryTokenBlacklist {
    tokens: Mutex<HashMap<String, Timestamp>>,
}

impl InMemoryTokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenBlacklist for InMemoryTokenBlacklist {
    async fn insert(&self, token: &str, expires_at: Timestamp) -> Result<(), DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.contains_key(token) {
            return Err(DomainError::validation("token", "Token already revoked"));
        }
        tokens.insert(token.to_string(), expires_at);
        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.tokens.lock().unwrap().contains_key(token))
    }

    async fn purge_expired(&self, now: Timestamp) -> Result<u64, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|_, expires_at| *expires_at > now);
        Ok((before - tokens.len()) as u64)
    }
}
