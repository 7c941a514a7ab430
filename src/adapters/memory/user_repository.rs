//! In-memory implementation of UserRepository.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Mutex-backed user store mirroring the postgres adapter's constraints.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(
                DomainError::new(ErrorCode::EmailTaken, "Email is already registered")
                    .with_detail("email", user.email.clone()),
            );
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User {} not found", user.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        self.users.lock().unwrap().retain(|u| &u.id != id);
        Ok(())
    }

    async fn push_targets(&self) -> Result<Vec<String>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.wants_push())
            .filter_map(|u| u.device_token.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Registration;

    fn sample_user(email: &str) -> User {
        let registration = Registration {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password: "s3cret!".to_string(),
            mobile_number: "5551234567".to_string(),
        };
        User::register(UserId::new(), &registration, "hash".to_string())
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryUserRepository::new();
        let user = sample_user("ada@example.com");
        repo.save(&user).await.unwrap();

        assert!(repo.find_by_id(&user.id).await.unwrap().is_some());
        assert!(repo
            .find_by_email("ada@example.com")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.save(&sample_user("ada@example.com")).await.unwrap();

        let err = repo.save(&sample_user("ada@example.com")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailTaken);
    }

    #[tokio::test]
    async fn push_targets_requires_token_and_opt_in() {
        let repo = InMemoryUserRepository::new();

        let mut with_token = sample_user("a@example.com");
        with_token.update_preferences(Some("token-a".to_string()), None);
        repo.save(&with_token).await.unwrap();

        let mut opted_out = sample_user("b@example.com");
        opted_out.update_preferences(Some("token-b".to_string()), Some(false));
        repo.save(&opted_out).await.unwrap();

        repo.save(&sample_user("c@example.com")).await.unwrap();

        assert_eq!(repo.push_targets().await.unwrap(), vec!["token-a".to_string()]);
    }
}
