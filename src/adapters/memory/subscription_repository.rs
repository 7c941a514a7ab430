//! In-memory implementation of SubscriptionRepository.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::subscription::Subscription;
use crate::ports::SubscriptionRepository;

/// Mutex-backed subscription store (one record per user).
#[derive(Default)]
pub struct InMemorySubscriptionRepository {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        if subscriptions
            .iter()
            .any(|s| s.user_id == subscription.user_id)
        {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "User already has a subscription",
            ));
        }
        subscriptions.push(subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        match subscriptions.iter_mut().find(|s| s.id == subscription.id) {
            Some(slot) => {
                *slot = subscription.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                format!("Subscription {} not found", subscription.id),
            )),
        }
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Subscription>, DomainError> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.user_id == user_id)
            .cloned())
    }

    async fn find_pending_by_session(
        &self,
        session_id: &str,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.is_pending_for(session_id))
            .cloned())
    }

    async fn find_pending_by_user_and_session(
        &self,
        user_id: &UserId,
        session_id: &str,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.user_id == user_id && s.is_pending_for(session_id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SubscriptionId, Timestamp};
    use crate::domain::subscription::Plan;

    fn pending(user_id: UserId, session: &str) -> Subscription {
        Subscription::pending_checkout(
            SubscriptionId::new(),
            user_id,
            Plan::Gold,
            "cus_1".to_string(),
            session.to_string(),
            None,
            Timestamp::now().add_days(1),
        )
    }

    #[tokio::test]
    async fn one_subscription_per_user() {
        let repo = InMemorySubscriptionRepository::new();
        let user_id = UserId::new();
        repo.save(&Subscription::default_basic(SubscriptionId::new(), user_id))
            .await
            .unwrap();

        let err = repo
            .save(&Subscription::default_basic(SubscriptionId::new(), user_id))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn pending_lookup_is_scoped_to_status() {
        let repo = InMemorySubscriptionRepository::new();
        let user_id = UserId::new();
        let mut subscription = pending(user_id, "cs_1");
        repo.save(&subscription).await.unwrap();

        assert!(repo
            .find_pending_by_session("cs_1")
            .await
            .unwrap()
            .is_some());

        subscription.activate(None).unwrap();
        repo.update(&subscription).await.unwrap();

        assert!(repo
            .find_pending_by_session("cs_1")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn user_scoped_pending_lookup_excludes_other_users() {
        let repo = InMemorySubscriptionRepository::new();
        let owner = UserId::new();
        repo.save(&pending(owner, "cs_1")).await.unwrap();

        assert!(repo
            .find_pending_by_user_and_session(&owner, "cs_1")
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_pending_by_user_and_session(&UserId::new(), "cs_1")
            .await
            .unwrap()
            .is_none());
    }
}
