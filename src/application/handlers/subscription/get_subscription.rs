//! GetSubscriptionHandler - Query handler for a user's subscription.
//!
//! This is a read boundary, so the record is reconciled before it is
//! returned; a downgrade is persisted so the stored row catches up with
//! what the caller saw.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Query for the current user's subscription.
#[derive(Debug, Clone)]
pub struct GetSubscriptionQuery {
    pub user_id: UserId,
}

/// Result of the subscription query.
#[derive(Debug, Clone)]
pub struct GetSubscriptionResult {
    /// The reconciled subscription, or `None` if the user has no record.
    pub subscription: Option<Subscription>,
}

/// Handler for the subscription query.
pub struct GetSubscriptionHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl GetSubscriptionHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    pub async fn handle(
        &self,
        query: GetSubscriptionQuery,
    ) -> Result<GetSubscriptionResult, SubscriptionError> {
        let Some(subscription) = self
            .subscriptions
            .find_by_user(&query.user_id)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?
        else {
            return Ok(GetSubscriptionResult { subscription: None });
        };

        let reconciled = subscription.reconcile(Timestamp::now());
        if reconciled.downgraded {
            tracing::info!(
                user_id = %query.user_id,
                "Expired paid subscription downgraded to basic on read"
            );
            self.subscriptions
                .update(&reconciled.subscription)
                .await
                .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;
        }

        Ok(GetSubscriptionResult {
            subscription: Some(reconciled.subscription),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySubscriptionRepository;
    use crate::domain::foundation::SubscriptionId;
    use crate::domain::subscription::{Plan, SubscriptionStatus};
    use crate::ports::SubscriptionRepository as _;

    #[tokio::test]
    async fn missing_record_returns_none() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let handler = GetSubscriptionHandler::new(subscriptions);

        let result = handler
            .handle(GetSubscriptionQuery {
                user_id: UserId::new(),
            })
            .await
            .unwrap();

        assert!(result.subscription.is_none());
    }

    #[tokio::test]
    async fn expired_gold_is_downgraded_and_persisted() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let user_id = UserId::new();

        let mut subscription = Subscription::pending_checkout(
            SubscriptionId::new(),
            user_id,
            Plan::Gold,
            "cus_1".to_string(),
            "cs_1".to_string(),
            None,
            Timestamp::now().minus_days(2),
        );
        subscription.activate(None).unwrap();
        subscriptions.save(&subscription).await.unwrap();

        let handler = GetSubscriptionHandler::new(subscriptions.clone());
        let result = handler
            .handle(GetSubscriptionQuery { user_id })
            .await
            .unwrap();

        let returned = result.subscription.unwrap();
        assert_eq!(returned.plan, Plan::Basic);
        assert_eq!(returned.status, SubscriptionStatus::Active);
        assert!(returned.expiry_date.is_none());

        let stored = subscriptions.find_by_user(&user_id).await.unwrap().unwrap();
        assert_eq!(stored.plan, Plan::Basic);
    }

    #[tokio::test]
    async fn current_gold_is_returned_untouched() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let user_id = UserId::new();

        let mut subscription = Subscription::pending_checkout(
            SubscriptionId::new(),
            user_id,
            Plan::Gold,
            "cus_1".to_string(),
            "cs_1".to_string(),
            None,
            Timestamp::now().add_days(1),
        );
        subscription.activate(None).unwrap();
        subscriptions.save(&subscription).await.unwrap();

        let handler = GetSubscriptionHandler::new(subscriptions);
        let result = handler
            .handle(GetSubscriptionQuery { user_id })
            .await
            .unwrap();

        assert_eq!(result.subscription.unwrap().plan, Plan::Gold);
    }
}
