//! CancelCheckoutHandler - Command handler for abandoned checkouts.
//!
//! Called from the cancel callback with the session reference. Repeat
//! calls for the same reference fail with not-found (the record is no
//! longer pending), never with a crash.

use std::sync::Arc;

use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Command to cancel an in-flight checkout.
#[derive(Debug, Clone)]
pub struct CancelCheckoutCommand {
    pub session_id: String,
}

/// Result of a cancelled checkout.
#[derive(Debug, Clone)]
pub struct CancelCheckoutResult {
    pub subscription: Subscription,
}

/// Handler for checkout cancellation.
pub struct CancelCheckoutHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl CancelCheckoutHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    pub async fn handle(
        &self,
        cmd: CancelCheckoutCommand,
    ) -> Result<CancelCheckoutResult, SubscriptionError> {
        let mut subscription = self
            .subscriptions
            .find_pending_by_session(&cmd.session_id)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?
            .ok_or_else(|| SubscriptionError::pending_not_found(&cmd.session_id))?;

        subscription.cancel()?;
        self.subscriptions
            .update(&subscription)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;

        tracing::info!(
            session_id = %cmd.session_id,
            user_id = %subscription.user_id,
            "Checkout cancelled"
        );

        Ok(CancelCheckoutResult { subscription })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySubscriptionRepository;
    use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};
    use crate::domain::subscription::{Plan, SubscriptionStatus};
    use crate::ports::SubscriptionRepository as _;

    async fn seed_pending(subscriptions: &InMemorySubscriptionRepository) -> Subscription {
        let subscription = Subscription::pending_checkout(
            SubscriptionId::new(),
            UserId::new(),
            Plan::Platinum,
            "cus_123".to_string(),
            "cs_cancel_me".to_string(),
            Some(Timestamp::now().plus_secs(1800)),
            Timestamp::now().add_days(30),
        );
        subscriptions.save(&subscription).await.unwrap();
        subscription
    }

    #[tokio::test]
    async fn cancel_clears_session_and_marks_cancelled() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let pending = seed_pending(&subscriptions).await;

        let handler = CancelCheckoutHandler::new(subscriptions.clone());
        let result = handler
            .handle(CancelCheckoutCommand {
                session_id: "cs_cancel_me".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.subscription.status, SubscriptionStatus::Cancelled);
        assert!(result.subscription.session_id.is_none());

        let stored = subscriptions
            .find_by_user(&pending.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, SubscriptionStatus::Cancelled);
    }

    #[tokio::test]
    async fn unknown_session_fails_with_not_found() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let handler = CancelCheckoutHandler::new(subscriptions);

        let err = handler
            .handle(CancelCheckoutCommand {
                session_id: "cs_missing".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SubscriptionError::PendingNotFound { .. }));
    }

    #[tokio::test]
    async fn second_cancel_fails_with_not_found() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        seed_pending(&subscriptions).await;

        let handler = CancelCheckoutHandler::new(subscriptions);
        let cmd = CancelCheckoutCommand {
            session_id: "cs_cancel_me".to_string(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let err = handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, SubscriptionError::PendingNotFound { .. }));
    }
}
