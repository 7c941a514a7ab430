//! CompleteSubscriptionHandler - Command handler for payment reconciliation.
//!
//! Called from the success callback with the checkout reference. The
//! lookup is scoped to (user, reference, pending), so a stale, foreign,
//! or already-processed reference fails with not-found instead of
//! reactivating anything.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::subscription::{ExpiryPolicy, Subscription, SubscriptionError};
use crate::ports::{CheckoutState, PaymentProvider, SubscriptionRepository};

/// Command to reconcile a completed payment.
#[derive(Debug, Clone)]
pub struct CompleteSubscriptionCommand {
    pub user_id: UserId,
    /// Checkout session or payment intent reference issued at initiation.
    pub reference: String,
}

/// Result of successful reconciliation.
#[derive(Debug, Clone)]
pub struct CompleteSubscriptionResult {
    pub subscription: Subscription,
}

/// Handler for payment completion.
pub struct CompleteSubscriptionHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    payment_provider: Arc<dyn PaymentProvider>,
    expiry_policy: ExpiryPolicy,
}

impl CompleteSubscriptionHandler {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        payment_provider: Arc<dyn PaymentProvider>,
        expiry_policy: ExpiryPolicy,
    ) -> Self {
        Self {
            subscriptions,
            payment_provider,
            expiry_policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteSubscriptionCommand,
    ) -> Result<CompleteSubscriptionResult, SubscriptionError> {
        let mut subscription = self
            .subscriptions
            .find_pending_by_user_and_session(&cmd.user_id, &cmd.reference)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?
            .ok_or_else(|| SubscriptionError::pending_not_found(&cmd.reference))?;

        let state = self.fetch_checkout_state(&cmd.reference).await?;

        if !state.payment_status.is_paid() {
            tracing::warn!(
                user_id = %cmd.user_id,
                reference = %cmd.reference,
                payment_status = state.payment_status.as_str(),
                "Payment not completed"
            );
            return Err(SubscriptionError::payment_not_completed(
                &cmd.reference,
                state.payment_status.as_str(),
            ));
        }

        let expiry_override = match self.expiry_policy {
            ExpiryPolicy::Preserve => None,
            ExpiryPolicy::Provider => state
                .provider_period_end
                .map(Timestamp::from_unix_secs),
        };

        subscription.activate(expiry_override)?;
        self.subscriptions
            .update(&subscription)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;

        tracing::info!(
            user_id = %cmd.user_id,
            reference = %cmd.reference,
            plan = %subscription.plan,
            "Subscription activated"
        );

        Ok(CompleteSubscriptionResult { subscription })
    }

    /// Looks the reference up as a checkout session first, then as a
    /// payment intent (mobile flow).
    async fn fetch_checkout_state(
        &self,
        reference: &str,
    ) -> Result<CheckoutState, SubscriptionError> {
        let session = self
            .payment_provider
            .get_checkout_session(reference)
            .await
            .map_err(|e| SubscriptionError::payment_failed(e.message))?;

        if let Some(state) = session {
            return Ok(state);
        }

        self.payment_provider
            .get_payment_intent(reference)
            .await
            .map_err(|e| SubscriptionError::payment_failed(e.message))?
            .ok_or_else(|| SubscriptionError::pending_not_found(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySubscriptionRepository;
    use crate::adapters::stripe::MockPaymentProvider;
    use crate::domain::foundation::SubscriptionId;
    use crate::domain::subscription::{Plan, SubscriptionStatus};
    use crate::ports::PaymentStatus;
    use crate::ports::SubscriptionRepository as _;

    async fn seed_pending(
        subscriptions: &InMemorySubscriptionRepository,
        session_id: &str,
    ) -> Subscription {
        let subscription = Subscription::pending_checkout(
            SubscriptionId::new(),
            UserId::new(),
            Plan::Gold,
            "cus_123".to_string(),
            session_id.to_string(),
            Some(Timestamp::now().plus_secs(1800)),
            Timestamp::now().add_days(1),
        );
        subscriptions.save(&subscription).await.unwrap();
        subscription
    }

    #[tokio::test]
    async fn paid_session_activates_and_preserves_initiation_expiry() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let pending = seed_pending(&subscriptions, "cs_ok").await;
        let provider = Arc::new(MockPaymentProvider::new());

        let handler = CompleteSubscriptionHandler::new(
            subscriptions.clone(),
            provider,
            ExpiryPolicy::Preserve,
        );
        let result = handler
            .handle(CompleteSubscriptionCommand {
                user_id: pending.user_id,
                reference: "cs_ok".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.subscription.status, SubscriptionStatus::Active);
        assert_eq!(result.subscription.expiry_date, pending.expiry_date);

        let stored = subscriptions
            .find_by_user(&pending.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, SubscriptionStatus::Active);
    }

    #[tokio::test]
    async fn provider_policy_adopts_reported_period_end() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let pending = seed_pending(&subscriptions, "cs_ok").await;
        let period_end = Timestamp::now().add_days(31).as_unix_secs();
        let provider = Arc::new(MockPaymentProvider::new().with_provider_period_end(period_end));

        let handler = CompleteSubscriptionHandler::new(
            subscriptions,
            provider,
            ExpiryPolicy::Provider,
        );
        let result = handler
            .handle(CompleteSubscriptionCommand {
                user_id: pending.user_id,
                reference: "cs_ok".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            result.subscription.expiry_date,
            Some(Timestamp::from_unix_secs(period_end))
        );
    }

    #[tokio::test]
    async fn forged_reference_fails_with_not_found_and_stays_pending() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let pending = seed_pending(&subscriptions, "cs_real").await;
        let provider = Arc::new(MockPaymentProvider::new());

        let handler = CompleteSubscriptionHandler::new(
            subscriptions.clone(),
            provider,
            ExpiryPolicy::Preserve,
        );
        let err = handler
            .handle(CompleteSubscriptionCommand {
                user_id: pending.user_id,
                reference: "cs_forged".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SubscriptionError::PendingNotFound { .. }));

        let stored = subscriptions
            .find_by_user(&pending.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, SubscriptionStatus::Pending);
    }

    #[tokio::test]
    async fn foreign_users_reference_fails_with_not_found() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        seed_pending(&subscriptions, "cs_real").await;
        let provider = Arc::new(MockPaymentProvider::new());

        let handler =
            CompleteSubscriptionHandler::new(subscriptions, provider, ExpiryPolicy::Preserve);
        let err = handler
            .handle(CompleteSubscriptionCommand {
                user_id: UserId::new(), // not the owner
                reference: "cs_real".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SubscriptionError::PendingNotFound { .. }));
    }

    #[tokio::test]
    async fn unpaid_session_fails_with_payment_not_completed() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let pending = seed_pending(&subscriptions, "cs_unpaid").await;
        let provider = Arc::new(MockPaymentProvider::new().with_payment_status(PaymentStatus::Unpaid));

        let handler = CompleteSubscriptionHandler::new(
            subscriptions.clone(),
            provider,
            ExpiryPolicy::Preserve,
        );
        let err = handler
            .handle(CompleteSubscriptionCommand {
                user_id: pending.user_id,
                reference: "cs_unpaid".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SubscriptionError::PaymentNotCompleted { .. }));

        let stored = subscriptions
            .find_by_user(&pending.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, SubscriptionStatus::Pending);
    }

    #[tokio::test]
    async fn completion_is_not_replayable() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let pending = seed_pending(&subscriptions, "cs_once").await;
        let provider = Arc::new(MockPaymentProvider::new());

        let handler = CompleteSubscriptionHandler::new(
            subscriptions,
            provider,
            ExpiryPolicy::Preserve,
        );
        let cmd = CompleteSubscriptionCommand {
            user_id: pending.user_id,
            reference: "cs_once".to_string(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let err = handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, SubscriptionError::PendingNotFound { .. }));
    }
}
