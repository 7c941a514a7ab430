//! SyncSubscriptionStatusHandler - re-query the provider's canonical state.
//!
//! For paid subscriptions this re-reads the checkout session or payment
//! intent and folds the provider's answer into the local record: a paid
//! pending checkout activates, an unpaid one whose session lapsed is
//! cancelled. Basic subscriptions are a pass-through no-op.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::subscription::{
    ExpiryPolicy, Subscription, SubscriptionError, SubscriptionStatus,
};
use crate::ports::{PaymentProvider, SubscriptionRepository};

/// Command to sync a subscription with the payment provider.
#[derive(Debug, Clone)]
pub struct SyncSubscriptionStatusCommand {
    pub user_id: UserId,
}

/// Result of the sync.
#[derive(Debug, Clone)]
pub struct SyncSubscriptionStatusResult {
    pub subscription: Subscription,
    /// True if the local record changed.
    pub changed: bool,
}

/// Handler for provider-state synchronization.
pub struct SyncSubscriptionStatusHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    payment_provider: Arc<dyn PaymentProvider>,
    expiry_policy: ExpiryPolicy,
}

impl SyncSubscriptionStatusHandler {
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
        cmd: SyncSubscriptionStatusCommand,
    ) -> Result<SyncSubscriptionStatusResult, SubscriptionError> {
        let subscription = self
            .subscriptions
            .find_by_user(&cmd.user_id)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?
            .ok_or_else(|| SubscriptionError::not_found_for_user(cmd.user_id))?;

        // Basic never talks to the provider.
        if subscription.plan.is_basic() {
            return Ok(SyncSubscriptionStatusResult {
                subscription,
                changed: false,
            });
        }

        let now = Timestamp::now();
        let reconciled = subscription.reconcile(now);
        let mut subscription = reconciled.subscription;
        let mut changed = reconciled.downgraded;

        if subscription.status == SubscriptionStatus::Pending {
            if let Some(reference) = subscription.session_id.clone() {
                changed |= self
                    .sync_pending(&mut subscription, &reference, now)
                    .await?;
            }
        }

        if changed {
            self.subscriptions
                .update(&subscription)
                .await
                .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;
        }

        Ok(SyncSubscriptionStatusResult {
            subscription,
            changed,
        })
    }

    async fn sync_pending(
        &self,
        subscription: &mut Subscription,
        reference: &str,
        now: Timestamp,
    ) -> Result<bool, SubscriptionError> {
        let state = match self.payment_provider.get_checkout_session(reference).await {
            Ok(Some(state)) => Some(state),
            Ok(None) => self
                .payment_provider
                .get_payment_intent(reference)
                .await
                .map_err(|e| SubscriptionError::payment_failed(e.message))?,
            Err(e) => return Err(SubscriptionError::payment_failed(e.message)),
        };

        let Some(state) = state else {
            // Provider no longer knows the reference; the checkout is dead.
            subscription.cancel()?;
            tracing::warn!(reference = %reference, "Checkout reference unknown to provider, cancelled");
            return Ok(true);
        };

        if state.payment_status.is_paid() {
            let expiry_override = match self.expiry_policy {
                ExpiryPolicy::Preserve => None,
                ExpiryPolicy::Provider => {
                    state.provider_period_end.map(Timestamp::from_unix_secs)
                }
            };
            subscription.activate(expiry_override)?;
            tracing::info!(reference = %reference, "Pending checkout found paid during sync");
            return Ok(true);
        }

        let session_lapsed = subscription
            .session_expires_at
            .map(|expires| expires <= now)
            .unwrap_or(false);
        if session_lapsed {
            subscription.cancel()?;
            tracing::info!(reference = %reference, "Unpaid checkout session lapsed, cancelled");
            return Ok(true);
        }

        Ok(false)
    }
}
