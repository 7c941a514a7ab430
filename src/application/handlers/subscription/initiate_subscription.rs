//! InitiateSubscriptionHandler - Command handler for plan selection.
//!
//! Selecting basic activates it synchronously. Selecting a paid plan
//! resolves a payment customer, opens a checkout session (web) or
//! payment intent (mobile), and leaves the subscription pending until
//! the payment is reconciled.

use std::sync::Arc;

use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};
use crate::domain::subscription::{Plan, PlanSchedule, Subscription, SubscriptionError};
use crate::domain::user::User;
use crate::ports::{
    CreateCheckoutRequest, CreateCustomerRequest, CreatePaymentIntentRequest, PaymentProvider,
    SubscriptionRepository, UserRepository,
};

/// Redirect targets handed to the payment provider for web checkouts.
#[derive(Debug, Clone)]
pub struct CheckoutUrls {
    pub success_url: String,
    pub cancel_url: String,
}

/// Which client flow is paying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    /// Hosted checkout page; the caller follows a redirect URL.
    Web,

    /// In-app confirmation; the caller receives a client secret.
    Mobile,
}

/// Command to select a plan.
#[derive(Debug, Clone)]
pub struct InitiateSubscriptionCommand {
    pub user_id: UserId,
    pub plan: Plan,
    pub mode: CheckoutMode,
}

/// Result of plan selection.
#[derive(Debug, Clone)]
pub enum InitiateSubscriptionResult {
    /// Basic plan applied immediately.
    BasicActivated { subscription: Subscription },

    /// Paid checkout opened; caller redirects to `checkout_url`.
    CheckoutStarted {
        subscription: Subscription,
        session_id: String,
        checkout_url: String,
    },

    /// Payment intent opened; caller confirms with `client_secret`.
    IntentStarted {
        subscription: Subscription,
        intent_id: String,
        client_secret: String,
    },
}

/// Handler for plan selection.
pub struct InitiateSubscriptionHandler {
    users: Arc<dyn UserRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    payment_provider: Arc<dyn PaymentProvider>,
    schedule: PlanSchedule,
    urls: CheckoutUrls,
}

impl InitiateSubscriptionHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        payment_provider: Arc<dyn PaymentProvider>,
        schedule: PlanSchedule,
        urls: CheckoutUrls,
    ) -> Self {
        Self {
            users,
            subscriptions,
            payment_provider,
            schedule,
            urls,
        }
    }

    pub async fn handle(
        &self,
        cmd: InitiateSubscriptionCommand,
    ) -> Result<InitiateSubscriptionResult, SubscriptionError> {
        let user = self
            .users
            .find_by_id(&cmd.user_id)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?
            .ok_or_else(|| {
                SubscriptionError::infrastructure(format!(
                    "Authenticated user {} has no account row",
                    cmd.user_id
                ))
            })?;

        let existing = self
            .subscriptions
            .find_by_user(&cmd.user_id)
            .await
            .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;

        if cmd.plan.is_basic() {
            return self.apply_basic(cmd.user_id, existing).await;
        }

        let customer_id = self.resolve_customer(&user, existing.as_ref()).await?;

        let duration_days = self
            .schedule
            .duration_days(cmd.plan)
            .ok_or_else(|| SubscriptionError::invalid_plan(cmd.plan.as_str()))?;
        let expiry_date = Timestamp::now().add_days(duration_days);

        match cmd.mode {
            CheckoutMode::Web => {
                self.start_web_checkout(cmd, existing, customer_id, expiry_date)
                    .await
            }
            CheckoutMode::Mobile => {
                self.start_mobile_checkout(cmd, existing, customer_id, expiry_date)
                    .await
            }
        }
    }

    async fn apply_basic(
        &self,
        user_id: UserId,
        existing: Option<Subscription>,
    ) -> Result<InitiateSubscriptionResult, SubscriptionError> {
        let subscription = match existing {
            Some(mut subscription) => {
                subscription.select_basic();
                self.subscriptions
                    .update(&subscription)
                    .await
                    .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;
                subscription
            }
            None => {
                let subscription = Subscription::default_basic(SubscriptionId::new(), user_id);
                self.subscriptions
                    .save(&subscription)
                    .await
                    .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;
                subscription
            }
        };

        tracing::info!(user_id = %user_id, "Applied free basic subscription");
        Ok(InitiateSubscriptionResult::BasicActivated { subscription })
    }

    /// Reuses the customer cached on the subscription when the provider
    /// still knows it; creates a fresh one otherwise.
    async fn resolve_customer(
        &self,
        user: &User,
        existing: Option<&Subscription>,
    ) -> Result<String, SubscriptionError> {
        if let Some(cached) = existing.and_then(|s| s.payment_customer_id.clone()) {
            match self.payment_provider.get_customer(&cached).await {
                Ok(Some(customer)) => return Ok(customer.id),
                Ok(None) => {
                    tracing::warn!(customer_id = %cached, "Cached payment customer no longer exists");
                }
                Err(e) => {
                    return Err(SubscriptionError::payment_failed(e.message));
                }
            }
        }

        let customer = self
            .payment_provider
            .create_customer(CreateCustomerRequest {
                user_id: user.id,
                email: user.email.clone(),
                idempotency_key: Some(format!("customer-{}", user.id)),
            })
            .await
            .map_err(|e| SubscriptionError::payment_failed(e.message))?;

        tracing::info!(user_id = %user.id, customer_id = %customer.id, "Created payment customer");
        Ok(customer.id)
    }

    async fn start_web_checkout(
        &self,
        cmd: InitiateSubscriptionCommand,
        existing: Option<Subscription>,
        customer_id: String,
        expiry_date: Timestamp,
    ) -> Result<InitiateSubscriptionResult, SubscriptionError> {
        let session = self
            .payment_provider
            .create_checkout_session(CreateCheckoutRequest {
                customer_id: customer_id.clone(),
                plan: cmd.plan,
                success_url: self.urls.success_url.clone(),
                cancel_url: self.urls.cancel_url.clone(),
            })
            .await
            .map_err(|e| SubscriptionError::payment_failed(e.message))?;

        let session_expires_at = Some(Timestamp::from_unix_secs(session.expires_at));
        let subscription = self
            .persist_pending(
                cmd.user_id,
                cmd.plan,
                existing,
                customer_id,
                session.id.clone(),
                session_expires_at,
                expiry_date,
            )
            .await?;

        tracing::info!(
            user_id = %cmd.user_id,
            plan = %cmd.plan,
            session_id = %session.id,
            "Opened checkout session"
        );

        Ok(InitiateSubscriptionResult::CheckoutStarted {
            subscription,
            session_id: session.id,
            checkout_url: session.url,
        })
    }

    async fn start_mobile_checkout(
        &self,
        cmd: InitiateSubscriptionCommand,
        existing: Option<Subscription>,
        customer_id: String,
        expiry_date: Timestamp,
    ) -> Result<InitiateSubscriptionResult, SubscriptionError> {
        let intent = self
            .payment_provider
            .create_payment_intent(CreatePaymentIntentRequest {
                customer_id: customer_id.clone(),
                plan: cmd.plan,
            })
            .await
            .map_err(|e| SubscriptionError::payment_failed(e.message))?;

        let subscription = self
            .persist_pending(
                cmd.user_id,
                cmd.plan,
                existing,
                customer_id,
                intent.id.clone(),
                None,
                expiry_date,
            )
            .await?;

        tracing::info!(
            user_id = %cmd.user_id,
            plan = %cmd.plan,
            intent_id = %intent.id,
            "Opened payment intent"
        );

        Ok(InitiateSubscriptionResult::IntentStarted {
            subscription,
            intent_id: intent.id,
            client_secret: intent.client_secret,
        })
    }

    #[allow(clippy::too_many_arguments)]
    async fn persist_pending(
        &self,
        user_id: UserId,
        plan: Plan,
        existing: Option<Subscription>,
        customer_id: String,
        session_id: String,
        session_expires_at: Option<Timestamp>,
        expiry_date: Timestamp,
    ) -> Result<Subscription, SubscriptionError> {
        match existing {
            Some(mut subscription) => {
                subscription.begin_checkout(
                    plan,
                    customer_id,
                    session_id,
                    session_expires_at,
                    expiry_date,
                );
                self.subscriptions
                    .update(&subscription)
                    .await
                    .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;
                Ok(subscription)
            }
            None => {
                let subscription = Subscription::pending_checkout(
                    SubscriptionId::new(),
                    user_id,
                    plan,
                    customer_id,
                    session_id,
                    session_expires_at,
                    expiry_date,
                );
                self.subscriptions
                    .save(&subscription)
                    .await
                    .map_err(|e| SubscriptionError::infrastructure(e.to_string()))?;
                Ok(subscription)
            }
        }
    }
}
