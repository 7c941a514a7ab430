//! HTTP DTOs for subscription endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::subscription::{Plan, Subscription, SubscriptionStatus};

/// Plan selection request body.
///
/// `plan` is accepted as a free string so unknown values produce the
/// "invalid plan" error instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub plan: String,
    /// "web" (default, hosted checkout) or "mobile" (payment intent).
    #[serde(default)]
    pub mode: Option<String>,
}

/// Session-reference query string for the success/cancel callbacks.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionCallbackParams {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Subscription fields exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub id: String,
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub expiry_date: Option<String>,
    pub session_id: Option<String>,
}

impl From<&Subscription> for SubscriptionResponse {
    fn from(subscription: &Subscription) -> Self {
        Self {
            id: subscription.id.to_string(),
            plan: subscription.plan,
            status: subscription.status,
            expiry_date: subscription
                .expiry_date
                .map(|t| t.as_datetime().to_rfc3339()),
            session_id: subscription.session_id.clone(),
        }
    }
}

/// GET /subscriptions response.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionViewResponse {
    pub subscription: Option<SubscriptionResponse>,
}

/// POST /subscriptions response for the free tier.
#[derive(Debug, Clone, Serialize)]
pub struct BasicActivatedResponse {
    pub message: String,
    pub subscription_id: String,
}

/// POST /subscriptions response for a web checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutStartedResponse {
    pub checkout_url: String,
    pub session_id: String,
    pub subscription_id: String,
}

/// POST /subscriptions response for a mobile payment intent.
#[derive(Debug, Clone, Serialize)]
pub struct IntentStartedResponse {
    pub intent_id: String,
    pub client_secret: String,
    pub subscription_id: String,
}

/// Success-callback response.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedResponse {
    pub message: String,
    pub subscription_id: String,
    pub plan: Plan,
}

/// Cancel-callback response.
#[derive(Debug, Clone, Serialize)]
pub struct CancelledResponse {
    pub message: String,
    pub session_id: String,
}
