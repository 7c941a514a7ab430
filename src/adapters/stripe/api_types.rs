//! Wire types for the subset of the Stripe API this adapter touches.

use serde::Deserialize;

/// Customer object.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeCustomer {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub deleted: bool,
}

/// Checkout session object.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeCheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub expires_at: i64,
    /// "paid", "unpaid", or "no_payment_required".
    #[serde(default)]
    pub payment_status: Option<String>,
}

/// Payment intent object.
#[derive(Debug, Clone, Deserialize)]
pub struct StripePaymentIntent {
    pub id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    /// "succeeded", "processing", "requires_payment_method", ...
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_session_parses_a_paid_response() {
        let json = r#"{
            "id": "cs_test_123",
            "object": "checkout.session",
            "expires_at": 1704153600,
            "payment_status": "paid",
            "url": null
        }"#;
        let session: StripeCheckoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "cs_test_123");
        assert_eq!(session.payment_status.as_deref(), Some("paid"));
        assert!(session.url.is_none());
    }

    #[test]
    fn payment_intent_parses_with_client_secret() {
        let json = r#"{
            "id": "pi_123",
            "client_secret": "pi_123_secret_456",
            "status": "requires_payment_method"
        }"#;
        let intent: StripePaymentIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.client_secret.as_deref(), Some("pi_123_secret_456"));
    }

    #[test]
    fn deleted_customer_stub_parses() {
        let json = r#"{"id": "cus_1", "deleted": true}"#;
        let customer: StripeCustomer = serde_json::from_str(json).unwrap();
        assert!(customer.deleted);
        assert!(customer.email.is_none());
    }
}
