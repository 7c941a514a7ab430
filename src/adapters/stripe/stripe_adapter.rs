//! Stripe payment provider adapter.
//!
//! Talks to the Stripe REST API with form-encoded requests and basic
//! auth on the secret key. Checkout sessions use one-off `payment` mode
//! priced by the configured per-plan price ids; payment intents charge
//! the configured per-plan amount directly.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key)
//!     .with_prices("price_gold_123", "price_platinum_456");
//! let adapter = StripePaymentAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::subscription::Plan;
use crate::ports::{
    CheckoutSession, CheckoutState, CreateCheckoutRequest, CreateCustomerRequest,
    CreatePaymentIntentRequest, Customer, PaymentError, PaymentErrorCode, PaymentIntent,
    PaymentProvider, PaymentStatus,
};

use super::api_types::{StripeCheckoutSession, StripeCustomer, StripePaymentIntent};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for the Stripe API (overridable for tests).
    api_base_url: String,

    /// Price id charged for the gold plan.
    price_gold: String,

    /// Price id charged for the platinum plan.
    price_platinum: String,

    /// Amount in cents for gold payment intents.
    amount_gold_cents: i64,

    /// Amount in cents for platinum payment intents.
    amount_platinum_cents: i64,

    /// ISO currency code for payment intents.
    currency: String,
}

impl StripeConfig {
    /// Creates a configuration with placeholder prices.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
            price_gold: String::new(),
            price_platinum: String::new(),
            amount_gold_cents: 999,
            amount_platinum_cents: 1999,
            currency: "usd".to_string(),
        }
    }

    /// Sets the per-plan checkout price ids.
    pub fn with_prices(
        mut self,
        price_gold: impl Into<String>,
        price_platinum: impl Into<String>,
    ) -> Self {
        self.price_gold = price_gold.into();
        self.price_platinum = price_platinum.into();
        self
    }

    /// Sets the per-plan payment-intent amounts (cents) and currency.
    pub fn with_amounts(mut self, gold_cents: i64, platinum_cents: i64, currency: impl Into<String>) -> Self {
        self.amount_gold_cents = gold_cents;
        self.amount_platinum_cents = platinum_cents;
        self.currency = currency.into();
        self
    }

    /// Sets a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    fn price_id(&self, plan: Plan) -> Result<&str, PaymentError> {
        match plan {
            Plan::Gold => Ok(&self.price_gold),
            Plan::Platinum => Ok(&self.price_platinum),
            Plan::Basic => Err(PaymentError::provider(
                "Basic plan does not go through checkout",
            )),
        }
    }

    fn amount_cents(&self, plan: Plan) -> Result<i64, PaymentError> {
        match plan {
            Plan::Gold => Ok(self.amount_gold_cents),
            Plan::Platinum => Ok(self.amount_platinum_cents),
            Plan::Basic => Err(PaymentError::provider(
                "Basic plan does not go through checkout",
            )),
        }
    }
}

/// Stripe implementation of the `PaymentProvider` port.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripePaymentAdapter {
    /// Creates a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        idempotency_key: Option<&str>,
    ) -> Result<T, PaymentError> {
        let url = format!("{}{}", self.config.api_base_url, path);
        let mut request = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(params);

        if let Some(key) = idempotency_key {
            request = request.header("Idempotency-Key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        Self::parse_response(response, path).await
    }

    async fn get_resource<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, PaymentError> {
        let url = format!("{}{}", self.config.api_base_url, path);
        let response = self
            .http_client
            .get(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Self::parse_response(response, path).await.map(Some)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        path: &str,
    ) -> Result<T, PaymentError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(PaymentError::authentication("Stripe rejected the API key"));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(path, status = %status, error = %error_text, "Stripe API call failed");
            return Err(
                PaymentError::provider(format!("Stripe API error: {}", error_text))
                    .with_provider_code(status.as_str()),
            );
        }

        response.json().await.map_err(|e| {
            PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Failed to parse Stripe response: {}", e),
            )
        })
    }

    fn parse_session_status(payment_status: Option<&str>) -> PaymentStatus {
        match payment_status {
            Some("paid") => PaymentStatus::Paid,
            Some("unpaid") => PaymentStatus::Unpaid,
            Some("no_payment_required") => PaymentStatus::NoPaymentRequired,
            _ => PaymentStatus::Unknown,
        }
    }

    fn parse_intent_status(status: &str) -> PaymentStatus {
        match status {
            "succeeded" => PaymentStatus::Paid,
            "processing" | "requires_payment_method" | "requires_confirmation"
            | "requires_action" | "requires_capture" => PaymentStatus::Unpaid,
            _ => PaymentStatus::Unknown,
        }
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<Customer, PaymentError> {
        let params = vec![
            ("email", request.email.clone()),
            ("metadata[user_id]", request.user_id.to_string()),
        ];

        let customer: StripeCustomer = self
            .post_form("/v1/customers", &params, request.idempotency_key.as_deref())
            .await?;

        Ok(Customer {
            id: customer.id,
            email: customer.email.unwrap_or(request.email),
            created_at: customer.created,
        })
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>, PaymentError> {
        let customer: Option<StripeCustomer> = self
            .get_resource(&format!("/v1/customers/{}", customer_id))
            .await?;

        Ok(customer.filter(|c| !c.deleted).map(|c| Customer {
            id: c.id,
            email: c.email.unwrap_or_default(),
            created_at: c.created,
        }))
    }

    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let price_id = self.config.price_id(request.plan)?.to_string();

        let params = vec![
            ("customer", request.customer_id.clone()),
            ("payment_method_types[0]", "card".to_string()),
            ("line_items[0][price]", price_id),
            ("line_items[0][quantity]", "1".to_string()),
            ("mode", "payment".to_string()),
            ("success_url", request.success_url.clone()),
            ("cancel_url", request.cancel_url.clone()),
        ];

        let session: StripeCheckoutSession = self
            .post_form("/v1/checkout/sessions", &params, None)
            .await?;

        let url = session.url.ok_or_else(|| {
            PaymentError::provider("Checkout session created without a redirect URL")
        })?;

        Ok(CheckoutSession {
            id: session.id,
            url,
            expires_at: session.expires_at,
        })
    }

    async fn get_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<Option<CheckoutState>, PaymentError> {
        let session: Option<StripeCheckoutSession> = self
            .get_resource(&format!("/v1/checkout/sessions/{}", session_id))
            .await?;

        Ok(session.map(|s| CheckoutState {
            reference: s.id,
            payment_status: Self::parse_session_status(s.payment_status.as_deref()),
            provider_period_end: None,
        }))
    }

    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        let amount = self.config.amount_cents(request.plan)?;

        let params = vec![
            ("customer", request.customer_id.clone()),
            ("amount", amount.to_string()),
            ("currency", self.config.currency.clone()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
        ];

        let intent: StripePaymentIntent = self
            .post_form("/v1/payment_intents", &params, None)
            .await?;

        let client_secret = intent.client_secret.ok_or_else(|| {
            PaymentError::provider("Payment intent created without a client secret")
        })?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret,
        })
    }

    async fn get_payment_intent(
        &self,
        intent_id: &str,
    ) -> Result<Option<CheckoutState>, PaymentError> {
        let intent: Option<StripePaymentIntent> = self
            .get_resource(&format!("/v1/payment_intents/{}", intent_id))
            .await?;

        Ok(intent.map(|i| CheckoutState {
            reference: i.id,
            payment_status: Self::parse_intent_status(&i.status),
            provider_period_end: None,
        }))
    }
}
