//! Mock payment provider for testing.
//!
//! Scripted implementation of `PaymentProvider`: references starting
//! with `cs_` resolve as checkout sessions, `pi_` as payment intents,
//! and the reported payment status is configurable.

use async_trait::async_trait;

use crate::ports::{
    CheckoutSession, CheckoutState, CreateCheckoutRequest, CreateCustomerRequest,
    CreatePaymentIntentRequest, Customer, PaymentError, PaymentIntent, PaymentProvider,
    PaymentStatus,
};

/// Configurable mock for `PaymentProvider`.
pub struct MockPaymentProvider {
    payment_status: PaymentStatus,
    provider_period_end: Option<i64>,
    fail: bool,
}

impl MockPaymentProvider {
    /// Happy-path mock: everything succeeds, retrieved checkouts are paid.
    pub fn new() -> Self {
        Self {
            payment_status: PaymentStatus::Paid,
            provider_period_end: None,
            fail: false,
        }
    }

    /// Mock whose every operation fails with a provider error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Overrides the payment status reported by retrieve calls.
    pub fn with_payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = status;
        self
    }

    /// Makes retrieve calls report a provider period end.
    pub fn with_provider_period_end(mut self, period_end: i64) -> Self {
        self.provider_period_end = Some(period_end);
        self
    }

    fn check_available(&self) -> Result<(), PaymentError> {
        if self.fail {
            Err(PaymentError::provider("Simulated provider failure"))
        } else {
            Ok(())
        }
    }
}

impl Default for MockPaymentProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<Customer, PaymentError> {
        self.check_available()?;
        Ok(Customer {
            id: "cus_test123".to_string(),
            email: request.email,
            created_at: 1_704_067_200,
        })
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>, PaymentError> {
        self.check_available()?;
        if !customer_id.starts_with("cus_") {
            return Ok(None);
        }
        Ok(Some(Customer {
            id: customer_id.to_string(),
            email: "test@example.com".to_string(),
            created_at: 1_704_067_200,
        }))
    }

    async fn create_checkout_session(
        &self,
        _request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        self.check_available()?;
        Ok(CheckoutSession {
            id: "cs_test123".to_string(),
            url: "https://checkout.stripe.com/c/pay/cs_test123".to_string(),
            expires_at: 1_704_153_600,
        })
    }

    async fn get_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<Option<CheckoutState>, PaymentError> {
        self.check_available()?;
        if !session_id.starts_with("cs_") {
            return Ok(None);
        }
        Ok(Some(CheckoutState {
            reference: session_id.to_string(),
            payment_status: self.payment_status,
            provider_period_end: self.provider_period_end,
        }))
    }

    async fn create_payment_intent(
        &self,
        _request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        self.check_available()?;
        Ok(PaymentIntent {
            id: "pi_test123".to_string(),
            client_secret: "pi_test123_secret_456".to_string(),
        })
    }

    async fn get_payment_intent(
        &self,
        intent_id: &str,
    ) -> Result<Option<CheckoutState>, PaymentError> {
        self.check_available()?;
        if !intent_id.starts_with("pi_") {
            return Ok(None);
        }
        Ok(Some(CheckoutState {
            reference: intent_id.to_string(),
            payment_status: self.payment_status,
            provider_period_end: self.provider_period_end,
        }))
    }
}
