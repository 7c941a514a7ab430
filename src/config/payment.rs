//! Payment configuration (Stripe)

use serde::Deserialize;

use crate::domain::subscription::{ExpiryPolicy, PlanSchedule};

use super::error::ValidationError;

/// Payment configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe API key
    pub stripe_api_key: String,

    /// Stripe price ID for the gold plan
    pub stripe_price_gold: String,

    /// Stripe price ID for the platinum plan
    pub stripe_price_platinum: String,

    /// Redirect target after a successful checkout
    pub success_url: String,

    /// Redirect target after an abandoned checkout
    pub cancel_url: String,

    /// Gold plan duration in days
    #[serde(default = "default_gold_days")]
    pub gold_duration_days: i64,

    /// Platinum plan duration in days
    #[serde(default = "default_platinum_days")]
    pub platinum_duration_days: i64,

    /// Expiry handling when a payment completes
    #[serde(default)]
    pub expiry_policy: ExpiryPolicy,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_test_")
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_live_")
    }

    /// Paid-tier durations as a domain schedule
    pub fn plan_schedule(&self) -> PlanSchedule {
        PlanSchedule {
            gold_days: self.gold_duration_days,
            platinum_days: self.platinum_duration_days,
        }
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__STRIPE_API_KEY"));
        }
        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if self.stripe_price_gold.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__STRIPE_PRICE_GOLD"));
        }
        if self.stripe_price_platinum.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAYMENT__STRIPE_PRICE_PLATINUM",
            ));
        }
        for url in [&self.success_url, &self.cancel_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidCheckoutUrl);
            }
        }
        if self.gold_duration_days <= 0 || self.platinum_duration_days <= 0 {
            return Err(ValidationError::InvalidPlanDuration);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            stripe_api_key: String::new(),
            stripe_price_gold: String::new(),
            stripe_price_platinum: String::new(),
            success_url: String::new(),
            cancel_url: String::new(),
            gold_duration_days: default_gold_days(),
            platinum_duration_days: default_platinum_days(),
            expiry_policy: ExpiryPolicy::default(),
        }
    }
}

fn default_gold_days() -> i64 {
    1
}

fn default_platinum_days() -> i64 {
    30
}
