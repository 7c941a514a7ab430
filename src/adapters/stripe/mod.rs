//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port over the Stripe REST API:
//! customers, hosted checkout sessions (web), payment intents (mobile),
//! and retrieve-based payment reconciliation.

mod api_types;
mod mock_payment_provider;
mod stripe_adapter;

pub use mock_payment_provider::MockPaymentProvider;
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
