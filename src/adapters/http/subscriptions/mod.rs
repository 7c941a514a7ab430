//! HTTP adapter for subscription endpoints.
//!
//! - `GET /api/v1/subscriptions` - Current user's subscription
//! - `POST /api/v1/subscriptions` - Select a plan (basic or paid checkout)
//! - `GET /api/v1/subscriptions/success?session_id=` - Payment callback
//! - `GET /api/v1/subscriptions/cancel?session_id=` - Abandon callback
//! - `GET /api/v1/subscriptions/status` - Re-sync with the provider

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::subscription_routes;
