//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx repositories
//! - `stripe` - payment provider over the Stripe REST API
//! - `fcm` - push notifications over the FCM HTTP v1 API
//! - `auth` - JWT issuing/validation
//! - `memory` - in-memory repositories for tests and local development
//! - `http` - axum handlers, DTOs, and routing

pub mod auth;
pub mod fcm;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod stripe;
