//! Movie Explorer - Movie catalog API with tiered subscriptions.
//!
//! Users browse a movie catalog gated by subscription tier (basic, gold,
//! platinum), pay for upgrades through Stripe checkout, and receive push
//! notifications when new titles land.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
