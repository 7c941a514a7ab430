//! HTTP adapter for account endpoints.
//!
//! - `POST /api/v1/signup` - Register and receive a token
//! - `POST /api/v1/login` - Exchange credentials for a token
//! - `POST /api/v1/logout` - Revoke the presented token
//! - `POST /api/v1/update_preferences` - Push registration fields

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
