//! FCM push notification adapter.
//!
//! Implements the `PushGateway` port over the FCM HTTP v1 API, plus a
//! recording mock for tests and a no-op gateway for deployments with
//! push disabled.

mod fcm_adapter;
mod mock;
mod noop;

pub use fcm_adapter::{FcmConfig, FcmPushAdapter};
pub use mock::MockPushGateway;
pub use noop::NoopPushGateway;
