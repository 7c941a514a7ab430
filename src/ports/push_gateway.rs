//! Push notification gateway port.
//!
//! Delivery is best-effort: the gateway reports a per-token outcome and
//! callers log failures rather than failing the originating request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A notification to deliver to a set of devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushMessage {
    /// Notification title.
    pub title: String,

    /// Notification body.
    pub body: String,

    /// Opaque key/value payload delivered alongside the notification.
    pub data: HashMap<String, String>,
}

impl PushMessage {
    /// Creates a message with an empty data payload.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            data: HashMap::new(),
        }
    }

    /// Adds a data entry.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

/// Delivery outcome for a single device token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushDelivery {
    pub token: String,
    pub outcome: DeliveryOutcome,
}

/// Whether the gateway accepted a message for a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// Gateway accepted the message.
    Accepted,

    /// Gateway rejected the message for this token.
    Rejected { reason: String },
}

impl DeliveryOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DeliveryOutcome::Accepted)
    }
}

/// Gateway-level failure (credentials, transport). Per-token failures
/// are reported through [`PushDelivery`] instead.
#[derive(Debug, Clone, Error)]
pub enum PushError {
    #[error("Push gateway unavailable: {0}")]
    Unavailable(String),

    #[error("Push gateway misconfigured: {0}")]
    Configuration(String),
}

/// Port for push notification gateways.
#[async_trait]
pub trait PushGateway: Send + Sync {
    /// Sends a message to each token, returning a per-token outcome.
    ///
    /// Implementations drop blank tokens and deduplicate the list before
    /// sending; the returned outcomes cover the deduplicated set.
    async fn send(
        &self,
        tokens: &[String],
        message: &PushMessage,
    ) -> Result<Vec<PushDelivery>, PushError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PushGateway) {}
    }

    #[test]
    fn message_builder_collects_data() {
        let msg = PushMessage::new("New Movie Added!", "Dune has been added.")
            .with_data("movie_id", "42")
            .with_data("url", "/movies/42");
        assert_eq!(msg.data.len(), 2);
        assert_eq!(msg.data.get("movie_id").map(String::as_str), Some("42"));
    }

    #[test]
    fn outcome_reports_acceptance() {
        assert!(DeliveryOutcome::Accepted.is_accepted());
        assert!(!DeliveryOutcome::Rejected {
            reason: "invalid token".to_string()
        }
        .is_accepted());
    }
}
