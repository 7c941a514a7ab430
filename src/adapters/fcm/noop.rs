//! No-op push gateway for deployments without FCM credentials.

use async_trait::async_trait;

use crate::ports::{PushDelivery, PushError, PushGateway, PushMessage};

/// Discards every message. Used when push is disabled in configuration.
pub struct NoopPushGateway;

#[async_trait]
impl PushGateway for NoopPushGateway {
    async fn send(
        &self,
        tokens: &[String],
        message: &PushMessage,
    ) -> Result<Vec<PushDelivery>, PushError> {
        tracing::debug!(
            tokens = tokens.len(),
            title = %message.title,
            "Push disabled, dropping notification"
        );
        Ok(Vec::new())
    }
}
