//! Recording mock for the push gateway.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{DeliveryOutcome, PushDelivery, PushError, PushGateway, PushMessage};

/// Records every send; accepts all tokens unless constructed failing.
#[derive(Default)]
pub struct MockPushGateway {
    sent: Mutex<Vec<(Vec<String>, PushMessage)>>,
    fail: bool,
}

impl MockPushGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose sends fail with a gateway error.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Returns every (tokens, message) batch sent so far.
    pub fn sent(&self) -> Vec<(Vec<String>, PushMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushGateway for MockPushGateway {
    async fn send(
        &self,
        tokens: &[String],
        message: &PushMessage,
    ) -> Result<Vec<PushDelivery>, PushError> {
        if self.fail {
            return Err(PushError::Unavailable("Simulated gateway outage".to_string()));
        }

        self.sent
            .lock()
            .unwrap()
            .push((tokens.to_vec(), message.clone()));

        Ok(tokens
            .iter()
            .map(|token| PushDelivery {
                token: token.clone(),
                outcome: DeliveryOutcome::Accepted,
            })
            .collect())
    }
}
