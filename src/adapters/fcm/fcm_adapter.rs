//! FCM HTTP v1 push adapter.
//!
//! Authenticates with a service-account JWT (RS256) exchanged for an
//! OAuth2 access token, then posts one message per device token. A
//! rejected token becomes a per-token outcome; only credential or
//! transport failures abort the whole send.

use async_trait::async_trait;
use futures::future::join_all;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::ports::{DeliveryOutcome, PushDelivery, PushError, PushGateway, PushMessage};

const FCM_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// FCM service-account configuration.
#[derive(Clone)]
pub struct FcmConfig {
    /// Firebase project id.
    project_id: String,

    /// Service-account email (the JWT issuer).
    client_email: String,

    /// Service-account RSA private key, PEM-encoded.
    private_key_pem: SecretString,

    /// OAuth2 token endpoint.
    token_uri: String,

    /// FCM API base URL (overridable for tests).
    api_base_url: String,
}

impl FcmConfig {
    pub fn new(
        project_id: impl Into<String>,
        client_email: impl Into<String>,
        private_key_pem: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            client_email: client_email.into(),
            private_key_pem: SecretString::new(private_key_pem.into()),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            api_base_url: "https://fcm.googleapis.com".to_string(),
        }
    }

    /// Sets a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[derive(Serialize)]
struct ServiceAccountClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Serialize)]
struct FcmSend<'a> {
    message: FcmMessage<'a>,
}

#[derive(Serialize)]
struct FcmMessage<'a> {
    token: &'a str,
    notification: FcmNotification<'a>,
    data: &'a std::collections::HashMap<String, String>,
}

#[derive(Serialize)]
struct FcmNotification<'a> {
    title: &'a str,
    body: &'a str,
}

/// FCM implementation of the `PushGateway` port.
pub struct FcmPushAdapter {
    config: FcmConfig,
    http_client: reqwest::Client,
}

impl FcmPushAdapter {
    /// Creates a new FCM adapter with the given configuration.
    pub fn new(config: FcmConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Signs a short-lived service-account JWT and exchanges it for an
    /// OAuth2 access token.
    async fn fetch_access_token(&self) -> Result<String, PushError> {
        let key = EncodingKey::from_rsa_pem(
            self.config.private_key_pem.expose_secret().as_bytes(),
        )
        .map_err(|e| {
            PushError::Configuration(format!("Invalid service-account private key: {}", e))
        })?;

        let now = Timestamp::now().as_unix_secs();
        let claims = ServiceAccountClaims {
            iss: &self.config.client_email,
            scope: FCM_SCOPE,
            aud: &self.config.token_uri,
            iat: now,
            exp: now + 3600,
        };

        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| PushError::Configuration(format!("Failed to sign JWT: {}", e)))?;

        let response = self
            .http_client
            .post(&self.config.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)])
            .send()
            .await
            .map_err(|e| PushError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Unavailable(format!(
                "OAuth2 token exchange failed: {}",
                body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| PushError::Unavailable(format!("Malformed token response: {}", e)))?;

        Ok(token.access_token)
    }

    async fn send_one(
        &self,
        access_token: &str,
        token: String,
        message: &PushMessage,
    ) -> PushDelivery {
        let url = format!(
            "{}/v1/projects/{}/messages:send",
            self.config.api_base_url, self.config.project_id
        );

        let payload = FcmSend {
            message: FcmMessage {
                token: &token,
                notification: FcmNotification {
                    title: &message.title,
                    body: &message.body,
                },
                data: &message.data,
            },
        };

        let result = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(&payload)
            .send()
            .await;

        let outcome = match result {
            Ok(response) if response.status().is_success() => DeliveryOutcome::Accepted,
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(status = %status, body = %body, "FCM rejected message");
                DeliveryOutcome::Rejected {
                    reason: format!("{}: {}", status, body),
                }
            }
            Err(e) => DeliveryOutcome::Rejected {
                reason: e.to_string(),
            },
        };

        PushDelivery { token, outcome }
    }
}

/// Drops blank tokens and deduplicates while preserving order.
fn sanitize_tokens(tokens: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl PushGateway for FcmPushAdapter {
    async fn send(
        &self,
        tokens: &[String],
        message: &PushMessage,
    ) -> Result<Vec<PushDelivery>, PushError> {
        let tokens = sanitize_tokens(tokens);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let access_token = self.fetch_access_token().await?;

        let sends = tokens
            .into_iter()
            .map(|token| self.send_one(&access_token, token, message));
        let deliveries = join_all(sends).await;

        let rejected = deliveries
            .iter()
            .filter(|d| !d.outcome.is_accepted())
            .count();
        tracing::info!(
            total = deliveries.len(),
            rejected,
            "FCM send batch finished"
        );

        Ok(deliveries)
    }
}
