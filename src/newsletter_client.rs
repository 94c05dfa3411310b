use reqwest::{Client, ClientBuilder, StatusCode, Url};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::configuration::NewsletterSettings;

/// Client for the external subscription endpoint.
///
/// The endpoint is an opaque third-party collaborator: it receives
/// `{"email": ...}` and whatever it does with it (deduplication, confirmation
/// mail, list management) is outside this system.
pub struct NewsletterClient {
    http_client: Client,
    endpoint: Url,
}

#[derive(Serialize)]
struct SubscribeRequest<'a> {
    email: Option<&'a str>,
}

#[derive(thiserror::Error, Debug)]
pub enum SubscribeError {
    #[error("failed to reach the subscription endpoint")]
    Transport(#[source] reqwest::Error),
    #[error("the subscription endpoint returned {0}")]
    Downstream(StatusCode),
}

impl NewsletterClient {
    pub fn new(config: NewsletterSettings) -> anyhow::Result<Self> {
        let endpoint = Url::parse(config.endpoint.expose_secret())
            .map_err(|e| anyhow::anyhow!("Failed to parse the subscription endpoint: {e}"))?;

        let http_client = ClientBuilder::new()
            .timeout(config.timeout())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build the subscription http client: {e}"))?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    /// Forward a single subscription. The email value is passed through
    /// verbatim; a missing email is forwarded as JSON `null` and left to the
    /// endpoint's own validation.
    #[tracing::instrument(name = "Forwarding a subscription", skip(self))]
    pub async fn subscribe(&self, email: Option<&str>) -> Result<(), SubscribeError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&SubscribeRequest { email })
            .send()
            .await
            .map_err(SubscribeError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubscribeError::Downstream(status));
        }

        // The endpoint's reply is informational only.
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(response = %body, "Subscription endpoint replied");
        Ok(())
    }
}
