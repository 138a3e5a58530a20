//! src/channels/backend.rs
use reqwest::Client;
use reqwest::StatusCode;
use serde::Serialize;

use crate::configuration::BackendSettings;
use crate::domain::Email;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("backend request failed")]
    Transport(#[from] reqwest::Error),
    #[error("backend answered with status {0}")]
    UnexpectedStatus(StatusCode),
}

#[derive(Debug, Serialize)]
struct SubscribeBody<'a> {
    email: &'a str,
}

/// Client for the subscription endpoint of our own backend.
#[derive(Debug)]
pub struct BackendClient {
    http_client: Client,
    base_url: String,
}

impl From<BackendSettings> for BackendClient {
    fn from(settings: BackendSettings) -> Self {
        Self {
            http_client: Client::new(),
            base_url: settings.base_url,
        }
    }
}

impl BackendClient {
    /// Any 2xx answer counts as a recorded subscription. A non-2xx answer
    /// may carry a JSON error payload; it is logged when present and
    /// ignored when it cannot be parsed.
    #[tracing::instrument(name = "Posting subscription to the backend", skip(self))]
    pub async fn subscribe(&self, email: &Email) -> Result<(), Error> {
        let response = self
            .http_client
            .post(format!("{}/api/subscribe", self.base_url))
            .header("content-type", "application/json")
            .json(&SubscribeBody {
                email: email.as_ref(),
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let payload = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or_default();
        tracing::error!("backend rejected the subscription ({}): {}", status, payload);

        Err(Error::UnexpectedStatus(status))
    }
}
