//! src/channels/relay.rs
use reqwest::Client;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::configuration::RelaySettings;
use crate::domain::Email;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("relay request failed")]
    Transport(#[from] reqwest::Error),
    #[error("relay answered with status {0}")]
    UnexpectedStatus(StatusCode),
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    user_email: &'a str,
}

/// Client for the transactional-email relay the signup form talks to
/// directly. The relay renders the template identified by `template_id`
/// within the account's `service_id`, and authenticates requests with the
/// account's public key, carried in the request body as `user_id`.
#[derive(Debug)]
pub struct RelayClient {
    http_client: Client,
    api_url: String,
    service_id: String,
    template_id: String,
    public_key: Secret<String>,
}

impl From<RelaySettings> for RelayClient {
    fn from(settings: RelaySettings) -> Self {
        Self {
            http_client: Client::new(),
            api_url: settings.api_url,
            service_id: settings.service_id,
            template_id: settings.template_id,
            public_key: settings.public_key,
        }
    }
}

impl RelayClient {
    /// The relay reports a delivered email with a bare 200; anything else
    /// counts as a failed delivery, 2xx or not.
    #[tracing::instrument(name = "Sending email through the relay", skip(self))]
    pub async fn send(&self, email: &Email) -> Result<(), Error> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: self.public_key.expose_secret(),
            template_params: TemplateParams {
                user_email: email.as_ref(),
            },
        };

        let response = self
            .http_client
            .post(&self.api_url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(Error::UnexpectedStatus(status)),
        }
    }
}
