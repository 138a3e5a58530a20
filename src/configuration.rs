//! src/configuration.rs
use secrecy::Secret;
use serde::Deserialize;

/// Everything the signup flow reads from its environment, assembled once at
/// startup and handed to [`crate::subscribe::SubscribeController::new`].
/// Both channels are optional: a deployment missing the settings for one
/// simply never attempts that channel.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub relay: Option<RelaySettings>,
    pub backend: Option<BackendSettings>,
}

/// `RELAY_*` environment variables. The channel is enabled only when the
/// service id, template id and public key are all present.
#[derive(Debug, Clone, Deserialize)]
pub struct RelaySettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: Secret<String>,
    #[serde(default = "default_relay_api_url")]
    pub api_url: String,
}

/// `BACKEND_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub base_url: String,
}

fn default_relay_api_url() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

/// Read the channel settings from the environment. A `.env` file is
/// honoured in local development. Missing or incomplete settings disable
/// the channel rather than failing startup; a deployment with no channel at
/// all is legal, it just never delivers anything.
pub fn get_configuration() -> Settings {
    dotenvy::dotenv().ok();

    let relay = match envy::prefixed("RELAY_").from_env::<RelaySettings>() {
        Ok(relay) => Some(relay),
        Err(e) => {
            tracing::info!("relay channel disabled: {}", e);
            None
        }
    };

    let backend = match envy::prefixed("BACKEND_").from_env::<BackendSettings>() {
        Ok(backend) => Some(backend),
        Err(e) => {
            tracing::info!("backend channel disabled: {}", e);
            None
        }
    };

    Settings { relay, backend }
}
