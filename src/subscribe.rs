//! src/subscribe.rs
use crate::channels::{BackendClient, RelayClient};
use crate::configuration::Settings;
use crate::domain::SubscriptionRequest;

/// Where the last submission ended up. The display collaborator keys its
/// rendering on this value and must keep the submit trigger disabled while
/// it reads `Sending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Sending,
    Success,
    Error,
    Invalid,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
            SubmissionStatus::Invalid => "invalid",
        }
    }

    /// The fixed copy shown under the form. `Idle` renders nothing.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some("Sending…"),
            SubmissionStatus::Success => {
                Some("Thanks, you are subscribed to our update newsletter.")
            }
            SubmissionStatus::Error => Some("Something went wrong. Try again later."),
            SubmissionStatus::Invalid => Some("Please enter a valid email."),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owns the submission lifecycle of the signup form: validate the address,
/// attempt every configured delivery channel, report one aggregated status.
///
/// One controller instance handles one submission at a time; it holds no
/// lock, so overlap prevention is the caller's job (disable the trigger
/// while [`SubscribeController::status`] reads `Sending`).
pub struct SubscribeController {
    relay: Option<RelayClient>,
    backend: Option<BackendClient>,
    status: SubmissionStatus,
}

impl SubscribeController {
    pub fn new(settings: Settings) -> Self {
        Self {
            relay: settings.relay.map(RelayClient::from),
            backend: settings.backend.map(BackendClient::from),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Run one submission to completion.
    ///
    /// Invalid input returns [`SubmissionStatus::Invalid`] without any
    /// network activity. Otherwise both configured channels are attempted
    /// in order, each to completion, with no short-circuit after the first
    /// success; one delivered copy is enough for
    /// [`SubmissionStatus::Success`]. Channel faults never escape this
    /// method. A deployment with no channel configured still reports
    /// `Error`, since no delivery was recorded.
    ///
    /// On `Success` the caller is expected to clear its input field.
    #[tracing::instrument(
        name = "Handling a signup submission",
        skip(self),
        fields(subscriber_email = %raw_email)
    )]
    pub async fn submit(&mut self, raw_email: &str) -> SubmissionStatus {
        let request = match SubscriptionRequest::parse(raw_email) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("rejecting submission: {}", e);
                self.status = SubmissionStatus::Invalid;
                return self.status;
            }
        };

        self.status = SubmissionStatus::Sending;

        let mut delivered = false;

        match &self.relay {
            Some(relay) => match relay.send(&request.email).await {
                Ok(()) => delivered = true,
                Err(e) => tracing::error!("relay delivery failed: {:#?}", e),
            },
            None => tracing::info!("no relay configured, skipping"),
        }

        // The backend is attempted even when the relay already delivered;
        // it is the channel that actually records the subscriber.
        match &self.backend {
            Some(backend) => match backend.subscribe(&request.email).await {
                Ok(()) => delivered = true,
                Err(e) => tracing::error!("backend delivery failed: {:#?}", e),
            },
            None => tracing::info!("no backend configured, skipping"),
        }

        self.status = if delivered {
            SubmissionStatus::Success
        } else {
            SubmissionStatus::Error
        };
        self.status
    }
}
