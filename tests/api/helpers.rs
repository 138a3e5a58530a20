//! tests/api/helpers.rs

use once_cell::sync::Lazy;
use secrecy::Secret;
use signup::configuration::{BackendSettings, RelaySettings, Settings};
use signup::subscribe::SubscribeController;
use signup::telemetry::{get_subscriber, init_subscriber};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test | bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct Test {
    pub relay_server: MockServer,
    pub backend_server: MockServer,
    pub controller: SubscribeController,
}

/// Spin up one mock server per channel and wire a controller to the
/// requested subset of them. Unconfigured channels keep their server
/// around so the tests can assert it was never called.
pub async fn setup(with_relay: bool, with_backend: bool) -> Test {
    Lazy::force(&TRACING);

    let relay_server = MockServer::start().await;
    let backend_server = MockServer::start().await;

    let settings = Settings {
        relay: with_relay.then(|| RelaySettings {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: Secret::new("public-key-test".to_string()),
            api_url: relay_server.uri(),
        }),
        backend: with_backend.then(|| BackendSettings {
            base_url: backend_server.uri(),
        }),
    };

    Test {
        controller: SubscribeController::new(settings),
        relay_server,
        backend_server,
    }
}

/// Fail the test if any request reaches the given server.
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

/// The email address the relay was asked to render, pulled out of the one
/// captured request body.
pub async fn relay_recipient(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    let request = if requests.len() == 1 {
        &requests[0]
    } else {
        panic!(
            "Expected 1 relay request but instead {} were sent.",
            requests.len()
        );
    };

    let body: serde_json::Value =
        serde_json::from_slice(&request.body).expect("Failed to parse relay request body");

    body["template_params"]["user_email"]
        .as_str()
        .expect("Relay request body carried no user_email")
        .to_string()
}
