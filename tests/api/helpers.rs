//! tests/api/helpers.rs

use bumex::configuration::get_configuration;
use bumex::startup::Application;
use bumex::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use uuid::Uuid;
use wiremock::matchers::{method, path};
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

pub const PASSWORD: &str = "correct horse battery staple";

pub struct Test {
    pub address: String,
    pub identity_server: MockServer,
    pub api_client: reqwest::Client,
}

impl Test {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_html(&self, path: &str) -> String {
        self.get(path).await.text().await.unwrap()
    }

    pub async fn post_form<Body>(&self, path: &str, form: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}{}", self.address, path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_signup(&self, name: &str, email: &str) -> reqwest::Response {
        let form = [
            ("name", name),
            ("email", email),
            ("password", PASSWORD),
            ("password_check", PASSWORD),
        ];
        self.post_form("/signup", &form).await
    }

    pub async fn post_login(&self, email: &str, password: &str) -> reqwest::Response {
        let form = [("email", email), ("password", password)];
        self.post_form("/login", &form).await
    }

    /// Mount a token endpoint that accepts any credentials and log in.
    pub async fn log_in(&self, email: &str) -> Uuid {
        let user_id = Uuid::new_v4();
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "user_id": user_id })),
            )
            .mount(&self.identity_server)
            .await;

        let response = self.post_login(email, PASSWORD).await;
        assert_is_redirect_to(&response, "/board");
        user_id
    }
}

pub async fn setup() -> Test {
    Lazy::force(&TRACING);

    // Start the identity provider stand-in
    let identity_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;
    config.application.secure_cookies = false;
    config.set_identity_url(identity_server.uri());

    // Launch the server
    let app = Application::build(config).expect("Failed to build server.");
    let address = format!("http://127.0.0.1:{}", app.port());

    // Launch the server as a background task
    let _ = tokio::spawn(app.run());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    Test {
        address,
        identity_server,
        api_client,
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}

/// The `Location` of a redirect carrying a signed error message.
pub fn error_redirect_location(response: &reqwest::Response, page: &str) -> String {
    assert_eq!(response.status().as_u16(), 303);
    let location = response
        .headers()
        .get("Location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(
        location.starts_with(&format!("{}?error=", page)),
        "Unexpected redirect to {}",
        location
    );
    location
}
