//! tests/api/login.rs

use crate::helpers::{assert_is_redirect_to, error_redirect_location, setup, PASSWORD};
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn login_with_a_foreign_email_is_rejected_without_calling_the_provider() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.identity_server)
        .await;

    // Act
    let response = test.post_login("vall@yahoo.fr", PASSWORD).await;

    // Assert
    let location = error_redirect_location(&response, "/login");
    let html = test.get_html(&location).await;
    assert!(html.contains(
        "Access restricted to BUMEX employees only. Please use your @bumex.mr email."
    ));
}

#[tokio::test]
async fn an_error_message_is_shown_on_failure_and_gone_on_reload() {
    // Arrange
    let test = setup().await;

    Mock::given(path("/token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&test.identity_server)
        .await;

    // Act - Part 1 - Try to login
    let response = test.post_login("vall@bumex.mr", "wrong password").await;
    let location = error_redirect_location(&response, "/login");

    // Act - Part 2 - Follow the redirect
    let html = test.get_html(&location).await;
    assert!(html.contains("<p><i>Invalid email or password.</i></p>"));

    // Act - Part 3 - Reload the login page
    let html = test.get_html("/login").await;
    assert!(!html.contains("Invalid email or password."));
}

#[tokio::test]
async fn credentials_are_forwarded_normalized() {
    let test = setup().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_json(serde_json::json!({
            "email": "vall@bumex.mr",
            "password": PASSWORD,
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "user_id": uuid::Uuid::new_v4() })),
        )
        .expect(1)
        .mount(&test.identity_server)
        .await;

    let response = test.post_login("  VALL@bumex.MR", PASSWORD).await;

    assert_is_redirect_to(&response, "/board");
}

#[tokio::test]
async fn empty_password_is_rejected() {
    let test = setup().await;

    let response = test.post_login("vall@bumex.mr", "").await;

    let location = error_redirect_location(&response, "/login");
    let html = test.get_html(&location).await;
    assert!(html.contains("Please enter your password."));
}

#[tokio::test]
async fn login_fails_if_the_identity_provider_is_down() {
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&test.identity_server)
        .await;

    let response = test.post_login("vall@bumex.mr", PASSWORD).await;

    assert_eq!(response.status().as_u16(), 500);
}
