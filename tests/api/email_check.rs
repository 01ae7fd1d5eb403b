//! tests/api/email_check.rs

use crate::helpers::setup;

const MESSAGE: &str = "Access restricted to BUMEX employees only. Please use your @bumex.mr email.";

async fn check(query: &str) -> serde_json::Value {
    let test = setup().await;
    let response = test.get(&format!("/api/email_check{}", query)).await;
    assert_eq!(200, response.status().as_u16());
    response.json().await.expect("Failed to parse response body")
}

#[tokio::test]
async fn company_email_is_valid() {
    let body = check("?email=user%40bumex.mr").await;
    assert_eq!(body, serde_json::json!({ "valid": true, "error": null }));
}

#[tokio::test]
async fn company_email_with_case_and_whitespace_is_valid() {
    let body = check("?email=USER%40BUMEX.MR%20%20").await;
    assert_eq!(body, serde_json::json!({ "valid": true, "error": null }));
}

#[tokio::test]
async fn foreign_email_is_rejected_with_the_access_message() {
    let body = check("?email=user%40gmail.com").await;
    assert_eq!(body, serde_json::json!({ "valid": false, "error": MESSAGE }));
}

#[tokio::test]
async fn partial_input_without_at_symbol_has_no_error() {
    let body = check("?email=notanemail").await;
    assert_eq!(body, serde_json::json!({ "valid": false, "error": null }));
}

#[tokio::test]
async fn empty_and_missing_email_have_no_error() {
    for query in ["?email=", ""] {
        let body = check(query).await;
        assert_eq!(
            body,
            serde_json::json!({ "valid": false, "error": null }),
            "Unexpected answer for query {:?}",
            query
        );
    }
}
