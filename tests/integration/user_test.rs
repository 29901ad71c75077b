//! Integration tests for user CRUD.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_user_lifecycle() {
    let app = TestApp::new();

    let created = app
        .request(
            "POST",
            "/users",
            Some(json!({ "username": "warden", "email": "warden@example.org" })),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.str("message"), "User added successfully");
    let id = created.str("user_id").to_string();

    let listed = app.request("GET", "/users", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["users"].as_array().map(Vec::len), Some(1));

    let updated = app
        .request(
            "PUT",
            &format!("/users/{id}"),
            Some(json!({ "username": "chief-warden", "email": "chief@example.org" })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.str("message"), "User updated successfully");
    assert_eq!(updated.body["user"]["username"], "chief-warden");

    let fetched = app.request("GET", &format!("/users/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.str("email"), "chief@example.org");

    let deleted = app.request("DELETE", &format!("/users/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.str("message"),
        format!("User with user_id {id} successfully deleted.")
    );

    let again = app.request("DELETE", &format!("/users/{id}"), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.str("detail"), format!("User with user_id {id} not found."));
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let app = TestApp::new();

    let created = app
        .request(
            "POST",
            "/users",
            Some(json!({ "username": "warden", "email": "not-an-email" })),
        )
        .await;
    assert_eq!(created.status, StatusCode::BAD_REQUEST);
    assert_eq!(created.str("error"), "VALIDATION");
}

#[tokio::test]
async fn test_blank_username_rejected() {
    let app = TestApp::new();

    let created = app
        .request(
            "POST",
            "/users",
            Some(json!({ "username": "", "email": "a@example.org" })),
        )
        .await;
    assert_eq!(created.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_field_rejected_by_extractor() {
    let app = TestApp::new();

    let created = app
        .request("POST", "/users", Some(json!({ "username": "warden" })))
        .await;
    assert!(created.status.is_client_error(), "got {}", created.status);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = TestApp::new();

    let fetched = app
        .request("GET", "/users/user_00000000000040008000000000000000", None)
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    assert_eq!(fetched.str("error"), "NOT_FOUND");
}
