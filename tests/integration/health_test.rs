//! Integration tests for the health endpoint.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str("status"), "ok");
    assert_eq!(response.str("database"), "connected");
    assert_eq!(response.body["ws_connections"], 0);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
