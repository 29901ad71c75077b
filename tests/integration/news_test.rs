//! Integration tests for news bulletin CRUD.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn bulletin(title: &str) -> serde_json::Value {
    json!({
        "author_id": "author-1",
        "cover_link": "https://example.org/cover.png",
        "title": title,
        "subtitle": "Stay away from the quays",
        "location": "Dublin 2",
        "views": 3,
    })
}

#[tokio::test]
async fn test_news_lifecycle() {
    let app = TestApp::new();

    let created = app.request("POST", "/news", Some(bulletin("Flooding"))).await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.str("message"), "News added successfully");
    let id = created.str("news_id").to_string();

    let fetched = app.request("GET", &format!("/news/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.str("title"), "Flooding");
    assert_eq!(fetched.body["views"], 3);

    let updated = app
        .request(
            "PUT",
            &format!("/news/{id}"),
            Some(json!({
                "cover_link": "https://example.org/new.png",
                "title": "Flooding update",
                "subtitle": "Water receding",
                "location": "Dublin 2",
                "views": 10,
            })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.str("message"), "News updated successfully");
    assert_eq!(updated.body["news"]["title"], "Flooding update");
    assert_eq!(updated.body["news"]["author_id"], "author-1");
    assert_eq!(updated.body["news"]["views"], 10);

    let deleted = app.request("DELETE", &format!("/news/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.str("message"),
        format!("News with news_id {id} successfully deleted.")
    );

    let gone = app.request("GET", &format!("/news/{id}"), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_news_newest_first() {
    let app = TestApp::new();

    let first = app.request("POST", "/news", Some(bulletin("First"))).await;
    let second = app.request("POST", "/news", Some(bulletin("Second"))).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);

    let listed = app.request("GET", "/news", None).await;
    assert_eq!(listed.status, StatusCode::OK);

    let titles: Vec<&str> = listed.body["news"]
        .as_array()
        .expect("news array")
        .iter()
        .filter_map(|n| n["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Second", "First"]);
}

#[tokio::test]
async fn test_list_news_empty() {
    let app = TestApp::new();

    let listed = app.request("GET", "/news", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["news"], json!([]));
}

#[tokio::test]
async fn test_views_default_to_zero() {
    let app = TestApp::new();

    let mut body = bulletin("No views");
    body.as_object_mut().expect("object").remove("views");

    let created = app.request("POST", "/news", Some(body)).await;
    assert_eq!(created.status, StatusCode::OK);

    let id = created.str("news_id");
    let fetched = app.request("GET", &format!("/news/{id}"), None).await;
    assert_eq!(fetched.body["views"], 0);
}

#[tokio::test]
async fn test_unknown_news_is_not_found() {
    let app = TestApp::new();
    let id = "news_00000000000040008000000000000000";

    let fetched = app.request("GET", &format!("/news/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    assert_eq!(fetched.str("error"), "NOT_FOUND");
    assert_eq!(
        fetched.str("detail"),
        format!("News with news_id {id} not found.")
    );

    let deleted = app.request("DELETE", &format!("/news/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::NOT_FOUND);

    let updated = app
        .request(
            "PUT",
            &format!("/news/{id}"),
            Some(json!({
                "cover_link": "c",
                "title": "t",
                "subtitle": "",
                "location": "l",
                "views": 0,
            })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_news_id_is_not_found() {
    let app = TestApp::new();

    let fetched = app.request("GET", "/news/not-a-uuid", None).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_title_rejected() {
    let app = TestApp::new();

    let created = app.request("POST", "/news", Some(bulletin("   "))).await;
    assert_eq!(created.status, StatusCode::BAD_REQUEST);
    assert_eq!(created.str("error"), "VALIDATION");

    let listed = app.request("GET", "/news", None).await;
    assert_eq!(listed.body["news"], json!([]));
}

#[tokio::test]
async fn test_negative_views_rejected() {
    let app = TestApp::new();

    let mut body = bulletin("Negative");
    body["views"] = json!(-1);

    let created = app.request("POST", "/news", Some(body)).await;
    assert_eq!(created.status, StatusCode::BAD_REQUEST);
}
