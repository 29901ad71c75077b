//! Integration tests for the evacuation route map.

use axum::http::StatusCode;

use crate::helpers::{FakeRouteSource, SAMPLE_POLYLINE, TestApp, test_config};

#[tokio::test]
async fn test_route_map_with_defaults() {
    let app = TestApp::new();

    let response = app.request("GET", "/route_map", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let route = response.body["route_map"].as_array().expect("route_map array");
    assert_eq!(route.len(), 4);
    let first = (
        route[0][0].as_f64().expect("lat"),
        route[0][1].as_f64().expect("lon"),
    );
    assert!((first.0 - 50.10228).abs() < 1e-9 && (first.1 - 8.69821).abs() < 1e-9);

    let areas = response.body["restrict_areas"]
        .as_array()
        .expect("restrict_areas array");
    assert_eq!(areas.len(), 5);
    assert_eq!(areas.first(), areas.last());

    let requests = app.routes.requests.lock().expect("request log");
    let (origin, destination) = requests[0];
    assert_eq!(origin.lat, 53.3441);
    assert_eq!(destination.lon, -6.2672);
}

#[tokio::test]
async fn test_route_map_hyphenated_alias() {
    let app = TestApp::new();

    let underscore = app.request("GET", "/route_map", None).await;
    let hyphen = app.request("GET", "/route-map", None).await;

    assert_eq!(hyphen.status, StatusCode::OK);
    assert_eq!(hyphen.body, underscore.body);
}

#[tokio::test]
async fn test_route_map_honors_start_and_end() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/route_map?start=53.35,-6.26&end=53.36,-6.25", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let requests = app.routes.requests.lock().expect("request log");
    let (origin, destination) = requests[0];
    assert_eq!((origin.lat, origin.lon), (53.35, -6.26));
    assert_eq!((destination.lat, destination.lon), (53.36, -6.25));
}

#[tokio::test]
async fn test_route_map_bad_start_is_bad_request() {
    let app = TestApp::new();

    let response = app.request("GET", "/route_map?start=north", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.str("error"), "VALIDATION");
    assert!(app.routes.requests.lock().expect("request log").is_empty());
}

#[tokio::test]
async fn test_route_map_sections_concatenated() {
    let app = TestApp::with_routes(
        test_config(),
        FakeRouteSource {
            polylines: vec![SAMPLE_POLYLINE.to_string(), SAMPLE_POLYLINE.to_string()],
            ..Default::default()
        },
    );

    let response = app.request("GET", "/route_map", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["route_map"].as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn test_route_map_upstream_failure_is_server_error() {
    let app = TestApp::with_routes(
        test_config(),
        FakeRouteSource {
            fail: true,
            ..Default::default()
        },
    );

    let response = app.request("GET", "/route_map", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.str("error"), "EXTERNAL_SERVICE");
}

#[tokio::test]
async fn test_route_map_corrupt_polyline_is_server_error() {
    let app = TestApp::with_routes(
        test_config(),
        FakeRouteSource {
            polylines: vec!["BFoz5x!".to_string()],
            ..Default::default()
        },
    );

    let response = app.request("GET", "/route_map", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}
