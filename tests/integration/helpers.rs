//! Shared test helpers for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use evacnet_api::{AppState, build_router};
use evacnet_core::config::{AppConfig, DatabaseBackend};
use evacnet_core::error::AppError;
use evacnet_core::result::AppResult;
use evacnet_database::RecordStore;
use evacnet_realtime::RealtimeEngine;
use evacnet_routing::{Coordinate, RouteService, RouteSource};

/// Sample polyline decoding to four points.
pub const SAMPLE_POLYLINE: &str = "BFoz5xJ67i1B1B7PzIhaxL7Y";

/// Route source answering with canned polylines and recording requests.
#[derive(Debug, Default)]
pub struct FakeRouteSource {
    pub polylines: Vec<String>,
    pub fail: bool,
    pub requests: Mutex<Vec<(Coordinate, Coordinate)>>,
}

#[async_trait]
impl RouteSource for FakeRouteSource {
    async fn fetch_polylines(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> AppResult<Vec<String>> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push((origin, destination));
        if self.fail {
            return Err(AppError::external_service("Routing API returned 401"));
        }
        Ok(self.polylines.clone())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Relay engine behind `/ws/stream`
    pub realtime: Arc<RealtimeEngine>,
    /// Route source the route map handler talks to
    pub routes: Arc<FakeRouteSource>,
}

impl TestApp {
    /// Create a new test application over the in-memory store
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_routes(
            config,
            FakeRouteSource {
                polylines: vec![SAMPLE_POLYLINE.to_string()],
                ..Default::default()
            },
        )
    }

    /// Create a test application with a specific route source
    pub fn with_routes(config: AppConfig, routes: FakeRouteSource) -> Self {
        let routes = Arc::new(routes);
        let route_service = RouteService::new(routes.clone(), &config.routing)
            .expect("Failed to build route service");
        let realtime = Arc::new(RealtimeEngine::new(config.realtime.clone()));

        let state = AppState::new(
            config,
            RecordStore::memory(),
            route_service,
            Arc::clone(&realtime),
        );

        Self {
            router: build_router(state),
            realtime,
            routes,
        }
    }

    /// Serve the router on an ephemeral local port
    pub async fn spawn(&self) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("No local address");
        let app = self.router.clone();

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server failed");
        });

        addr
    }

    /// Wait until the relay registry holds exactly `count` connections
    pub async fn wait_for_connections(&self, count: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while self.realtime.registry.len().await != count {
            assert!(
                tokio::time::Instant::now() < deadline,
                "registry never reached {count} connections"
            );
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Configuration with the in-memory backend and a dummy routing key
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.backend = DatabaseBackend::Memory;
    config.routing.api_key = "test-key".to_string();
    config
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// String field of the body, panicking when absent
    pub fn str(&self, field: &str) -> &str {
        self.body
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("missing string field {field} in {:?}", self.body))
    }
}
