//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use evacnet_core::config::AppConfig;
use evacnet_database::RecordStore;
use evacnet_realtime::RealtimeEngine;
use evacnet_routing::RouteService;
use evacnet_service::{NewsService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Record store (PostgreSQL or in-memory)
    pub store: RecordStore,
    /// WebSocket relay engine
    pub realtime: Arc<RealtimeEngine>,

    // ── Services ─────────────────────────────────────────────
    /// News service
    pub news_service: Arc<NewsService>,
    /// User service
    pub user_service: Arc<UserService>,
    /// Evacuation route map service
    pub route_service: Arc<RouteService>,
}

impl AppState {
    /// Wire services over an opened store.
    pub fn new(
        config: AppConfig,
        store: RecordStore,
        route_service: RouteService,
        realtime: Arc<RealtimeEngine>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            news_service: Arc::new(NewsService::new(store.news.clone())),
            user_service: Arc::new(UserService::new(store.users.clone())),
            route_service: Arc::new(route_service),
            store,
            realtime,
        }
    }
}
