//! Route definitions for the EvacNet HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(news_routes())
        .merge(user_routes())
        .merge(route_map_routes())
        .merge(health_routes())
        .route("/ws/stream", get(handlers::ws::ws_stream))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// News bulletin CRUD
fn news_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/news",
            get(handlers::news::list_news).post(handlers::news::create_news),
        )
        .route(
            "/news/{id}",
            get(handlers::news::get_news)
                .put(handlers::news::update_news)
                .delete(handlers::news::delete_news),
        )
}

/// User CRUD
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
}

/// Evacuation route map, under both spellings clients use
fn route_map_routes() -> Router<AppState> {
    Router::new()
        .route("/route_map", get(handlers::route::route_map))
        .route("/route-map", get(handlers::route::route_map))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
