//! EvacNet server: evacuation news, route map, and live stream relay.
//!
//! Main entry point that wires all crates together and starts the server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use evacnet_api::{AppState, build_router};
use evacnet_core::config::AppConfig;
use evacnet_core::error::AppError;
use evacnet_database::RecordStore;
use evacnet_realtime::RealtimeEngine;
use evacnet_routing::RouteService;

#[tokio::main]
async fn main() {
    let env = std::env::var("EVACNET_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting EvacNet v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Record store (+ migrations) ──────────────────────
    tracing::info!(backend = ?config.database.backend, "Opening record store...");
    let store = RecordStore::connect(&config.database).await?;

    // ── Step 2: Routing client ───────────────────────────────────
    let route_service = RouteService::from_config(&config.routing)?;

    // ── Step 3: Relay engine ─────────────────────────────────────
    let realtime = Arc::new(RealtimeEngine::new(config.realtime.clone()));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = AppState::new(config, store.clone(), route_service, Arc::clone(&realtime));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("EvacNet server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    let shutdown_engine = Arc::clone(&realtime);
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        shutdown_engine.shutdown().await;
    });

    let result = server.await.map_err(AppError::from);

    // ── Step 6: Release resources ────────────────────────────────
    if tokio::time::timeout(grace, store.close()).await.is_err() {
        tracing::warn!("Record store did not close within {:?}", grace);
    }

    result?;
    tracing::info!("EvacNet server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
