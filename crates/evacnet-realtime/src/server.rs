//! Top-level relay engine shared by every WebSocket handler.

use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use evacnet_core::config::RealtimeConfig;

use crate::connection::handle::{ConnectionHandle, ConnectionId};
use crate::connection::registry::{BroadcastReport, ConnectionRegistry};
use crate::metrics::RelayMetrics;

/// Process-wide relay: the connection registry plus shutdown coordination.
#[derive(Clone)]
pub struct RealtimeEngine {
    /// Registry of live connections.
    pub registry: Arc<ConnectionRegistry>,
    /// Metrics collector.
    pub metrics: Arc<RelayMetrics>,
    /// Relay configuration.
    pub config: RealtimeConfig,
    /// Shutdown signal sender.
    shutdown_tx: broadcast::Sender<()>,
}

impl std::fmt::Debug for RealtimeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealtimeEngine")
            .field("config", &self.config)
            .finish()
    }
}

impl RealtimeEngine {
    /// Creates the engine with an empty registry.
    pub fn new(config: RealtimeConfig) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        let metrics = Arc::new(RelayMetrics::new());
        let registry = Arc::new(ConnectionRegistry::new(&config, metrics.clone()));

        info!(
            echo_to_sender = config.echo_to_sender,
            outbound_buffer = config.outbound_buffer,
            send_timeout_ms = config.send_timeout_ms,
            "Relay engine initialized"
        );

        Self {
            registry,
            metrics,
            config,
            shutdown_tx,
        }
    }

    /// Creates a handle for a newly accepted socket and registers it.
    ///
    /// Returns the handle and the receiving end of its outbound queue.
    pub async fn accept(
        &self,
        peer_addr: Option<SocketAddr>,
    ) -> (Arc<ConnectionHandle>, mpsc::Receiver<Bytes>) {
        let (handle, rx) = ConnectionHandle::channel(self.config.outbound_buffer, peer_addr);
        self.registry.connect(handle.clone()).await;
        (handle, rx)
    }

    /// Relays one inbound frame from `origin` to the registered peers.
    ///
    /// Frames from a connection that is no longer registered are discarded.
    pub async fn relay(&self, origin: ConnectionId, payload: Bytes) -> BroadcastReport {
        if !self.registry.contains(&origin).await {
            debug!(conn_id = %origin, "Discarding frame from unregistered connection");
            return BroadcastReport::default();
        }
        self.metrics.record_frame();
        self.registry.broadcast(payload, Some(origin)).await
    }

    /// Returns a shutdown receiver for graceful shutdown coordination.
    pub fn shutdown_receiver(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Signals every connection task to stop and empties the registry.
    pub async fn shutdown(&self) {
        info!("Shutting down relay engine");
        let _ = self.shutdown_tx.send(());
        let closed = self.registry.close_all().await;
        info!(closed, "Relay engine shut down");
    }
}
