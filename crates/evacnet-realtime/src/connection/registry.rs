//! Registry of live relay connections.
//!
//! The live set is an ordered list behind a `tokio::sync::RwLock`.
//! Registration and removal take the write lock. A broadcast snapshots its
//! targets under the read lock and performs every send after releasing it,
//! so a slow peer never holds up `connect` or `disconnect`. Peers whose send
//! failed are removed afterwards under the write lock.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use evacnet_core::config::RealtimeConfig;

use super::handle::{ConnectionHandle, ConnectionId};
use crate::metrics::RelayMetrics;

/// Outcome of one broadcast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastReport {
    /// Connections a send was attempted to.
    pub attempted: usize,
    /// Connections the payload was queued for.
    pub delivered: usize,
    /// Connections removed because their send failed.
    pub dropped: usize,
}

/// The set of currently open connections, in registration order.
#[derive(Debug)]
pub struct ConnectionRegistry {
    connections: RwLock<Vec<Arc<ConnectionHandle>>>,
    echo_to_sender: bool,
    send_timeout: Duration,
    metrics: Arc<RelayMetrics>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    pub fn new(config: &RealtimeConfig, metrics: Arc<RelayMetrics>) -> Self {
        Self {
            connections: RwLock::new(Vec::new()),
            echo_to_sender: config.echo_to_sender,
            send_timeout: Duration::from_millis(config.send_timeout_ms),
            metrics,
        }
    }

    /// Registers a freshly accepted connection.
    ///
    /// Returns `false` without changing anything when the connection is
    /// already registered or has already been closed.
    pub async fn connect(&self, handle: Arc<ConnectionHandle>) -> bool {
        if !handle.is_alive() {
            debug!(conn_id = %handle.id, "Refusing to register closed connection");
            return false;
        }

        let mut connections = self.connections.write().await;
        if connections.iter().any(|c| c.id == handle.id) {
            return false;
        }
        // Re-check under the lock: `disconnect` may have closed it meanwhile.
        if !handle.is_alive() {
            return false;
        }

        connections.push(handle.clone());
        let total = connections.len();
        // Counted before a concurrent removal can subtract it.
        self.metrics.record_connect();
        drop(connections);

        info!(
            conn_id = %handle.id,
            peer = ?handle.peer_addr,
            connections = total,
            "Relay connection registered"
        );
        true
    }

    /// Removes a connection and marks it closed.
    ///
    /// Unknown ids are ignored. Returns whether a connection was removed.
    pub async fn disconnect(&self, conn_id: &ConnectionId) -> bool {
        let mut connections = self.connections.write().await;
        let Some(index) = connections.iter().position(|c| c.id == *conn_id) else {
            return false;
        };
        let handle = connections.remove(index);
        let total = connections.len();
        drop(connections);

        handle.mark_closed();
        self.metrics.record_disconnect(1);
        info!(conn_id = %conn_id, connections = total, "Relay connection unregistered");
        true
    }

    /// Sends `payload` to every registered connection in registration order.
    ///
    /// `origin` is skipped when echoing to the sender is disabled. A failed
    /// send never stops the fan-out; the failing connection is removed once
    /// every send has been attempted.
    pub async fn broadcast(&self, payload: Bytes, origin: Option<ConnectionId>) -> BroadcastReport {
        let targets: Vec<Arc<ConnectionHandle>> = {
            let connections = self.connections.read().await;
            connections
                .iter()
                .filter(|c| self.echo_to_sender || origin != Some(c.id))
                .cloned()
                .collect()
        };

        if targets.is_empty() {
            return BroadcastReport::default();
        }

        let deadline = self.send_timeout;
        let results = join_all(targets.iter().map(|target| {
            let payload = payload.clone();
            async move { target.send(payload, deadline).await }
        }))
        .await;

        let mut failed = Vec::new();
        for (target, result) in targets.iter().zip(results) {
            if let Err(reason) = result {
                warn!(conn_id = %target.id, %reason, "Dropping relay peer after failed send");
                target.mark_closed();
                failed.push(target.id);
            }
        }

        let dropped = if failed.is_empty() {
            0
        } else {
            self.remove_all(&failed).await
        };

        let report = BroadcastReport {
            attempted: targets.len(),
            delivered: targets.len() - failed.len(),
            dropped,
        };
        self.metrics
            .record_broadcast(report.delivered as u64, report.dropped as u64);
        debug!(
            origin = ?origin,
            bytes = payload.len(),
            attempted = report.attempted,
            delivered = report.delivered,
            dropped = report.dropped,
            "Broadcast complete"
        );
        report
    }

    /// Closes and removes every connection. Returns how many were removed.
    pub async fn close_all(&self) -> usize {
        let drained: Vec<Arc<ConnectionHandle>> = {
            let mut connections = self.connections.write().await;
            connections.drain(..).collect()
        };
        for handle in &drained {
            handle.mark_closed();
        }
        self.metrics.record_disconnect(drained.len() as u64);
        info!(count = drained.len(), "Closed all relay connections");
        drained.len()
    }

    /// Number of registered connections.
    pub async fn len(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Whether no connection is registered.
    pub async fn is_empty(&self) -> bool {
        self.connections.read().await.is_empty()
    }

    /// Whether `conn_id` is registered.
    pub async fn contains(&self, conn_id: &ConnectionId) -> bool {
        self.connections
            .read()
            .await
            .iter()
            .any(|c| c.id == *conn_id)
    }

    /// Ids of the registered connections, in registration order.
    pub async fn connection_ids(&self) -> Vec<ConnectionId> {
        self.connections.read().await.iter().map(|c| c.id).collect()
    }

    async fn remove_all(&self, ids: &[ConnectionId]) -> usize {
        let mut connections = self.connections.write().await;
        let before = connections.len();
        connections.retain(|c| !ids.contains(&c.id));
        let removed = before - connections.len();
        drop(connections);

        self.metrics.record_disconnect(removed as u64);
        removed
    }
}
