//! Relay metrics.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Relay-level metrics counters.
#[derive(Debug, Default)]
pub struct RelayMetrics {
    /// Total connections registered
    pub connections_total: AtomicU64,
    /// Connections currently registered
    pub connections_active: AtomicU64,
    /// Frames received from peers
    pub frames_received: AtomicU64,
    /// Payloads queued for a peer
    pub deliveries: AtomicU64,
    /// Peers dropped after a failed send
    pub peers_dropped: AtomicU64,
}

impl RelayMetrics {
    /// Create new zeroed metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a registered connection
    pub fn record_connect(&self) {
        self.connections_total.fetch_add(1, Ordering::Relaxed);
        self.connections_active.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `count` connections leaving the registry
    pub fn record_disconnect(&self, count: u64) {
        self.connections_active.fetch_sub(count, Ordering::Relaxed);
    }

    /// Record an inbound frame
    pub fn record_frame(&self) {
        self.frames_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the outcome of one broadcast
    pub fn record_broadcast(&self, delivered: u64, dropped: u64) {
        self.deliveries.fetch_add(delivered, Ordering::Relaxed);
        self.peers_dropped.fetch_add(dropped, Ordering::Relaxed);
    }

    /// Get a snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            connections_total: self.connections_total.load(Ordering::Relaxed),
            connections_active: self.connections_active.load(Ordering::Relaxed),
            frames_received: self.frames_received.load(Ordering::Relaxed),
            deliveries: self.deliveries.load(Ordering::Relaxed),
            peers_dropped: self.peers_dropped.load(Ordering::Relaxed),
        }
    }
}

/// Serializable metrics snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Total connections ever registered
    pub connections_total: u64,
    /// Currently registered connections
    pub connections_active: u64,
    /// Frames received from peers
    pub frames_received: u64,
    /// Payloads queued for peers
    pub deliveries: u64,
    /// Peers dropped after a failed send
    pub peers_dropped: u64,
}
